use anyhow::Result;

use crate::args::{Cli, Command};

mod browse;
mod doctor;
mod regions;
mod show;
mod types;

pub use browse::BrowseOut;
pub use regions::RegionsOut;
pub use show::{EvolutionOut, ShowOut};

pub async fn dispatch(cli: Cli) -> Result<()> {
    let cfg = cli.catalog_config();
    let spec = cli.command.filter_spec();
    match cli.command {
        Command::Browse { pages, .. } => browse::run(&cfg, spec.unwrap_or_default(), pages).await,
        Command::Show { id } => show::run(&cfg, &id).await,
        Command::Regions => regions::run(&cfg).await,
        Command::Types => types::run().await,
        Command::Doctor => doctor::run(&cfg).await,
    }
}
