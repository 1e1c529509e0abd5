use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use dexview_client::{CatalogClient, Evolution};
use dexview_core::config::CatalogConfig;
use dexview_core::model::EntityDetail;
use dexview_core::text::format::{format_name, format_stat_label};

use crate::{output, render};

#[derive(Debug, Serialize)]
pub struct StatOut {
    pub name: String,
    pub label: String,
    pub base: u32,
    pub effort: u32,
    pub bar: f64,
}

#[derive(Debug, Serialize)]
pub struct EvolutionEntryOut {
    pub id: u32,
    pub number: String,
    pub name: String,
    pub current: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum EvolutionOut {
    Columns(Vec<Vec<EvolutionEntryOut>>),
    Unavailable(String),
}

#[derive(Debug, Serialize)]
pub struct ShowOut {
    pub id: u32,
    pub number: String,
    pub name: String,
    pub species: String,
    pub genus: Option<String>,
    pub description: String,
    pub types: Vec<String>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub base_experience: Option<u32>,
    pub artwork: Option<String>,
    pub stats: Vec<StatOut>,
    pub evolution: EvolutionOut,
}

pub async fn run(cfg: &CatalogConfig, id: &str) -> Result<()> {
    let client = CatalogClient::new(cfg)?;

    let pb = output::spinner("fetching entity");
    let loaded = load(&client, id).await;
    pb.finish_and_clear();
    let out = loaded?;

    if output::is_json() {
        return output::print(&out);
    }
    render::show(&out)
}

async fn load(client: &CatalogClient, id: &str) -> Result<ShowOut> {
    let entity = client.fetch_entity(id).await?;
    let profile = client.load_profile(&entity).await?;

    let evolution = match &profile.evolution {
        Evolution::Columns(columns) => match client
            .fetch_column_entities(columns, std::slice::from_ref(&entity))
            .await
        {
            Ok(resolved) => EvolutionOut::Columns(
                resolved
                    .iter()
                    .map(|column| column.iter().map(|e| evolution_entry(e, &entity)).collect())
                    .collect(),
            ),
            Err(e) => {
                warn!(error = %e, "evolution entities unavailable");
                EvolutionOut::Unavailable(e.to_string())
            }
        },
        Evolution::Unavailable(reason) => EvolutionOut::Unavailable(reason.clone()),
    };

    Ok(ShowOut {
        id: entity.id,
        number: entity.dex_number(),
        name: entity.display_name(),
        species: format_name(&entity.species.name),
        genus: profile.genus().map(str::to_string),
        description: profile.description(),
        types: entity.types.iter().map(|t| t.type_name().to_string()).collect(),
        height_m: entity.height_m(),
        weight_kg: entity.weight_kg(),
        base_experience: entity.base_experience,
        artwork: entity.artwork_url().map(str::to_string),
        stats: entity
            .stats
            .iter()
            .map(|s| StatOut {
                name: s.stat_name().to_string(),
                label: format_stat_label(s.stat_name()),
                base: s.base_value,
                effort: s.effort_value,
                bar: s.bar_ratio(),
            })
            .collect(),
        evolution,
    })
}

fn evolution_entry(e: &EntityDetail, current: &EntityDetail) -> EvolutionEntryOut {
    EvolutionEntryOut {
        id: e.id,
        number: e.dex_number(),
        name: e.display_name(),
        current: e.id == current.id,
    }
}
