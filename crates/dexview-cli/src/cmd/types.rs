use anyhow::Result;
use serde::Serialize;

use dexview_core::pipeline::TYPE_KEYS;
use dexview_core::region::ALL;

use crate::output;

#[derive(Debug, Serialize)]
pub struct TypesOut {
    pub types: Vec<String>,
}

pub async fn run() -> Result<()> {
    let types = std::iter::once(ALL)
        .chain(TYPE_KEYS)
        .map(str::to_string)
        .collect::<Vec<_>>();

    if output::is_json() {
        return output::print(&TypesOut { types });
    }
    for t in types {
        println!("{t}");
    }
    Ok(())
}
