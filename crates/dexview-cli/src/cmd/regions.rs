use anyhow::Result;
use serde::Serialize;

use dexview_core::config::CatalogConfig;

use crate::{output, render};

#[derive(Debug, Serialize)]
pub struct RegionOut {
    pub key: String,
    pub start: usize,
    /// `None` for a region that runs to the end of the collection.
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RegionsOut {
    pub regions: Vec<RegionOut>,
}

pub async fn run(cfg: &CatalogConfig) -> Result<()> {
    let regions = cfg
        .regions
        .iter()
        .map(|r| RegionOut {
            key: r.key.clone(),
            start: r.span.start,
            count: (r.span.count != usize::MAX).then_some(r.span.count),
        })
        .collect();

    let out = RegionsOut { regions };
    if output::is_json() {
        return output::print(&out);
    }
    render::regions(&out)
}
