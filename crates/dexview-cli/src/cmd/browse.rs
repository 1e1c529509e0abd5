use anyhow::{bail, Result};
use serde::Serialize;

use dexview_client::CatalogClient;
use dexview_core::config::CatalogConfig;
use dexview_core::model::EntityDetail;
use dexview_core::paging::Pager;
use dexview_core::pipeline::{apply_filters_with, FilterSpec, TYPE_KEYS};
use dexview_core::region::ALL;

use crate::{output, render};

#[derive(Debug, Serialize)]
pub struct CardOut {
    pub id: u32,
    pub number: String,
    pub name: String,
    pub types: Vec<String>,
    pub artwork: Option<String>,
}

impl From<&EntityDetail> for CardOut {
    fn from(e: &EntityDetail) -> Self {
        Self {
            id: e.id,
            number: e.dex_number(),
            name: e.display_name(),
            types: e.types.iter().map(|t| t.type_name().to_string()).collect(),
            artwork: e.artwork_url().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BrowseOut {
    pub filters: FilterSpec,
    pub total: usize,
    pub matched: usize,
    pub shown: usize,
    pub has_more: bool,
    pub entries: Vec<CardOut>,
}

pub async fn run(cfg: &CatalogConfig, spec: FilterSpec, pages: usize) -> Result<()> {
    // Reject bad keys before spending a thousand requests.
    cfg.regions.lookup(&spec.region)?;
    if spec.type_key != ALL && !TYPE_KEYS.contains(&spec.type_key.as_str()) {
        bail!("unknown type: {} (see `dexview types`)", spec.type_key);
    }

    let client = CatalogClient::new(cfg)?;

    let pb = output::spinner("fetching catalog");
    let fetched = client.fetch_collection().await;
    pb.finish_and_clear();
    let all = fetched?;

    let displayed = apply_filters_with(&all, &spec, &cfg.regions)?;

    let mut pager = Pager::new(cfg.paging.page_size);
    for _ in 1..pages.max(1) {
        pager.load_more();
    }
    let shown = pager.visible_slice(&displayed);

    let out = BrowseOut {
        filters: spec,
        total: all.len(),
        matched: displayed.len(),
        shown: shown.len(),
        has_more: pager.has_more(displayed.len()),
        entries: shown.iter().map(|e| CardOut::from(*e)).collect(),
    };

    if output::is_json() {
        return output::print(&out);
    }
    if out.entries.is_empty() {
        output::eprintln_line("no entries match the current filters");
        return Ok(());
    }
    render::browse(&out)
}
