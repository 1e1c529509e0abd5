use anyhow::Result;
use serde::Serialize;

use dexview_client::CatalogClient;
use dexview_core::config::{validate_config, CatalogConfig};

use crate::output;

#[derive(Debug, Serialize)]
pub struct Check {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct DoctorOut {
    pub ok: bool,
    pub checks: Vec<Check>,
}

pub async fn run(cfg: &CatalogConfig) -> Result<()> {
    let mut checks = Vec::new();

    let config_check = validate_config(cfg);
    checks.push(Check {
        name: "config".to_string(),
        ok: config_check.is_ok(),
        detail: match &config_check {
            Ok(()) => format!("api base {}", cfg.api.base_url),
            Err(e) => e.to_string(),
        },
    });

    let api_check = match CatalogClient::new(cfg) {
        Ok(client) => client.ping().await.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    checks.push(Check {
        name: "api".to_string(),
        ok: api_check.is_ok(),
        detail: match api_check {
            Ok(()) => "list endpoint reachable".to_string(),
            Err(e) => e,
        },
    });

    let ok = checks.iter().all(|c| c.ok);
    output::print(&DoctorOut { ok, checks })?;
    Ok(())
}
