//! Configuration structures for dexview-core.
//!
//! This module defines explicit, serializable configuration objects used by
//! higher-level components (client, CLI) to locate the upstream API, size the
//! collection request and control pagination.
//!
//! The core crate itself does not read environment variables. All configuration
//! must be provided explicitly by the caller.

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, CoreResult};
use crate::region::{RegionTable, ALL};

/// Default upstream API root.
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2/";

/// Number of list entries requested in the single collection call.
pub const DEFAULT_LIST_LIMIT: u32 = 1302;

/// Entries revealed per "load more" step.
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Maximum evolution tree depth accepted before the input is considered malformed.
pub const DEFAULT_MAX_EVOLUTION_DEPTH: usize = 16;

/// Global configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub api: ApiConfig,
    pub paging: PagingConfig,
    pub evolution: EvolutionConfig,
    pub regions: RegionTable,
}

/// Upstream API location and request sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub list_limit: u32,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
            request_timeout_ms: None,
        }
    }
}

impl ApiConfig {
    /// URL of a resource collection under the API root, e.g. `pokemon`.
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), resource.trim_matches('/'))
    }

    /// URL of the single list call that covers the whole collection.
    pub fn list_url(&self) -> String {
        format!("{}?limit={}", self.resource_url("pokemon"), self.list_limit)
    }

    /// URL of one entity by id or name.
    pub fn entity_url(&self, id_or_name: &str) -> String {
        format!("{}/{}/", self.resource_url("pokemon"), id_or_name.trim().to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingConfig {
    pub page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub max_depth: usize,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_EVOLUTION_DEPTH,
        }
    }
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &CatalogConfig) -> CoreResult<()> {
    if cfg.api.base_url.trim().is_empty() {
        return Err(CoreError::invalid_argument("api base_url must not be empty"));
    }

    if cfg.api.list_limit == 0 {
        return Err(CoreError::invalid_argument(
            "list_limit must be greater than zero",
        ));
    }

    if cfg.paging.page_size == 0 {
        return Err(CoreError::invalid_argument(
            "page_size must be greater than zero",
        ));
    }

    if cfg.evolution.max_depth == 0 {
        return Err(CoreError::invalid_argument(
            "evolution max_depth must be greater than zero",
        ));
    }

    if !cfg.regions.contains(ALL) {
        return Err(CoreError::invalid_argument(
            "region table must contain an `all` entry",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = CatalogConfig::default();
        validate_config(&cfg).unwrap();
    }

    #[test]
    fn zero_page_size_detected() {
        let mut cfg = CatalogConfig::default();
        cfg.paging.page_size = 0;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn empty_base_url_detected() {
        let mut cfg = CatalogConfig::default();
        cfg.api.base_url = "  ".to_string();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let api = ApiConfig::default();
        assert_eq!(api.list_url(), "https://pokeapi.co/api/v2/pokemon?limit=1302");
        assert_eq!(api.entity_url("Pikachu"), "https://pokeapi.co/api/v2/pokemon/pikachu/");

        let api = ApiConfig {
            base_url: "http://127.0.0.1:9000".to_string(),
            ..ApiConfig::default()
        };
        assert_eq!(api.resource_url("/pokemon/"), "http://127.0.0.1:9000/pokemon");
    }
}
