use clap::{Parser, Subcommand};

use dexview_core::config::{CatalogConfig, DEFAULT_API_BASE, DEFAULT_LIST_LIMIT, DEFAULT_PAGE_SIZE};
use dexview_core::pipeline::{FilterSpec, SortKey};
use dexview_core::region::ALL;

#[derive(Parser, Debug, Clone)]
#[command(name = "dexview", version, about = "Browse the creature catalog from the terminal")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Upstream API root.
    #[arg(long, global = true, env = "DEXVIEW_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Number of entries requested in the single list call.
    #[arg(long, global = true, env = "DEXVIEW_LIST_LIMIT", default_value_t = DEFAULT_LIST_LIMIT)]
    pub limit: u32,

    /// Entries per page.
    #[arg(long, global = true, env = "DEXVIEW_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Per-request timeout in milliseconds (default: wait indefinitely).
    #[arg(long, global = true, env = "DEXVIEW_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch the whole catalog, filter it and print the first pages.
    Browse {
        /// Region key (see `dexview regions`).
        #[arg(long, default_value = ALL)]
        region: String,

        /// Type key (see `dexview types`).
        #[arg(long = "type", default_value = ALL)]
        type_key: String,

        /// Sort order: id|name
        #[arg(long, default_value = "id")]
        sort: SortKey,

        /// Case-insensitive substring of the display name.
        #[arg(long, default_value = "")]
        search: String,

        /// Number of pages to reveal.
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Show one entity with its species profile and evolution line.
    Show {
        /// Numeric id or name.
        id: String,
    },

    /// List region keys and their slices.
    Regions,

    /// List type keys.
    Types,

    /// Run environment checks.
    Doctor,
}

impl Cli {
    /// Catalog configuration assembled from global flags.
    pub fn catalog_config(&self) -> CatalogConfig {
        let mut cfg = CatalogConfig::default();
        cfg.api.base_url = self.api_base.clone();
        cfg.api.list_limit = self.limit;
        cfg.api.request_timeout_ms = self.timeout_ms;
        cfg.paging.page_size = self.page_size;
        cfg
    }
}

impl Command {
    /// Filter spec of a `browse` invocation.
    pub fn filter_spec(&self) -> Option<FilterSpec> {
        match self {
            Command::Browse {
                region,
                type_key,
                sort,
                search,
                ..
            } => Some(FilterSpec {
                region: region.clone(),
                type_key: type_key.clone(),
                sort: *sort,
                search: search.clone(),
            }),
            _ => None,
        }
    }
}
