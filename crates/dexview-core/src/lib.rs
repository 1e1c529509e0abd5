//! dexview-core
//!
//! Core primitives for dexview:
//! - Catalog data models (list entries, entity details, species, evolution trees)
//! - Structural validation of upstream payloads
//! - Identifier extraction and display formatting
//! - The filter/sort pipeline over the in-memory collection
//! - Evolution tree flattening into level-ordered columns
//! - Region table, pagination and configuration
//!
//! Nothing in this crate performs I/O. `dexview-client` fetches the data and
//! hands typed values to these functions.

pub mod config;
pub mod errors;
pub mod evolution;
pub mod ident;
pub mod model;
pub mod paging;
pub mod pipeline;
pub mod region;
pub mod text;

pub use crate::errors::{CoreError, CoreResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::{validate_config, ApiConfig, CatalogConfig, PagingConfig};
    pub use crate::evolution::{
        flatten_columns, resolve_column_entities, ColumnEntry, EvolutionColumns,
    };
    pub use crate::ident::id_from_url;
    pub use crate::model::{
        EntityDetail, EntitySummary, EvolutionChain, EvolutionNode, ListResponse, NamedResource,
        SpeciesDetail,
    };
    pub use crate::paging::Pager;
    pub use crate::pipeline::{apply_filters, apply_filters_with, FilterPatch, FilterSpec, SortKey};
    pub use crate::region::{RegionSpan, RegionTable};
    pub use crate::text::{format_name, format_stat_label};
    pub use crate::{CoreError, CoreResult};
}
