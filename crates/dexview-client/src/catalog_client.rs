//! Catalog client for the upstream creature-database API.
//!
//! This client can:
//! - fetch the entity list and every entity's detail record in one concurrent wave
//! - fetch species records, validating their shape before use
//! - fetch an evolution chain and flatten it into level-ordered columns
//! - load an entity profile, isolating evolution failures from the rest
//!
//! All requests are plain GETs. Nothing is cached or retried.

use std::time::Duration;

use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use dexview_core::config::{validate_config, ApiConfig, CatalogConfig};
use dexview_core::evolution::{
    flatten_columns, resolve_column_entities, ColumnEntry, EvolutionColumns,
};
use dexview_core::model::validate::{
    decode_detail, decode_evolution_chain, decode_list, decode_species,
};
use dexview_core::model::{EntityDetail, EntitySummary, SpeciesDetail};

use crate::constants::{user_agent, ENTITY_RESOURCE, PING_QUERY};
use crate::error::{FetchError, FetchResult, Resource};
use crate::profile::{EntityProfile, Evolution};

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    api: ApiConfig,
    max_evolution_depth: usize,
}

impl CatalogClient {
    /// Build a client from an explicit configuration.
    pub fn new(cfg: &CatalogConfig) -> FetchResult<Self> {
        validate_config(cfg)?;
        Url::parse(&cfg.api.base_url)
            .map_err(|e| FetchError::Config(format!("invalid api base url {}: {e}", cfg.api.base_url)))?;

        let mut builder = reqwest::Client::builder().user_agent(user_agent());
        if let Some(ms) = cfg.api.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::Config(format!("http client: {e}")))?;

        Ok(Self {
            http,
            api: cfg.api.clone(),
            max_evolution_depth: cfg.evolution.max_depth,
        })
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// Fetch the list resource and derive identifiers for every entry.
    #[instrument(skip(self))]
    pub async fn fetch_list(&self, list_url: &str) -> FetchResult<Vec<EntitySummary>> {
        let v = self.get_json(list_url, Resource::List).await?;
        let list = decode_list(v).map_err(|e| Resource::List.malformed_error(list_url, e.to_string()))?;
        debug!(count = list.count, results = list.results.len(), "list fetched");
        Ok(list.into_summaries())
    }

    /// Fetch one entity detail record.
    pub async fn fetch_detail(&self, url: &str) -> FetchResult<EntityDetail> {
        let v = self.get_json(url, Resource::Detail).await?;
        decode_detail(v).map_err(|e| Resource::Detail.malformed_error(url, e.to_string()))
    }

    /// Fetch one entity by id or name.
    pub async fn fetch_entity(&self, id_or_name: &str) -> FetchResult<EntityDetail> {
        self.fetch_detail(&self.api.entity_url(id_or_name)).await
    }

    /// Fetch the list, then every detail record concurrently.
    ///
    /// All detail requests are issued in a single wave. The first failure
    /// fails the whole call and no partial collection is returned. The
    /// result follows the list order, not completion order.
    #[instrument(skip(self))]
    pub async fn fetch_all_entities(&self, list_url: &str) -> FetchResult<Vec<EntityDetail>> {
        let summaries = self.fetch_list(list_url).await?;
        let details = try_join_all(summaries.iter().map(|s| self.fetch_detail(&s.url))).await?;
        info!(entities = details.len(), "collection fetched");
        Ok(details)
    }

    /// [`CatalogClient::fetch_all_entities`] against the configured list URL.
    pub async fn fetch_collection(&self) -> FetchResult<Vec<EntityDetail>> {
        self.fetch_all_entities(&self.api.list_url()).await
    }

    /// Fetch and validate a species record.
    #[instrument(skip(self))]
    pub async fn fetch_species(&self, species_url: &str) -> FetchResult<SpeciesDetail> {
        let v = self.get_json(species_url, Resource::Species).await?;
        decode_species(v).map_err(|e| Resource::Species.malformed_error(species_url, e.to_string()))
    }

    /// Fetch an evolution chain and flatten it into columns of identifiers.
    #[instrument(skip(self))]
    pub async fn resolve_evolution_columns(&self, chain_url: &str) -> FetchResult<EvolutionColumns> {
        let v = self.get_json(chain_url, Resource::EvolutionChain).await?;
        let chain = decode_evolution_chain(v)
            .map_err(|e| Resource::EvolutionChain.malformed_error(chain_url, e.to_string()))?;
        let columns = flatten_columns(&chain.chain, self.max_evolution_depth)
            .map_err(|e| Resource::EvolutionChain.malformed_error(chain_url, e.to_string()))?;
        debug!(levels = columns.len(), "evolution chain resolved");
        Ok(columns)
    }

    /// Load species data and evolution columns for one entity.
    ///
    /// A species failure fails the call. An evolution failure is logged and
    /// reported as [`Evolution::Unavailable`].
    #[instrument(skip(self, entity), fields(entity = entity.id))]
    pub async fn load_profile(&self, entity: &EntityDetail) -> FetchResult<EntityProfile> {
        let species = self.fetch_species(&entity.species.url).await?;

        let evolution = match self.resolve_evolution_columns(species.evolution_chain_url()).await {
            Ok(columns) => Evolution::Columns(columns),
            Err(e) => {
                warn!(error = %e, kind = e.kind(), "evolution data unavailable");
                Evolution::Unavailable(e.to_string())
            }
        };

        Ok(EntityProfile { species, evolution })
    }

    /// Entity record behind every identifier of `columns`, keeping the
    /// column layout. Entities found in `known` are reused; the rest are
    /// fetched concurrently.
    pub async fn fetch_column_entities(
        &self,
        columns: &EvolutionColumns,
        known: &[EntityDetail],
    ) -> FetchResult<Vec<Vec<EntityDetail>>> {
        let resolved = resolve_column_entities(columns, known);
        try_join_all(resolved.iter().map(|column| {
            try_join_all(column.iter().map(|entry| async move {
                match *entry {
                    ColumnEntry::Known(e) => Ok(e.clone()),
                    ColumnEntry::Missing(id) => self.fetch_entity(id).await,
                }
            }))
        }))
        .await
    }

    /// Check that the list endpoint answers with a success status.
    pub async fn ping(&self) -> FetchResult<()> {
        let url = format!("{}?{PING_QUERY}", self.api.resource_url(ENTITY_RESOURCE));
        self.fetch_list(&url).await.map(|_| ())
    }

    async fn get_json(&self, url: &str, resource: Resource) -> FetchResult<Value> {
        debug!(%url, ?resource, "GET");
        let transport = |source| resource.transport_error(url, source);

        let resp = self.http.get(url).send().await.map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(resource.status_error(url, status.as_u16()));
        }

        let bytes = resp.bytes().await.map_err(transport)?;
        serde_json::from_slice(&bytes)
            .map_err(|e| resource.malformed_error(url, format!("invalid json: {e}")))
    }
}
