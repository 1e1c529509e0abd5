//! dexview data models.
//!
//! These types mirror the upstream REST API payloads closely enough to be
//! decoded with serde, while exposing domain names (`slot_index`,
//! `base_value`, ...) to the rest of the crate.
//!
//! Models are plain data. Decoding from untrusted JSON must go through
//! [`validate`], which checks the structural shape first and reports a
//! [`crate::CoreError::Malformed`] instead of letting a missing field surface
//! later as a confusing failure.

pub mod entity;
pub mod evolution;
pub mod species;
pub mod validate;

use serde::{Deserialize, Serialize};

use crate::ident::id_from_url;

pub use entity::{ArtworkSprite, EntityDetail, OtherSprites, Sprites, StatEntry, TypeSlot, KNOWN_STATS};
pub use evolution::{EvolutionChain, EvolutionNode};
pub use species::{FlavorTextEntry, Genus, ResourceLink, SpeciesDetail, ENGLISH};

/// `{ name, url }` reference used all over the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Identifier derived from the trailing URL segment.
    pub fn id(&self) -> String {
        id_from_url(&self.url)
    }
}

/// Response body of the list resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl ListResponse {
    /// Attach derived identifiers to every list entry, preserving order.
    pub fn into_summaries(self) -> Vec<EntitySummary> {
        self.results.into_iter().map(EntitySummary::from).collect()
    }
}

/// One list entry with its identifier derived from the resource URL.
///
/// The raw list response carries no id; it exists only to drive the detail
/// fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl From<NamedResource> for EntitySummary {
    fn from(r: NamedResource) -> Self {
        Self {
            id: id_from_url(&r.url),
            name: r.name,
            url: r.url,
        }
    }
}
