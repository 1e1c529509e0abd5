//! Species records: genus, flavor text and the evolution chain link.

use serde::{Deserialize, Serialize};

use crate::model::NamedResource;
use crate::text::format::{clean_flavor_text, NO_DESCRIPTION};

/// Language tag selected for all localized species text.
pub const ENGLISH: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDetail {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: String,
    pub genera: Vec<Genus>,
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub evolution_chain: ResourceLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    #[serde(default)]
    pub version: Option<NamedResource>,
}

/// Bare `{ url }` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub url: String,
}

impl SpeciesDetail {
    /// First genus tagged `en`.
    pub fn english_genus(&self) -> Option<&str> {
        self.genera
            .iter()
            .find(|g| g.language.name == ENGLISH)
            .map(|g| g.genus.as_str())
    }

    /// Raw text of the last English flavor entry.
    ///
    /// Entries are listed in insertion order, so the last one is the most
    /// recently added description.
    pub fn latest_english_flavor(&self) -> Option<&str> {
        self.flavor_text_entries
            .iter()
            .rev()
            .find(|e| e.language.name == ENGLISH)
            .map(|e| e.flavor_text.as_str())
    }

    /// Display-ready description, or the "no description" fallback.
    pub fn english_flavor_text(&self) -> String {
        self.latest_english_flavor()
            .map(clean_flavor_text)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string())
    }

    pub fn evolution_chain_url(&self) -> &str {
        &self.evolution_chain.url
    }
}
