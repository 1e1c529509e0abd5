//! Entity detail records.

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, CoreResult};
use crate::model::NamedResource;
use crate::text::format::{format_dex_number, format_name};

/// Stat names every detail record carries.
pub const KNOWN_STATS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Upper bound of a base stat, used to scale stat bars.
pub const MAX_BASE_STAT: u32 = 255;

/// Full record for one entity.
///
/// Fetched once and never patched afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDetail {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub species: NamedResource,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "slot")]
    pub slot_index: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

impl TypeSlot {
    pub fn type_name(&self) -> &str {
        &self.type_ref.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    #[serde(rename = "base_stat")]
    pub base_value: u32,
    #[serde(rename = "effort")]
    pub effort_value: u32,
    pub stat: NamedResource,
}

impl StatEntry {
    pub fn stat_name(&self) -> &str {
        &self.stat.name
    }

    /// Fill ratio of a stat bar, clamped to `[0, 1]`.
    pub fn bar_ratio(&self) -> f64 {
        (f64::from(self.base_value) / f64::from(MAX_BASE_STAT)).min(1.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprite,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkSprite {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl EntityDetail {
    /// True if any of the entity's types is named `type_name`.
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.type_name() == type_name)
    }

    /// Preferred image: official artwork, then the default sprite.
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.sprites.front_default.as_deref().filter(|s| !s.is_empty()))
    }

    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }

    pub fn display_name(&self) -> String {
        format_name(&self.name)
    }

    pub fn dex_number(&self) -> String {
        format_dex_number(self.id)
    }

    pub fn stat(&self, name: &str) -> Option<&StatEntry> {
        self.stats.iter().find(|s| s.stat_name() == name)
    }

    /// Check the structural invariants of a freshly decoded record:
    /// - at least one type, slots ascending from 1
    /// - every known stat present
    pub fn validate(&self) -> CoreResult<()> {
        if self.types.is_empty() {
            return Err(CoreError::malformed("detail", format!("entity {} has no types", self.id)));
        }
        for (i, t) in self.types.iter().enumerate() {
            if usize::from(t.slot_index) != i + 1 {
                return Err(CoreError::malformed(
                    "detail",
                    format!(
                        "entity {} type slots are not ascending from 1 (slot {} at position {i})",
                        self.id, t.slot_index
                    ),
                ));
            }
        }
        for name in KNOWN_STATS {
            if self.stat(name).is_none() {
                return Err(CoreError::malformed(
                    "detail",
                    format!("entity {} is missing stat {name}", self.id),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal valid detail record for tests.
    pub fn entity(id: u32, name: &str, types: &[&str]) -> EntityDetail {
        EntityDetail {
            id,
            name: name.to_string(),
            height: 7,
            weight: 69,
            types: types
                .iter()
                .enumerate()
                .map(|(i, t)| TypeSlot {
                    slot_index: (i + 1) as u8,
                    type_ref: NamedResource::new(*t, format!("https://pokeapi.co/api/v2/type/{t}/")),
                })
                .collect(),
            stats: KNOWN_STATS
                .iter()
                .map(|s| StatEntry {
                    base_value: 50,
                    effort_value: 0,
                    stat: NamedResource::new(*s, format!("https://pokeapi.co/api/v2/stat/{s}/")),
                })
                .collect(),
            species: NamedResource::new(
                name,
                format!("https://pokeapi.co/api/v2/pokemon-species/{id}/"),
            ),
            base_experience: Some(64),
            sprites: Sprites::default(),
        }
    }
}
