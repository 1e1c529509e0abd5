//! Entity profile: species information plus the evolution view.

use serde::Serialize;

use dexview_core::evolution::EvolutionColumns;
use dexview_core::model::SpeciesDetail;

/// Evolution data for a profile. A failed chain fetch does not fail the
/// profile; it is carried here instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Evolution {
    Columns(EvolutionColumns),
    Unavailable(String),
}

impl Evolution {
    pub fn columns(&self) -> Option<&EvolutionColumns> {
        match self {
            Self::Columns(c) => Some(c),
            Self::Unavailable(_) => None,
        }
    }

    /// True when there is nothing to show in the evolution view.
    pub fn is_empty(&self) -> bool {
        self.columns().map_or(true, |c| c.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityProfile {
    pub species: SpeciesDetail,
    pub evolution: Evolution,
}

impl EntityProfile {
    pub fn genus(&self) -> Option<&str> {
        self.species.english_genus()
    }

    pub fn description(&self) -> String {
        self.species.english_flavor_text()
    }
}
