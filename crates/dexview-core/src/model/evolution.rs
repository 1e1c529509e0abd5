//! Evolution chain tree as returned by the upstream API.

use serde::{Deserialize, Serialize};

use crate::model::NamedResource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    #[serde(default)]
    pub id: Option<u32>,
    pub chain: EvolutionNode,
}

/// One node of the evolution tree. Children are alternate next stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn new(species: NamedResource) -> Self {
        Self {
            species,
            evolves_to: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: EvolutionNode) -> Self {
        self.evolves_to.push(child);
        self
    }

    /// URL of the species this node refers to.
    pub fn species_url(&self) -> &str {
        &self.species.url
    }
}
