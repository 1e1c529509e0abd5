//! Filter/sort pipeline over the in-memory collection.
//!
//! The displayed subset is a pure function of the full collection and the
//! current [`FilterSpec`]:
//!
//! 1. region slice (contiguous id range, see [`crate::region`])
//! 2. type predicate
//! 3. search predicate on the formatted species name
//! 4. sort (only for [`SortKey::Name`]; id order is the collection's own order)
//!
//! Stages borrow from the collection and never mutate it, so re-running the
//! pipeline with the same inputs yields the same output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, CoreResult};
use crate::model::EntityDetail;
use crate::region::{RegionTable, ALL};

pub mod stages;

use stages::{SearchStage, SortByNameStage, TypeStage};

/// Elemental type keys accepted by the type filter, besides [`ALL`].
pub const TYPE_KEYS: [&str; 18] = [
    "normal", "fire", "water", "grass", "electric", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Id,
    Name,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            other => Err(CoreError::invalid_argument(format!("unknown sort key: {other}"))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active filter, sort and search parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub region: String,
    pub type_key: String,
    pub sort: SortKey,
    pub search: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            region: ALL.to_string(),
            type_key: ALL.to_string(),
            sort: SortKey::Id,
            search: String::new(),
        }
    }
}

/// Partial update of a [`FilterSpec`]; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPatch {
    pub region: Option<String>,
    pub type_key: Option<String>,
    pub sort: Option<SortKey>,
    pub search: Option<String>,
}

impl FilterSpec {
    /// Return a new spec with the patch applied.
    pub fn merge(&self, patch: FilterPatch) -> Self {
        Self {
            region: patch.region.unwrap_or_else(|| self.region.clone()),
            type_key: patch.type_key.unwrap_or_else(|| self.type_key.clone()),
            sort: patch.sort.unwrap_or(self.sort),
            search: patch.search.unwrap_or_else(|| self.search.clone()),
        }
    }

    /// True when nothing differs from the initial state.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A pipeline stage over borrowed entities.
///
/// Stages must be pure: the output depends only on the input and the
/// stage's own parameters.
pub trait FilterStage {
    /// Stable stage id, e.g. `filter.type`.
    fn id(&self) -> &str;

    fn run<'a>(&self, items: Vec<&'a EntityDetail>) -> Vec<&'a EntityDetail>;
}

/// Ordered stages built from one [`FilterSpec`].
pub struct FilterPipeline {
    region: crate::region::RegionSpan,
    stages: Vec<Box<dyn FilterStage>>,
}

impl FilterPipeline {
    pub fn from_spec(spec: &FilterSpec, regions: &RegionTable) -> CoreResult<Self> {
        let region = regions.lookup(&spec.region)?;

        let mut stages: Vec<Box<dyn FilterStage>> = Vec::new();
        if spec.type_key != ALL {
            stages.push(Box::new(TypeStage::new(spec.type_key.clone())));
        }
        if !spec.search.is_empty() {
            stages.push(Box::new(SearchStage::new(&spec.search)));
        }
        if spec.sort == SortKey::Name {
            stages.push(Box::new(SortByNameStage));
        }

        Ok(Self { region, stages })
    }

    pub fn stage_ids(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.id()).collect()
    }

    pub fn run<'a>(&self, collection: &'a [EntityDetail]) -> Vec<&'a EntityDetail> {
        let sliced = self.region.slice(collection).iter().collect();
        self.stages.iter().fold(sliced, |items, stage| stage.run(items))
    }
}

/// Derive the displayed subset using the built-in region table.
pub fn apply_filters<'a>(
    collection: &'a [EntityDetail],
    spec: &FilterSpec,
) -> CoreResult<Vec<&'a EntityDetail>> {
    apply_filters_with(collection, spec, &RegionTable::default())
}

/// Derive the displayed subset using an explicit region table.
///
/// Fails only when `spec.region` is not in `regions`.
pub fn apply_filters_with<'a>(
    collection: &'a [EntityDetail],
    spec: &FilterSpec,
    regions: &RegionTable,
) -> CoreResult<Vec<&'a EntityDetail>> {
    Ok(FilterPipeline::from_spec(spec, regions)?.run(collection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::fixtures::entity;
    use crate::text::collate::ensure_locale_sorted;
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    fn sample() -> Vec<EntityDetail> {
        vec![
            entity(1, "bulbasaur", &["grass", "poison"]),
            entity(4, "charmander", &["fire"]),
            entity(6, "charizard", &["fire", "flying"]),
            entity(29, "nidoran-f", &["poison"]),
            entity(32, "nidoran-m", &["poison"]),
            entity(122, "mr-mime", &["psychic", "fairy"]),
            entity(133, "eevee", &["normal"]),
        ]
    }

    fn ids(items: &[&EntityDetail]) -> Vec<u32> {
        items.iter().map(|e| e.id).collect()
    }

    #[test]
    fn default_spec_is_identity() {
        let all = sample();
        let out = apply_filters(&all, &FilterSpec::default()).unwrap();
        let expected: Vec<&EntityDetail> = all.iter().collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn type_filter_keeps_matching_entities() {
        let all = sample();
        let spec = FilterSpec::default().merge(FilterPatch {
            type_key: Some("fire".to_string()),
            ..FilterPatch::default()
        });
        let out = apply_filters(&all, &spec).unwrap();
        assert_eq!(ids(&out), vec![4, 6]);
        assert!(out.iter().all(|e| e.types.iter().any(|t| t.type_name() == "fire")));
    }

    #[test]
    fn search_matches_formatted_name_case_insensitively() {
        let all = sample();
        let spec = FilterSpec {
            search: "NIDORAN ♀".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_filters(&all, &spec).unwrap()), vec![29]);

        let spec = FilterSpec {
            search: "mr m".to_string(),
            ..FilterSpec::default()
        };
        assert_eq!(ids(&apply_filters(&all, &spec).unwrap()), vec![122]);
    }

    #[test]
    fn name_sort_is_locale_ordered_and_idempotent() {
        let all = sample();
        let spec = FilterSpec {
            sort: SortKey::Name,
            ..FilterSpec::default()
        };
        let once = apply_filters(&all, &spec).unwrap();
        ensure_locale_sorted(&once, |e| e.species.name.as_str()).unwrap();
        assert_eq!(ids(&once), vec![1, 6, 4, 133, 122, 29, 32]);

        let twice = apply_filters(&all, &spec).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn filters_compose() {
        let all = sample();
        let spec = FilterSpec {
            region: "kanto".to_string(),
            type_key: "poison".to_string(),
            sort: SortKey::Name,
            search: "nido".to_string(),
        };
        let pipeline = FilterPipeline::from_spec(&spec, &RegionTable::default()).unwrap();
        assert_eq!(pipeline.stage_ids(), vec!["filter.type", "filter.search", "sort.name"]);
        assert_eq!(ids(&pipeline.run(&all)), vec![29, 32]);
    }

    #[test]
    fn region_slice_is_positional() {
        let all: Vec<EntityDetail> = (1..=1000).map(|i| entity(i, &format!("e{i}"), &["normal"])).collect();
        let spec = FilterSpec {
            region: "johto".to_string(),
            ..FilterSpec::default()
        };
        let out = apply_filters(&all, &spec).unwrap();
        assert_eq!(out.len(), 100);
        assert_eq!(out.first().map(|e| e.id), Some(152));
        assert_eq!(out.last().map(|e| e.id), Some(251));
    }

    #[test]
    fn unknown_region_is_rejected() {
        let all = sample();
        let spec = FilterSpec {
            region: "orre".to_string(),
            ..FilterSpec::default()
        };
        assert_matches!(apply_filters(&all, &spec), Err(CoreError::InvalidArgument(_)));
    }

    #[test]
    fn input_is_untouched() {
        let all = sample();
        let before = all.clone();
        let spec = FilterSpec {
            sort: SortKey::Name,
            ..FilterSpec::default()
        };
        let _ = apply_filters(&all, &spec).unwrap();
        assert_eq!(all, before);
    }

    #[test]
    fn merge_and_default_state() {
        let spec = FilterSpec::default();
        assert!(spec.is_default());
        let changed = spec.merge(FilterPatch {
            search: Some("pika".to_string()),
            ..FilterPatch::default()
        });
        assert!(!changed.is_default());
        assert_eq!(changed.region, ALL);
        assert_eq!(changed.search, "pika");
    }

    #[test]
    fn sort_key_parsing() {
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!(SortKey::Id.to_string(), "id");
        assert!("weight".parse::<SortKey>().is_err());
    }

    proptest! {
        #[test]
        fn pipeline_is_idempotent(
            type_idx in 0usize..TYPE_KEYS.len(),
            search in "[a-z]{0,3}",
            by_name in any::<bool>(),
        ) {
            let all = sample();
            let spec = FilterSpec {
                region: ALL.to_string(),
                type_key: TYPE_KEYS[type_idx].to_string(),
                sort: if by_name { SortKey::Name } else { SortKey::Id },
                search,
            };
            let a = apply_filters(&all, &spec).unwrap();
            let b = apply_filters(&all, &spec).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
