//! Built-in filter stages.
//!
//! Each stage is a small pure transformation over borrowed entities. The
//! region slice is not a stage: it selects the input of the first stage.

use crate::model::EntityDetail;
use crate::pipeline::FilterStage;
use crate::text::collate::stable_sort_by_locale;
use crate::text::format::format_name;

/// Stage: keep entities that have the given type in any slot.
pub struct TypeStage {
    type_key: String,
}

impl TypeStage {
    pub fn new(type_key: impl Into<String>) -> Self {
        Self {
            type_key: type_key.into(),
        }
    }
}

impl FilterStage for TypeStage {
    fn id(&self) -> &str {
        "filter.type"
    }

    fn run<'a>(&self, items: Vec<&'a EntityDetail>) -> Vec<&'a EntityDetail> {
        items
            .into_iter()
            .filter(|e| e.has_type(&self.type_key))
            .collect()
    }
}

/// Stage: keep entities whose formatted species name contains the needle,
/// ignoring case.
pub struct SearchStage {
    needle: String,
}

impl SearchStage {
    pub fn new(search: &str) -> Self {
        Self {
            needle: search.to_lowercase(),
        }
    }

    pub fn matches(&self, entity: &EntityDetail) -> bool {
        format_name(&entity.species.name)
            .to_lowercase()
            .contains(&self.needle)
    }
}

impl FilterStage for SearchStage {
    fn id(&self) -> &str {
        "filter.search"
    }

    fn run<'a>(&self, items: Vec<&'a EntityDetail>) -> Vec<&'a EntityDetail> {
        items.into_iter().filter(|e| self.matches(e)).collect()
    }
}

/// Stage: stable sort by raw species name in locale order.
pub struct SortByNameStage;

impl FilterStage for SortByNameStage {
    fn id(&self) -> &str {
        "sort.name"
    }

    fn run<'a>(&self, mut items: Vec<&'a EntityDetail>) -> Vec<&'a EntityDetail> {
        stable_sort_by_locale(&mut items, |e| e.species.name.as_str());
        items
    }
}
