//! Flattening of evolution trees into level-ordered columns.
//!
//! Column `k` holds every species reachable in exactly `k` evolution steps
//! from the root. The walk is pre-order depth-first and appends into
//! per-level buckets, so within a column the entries of one branch stay
//! grouped in the order that branch was visited. This is not the same as a
//! breadth-first merge when several branches have children.
//!
//! Upstream trees are trusted to be trees, but the walk still guards
//! against malformed input: a species seen twice is skipped along with its
//! subtree, and nesting deeper than the configured bound is rejected.

use std::collections::HashSet;

use crate::errors::{CoreError, CoreResult};
use crate::ident::id_from_url;
use crate::model::{EntityDetail, EvolutionNode};

/// Identifiers grouped by evolution depth; index 0 is the root form.
pub type EvolutionColumns = Vec<Vec<String>>;

/// Flatten `root` into columns of species identifiers.
///
/// Fails with [`CoreError::Invariant`] when the tree is deeper than `max_depth` levels.
pub fn flatten_columns(root: &EvolutionNode, max_depth: usize) -> CoreResult<EvolutionColumns> {
    let mut columns = EvolutionColumns::new();
    let mut visited = HashSet::new();
    walk(root, 0, max_depth, &mut visited, &mut columns)?;
    Ok(columns)
}

fn walk<'n>(
    node: &'n EvolutionNode,
    level: usize,
    max_depth: usize,
    visited: &mut HashSet<&'n str>,
    columns: &mut EvolutionColumns,
) -> CoreResult<()> {
    if level >= max_depth {
        return Err(CoreError::invariant(format!(
            "evolution tree exceeds {max_depth} levels"
        )));
    }
    if !visited.insert(node.species_url()) {
        return Ok(());
    }

    // Pre-order: the parent level always exists by the time a child is visited.
    if columns.len() == level {
        columns.push(Vec::new());
    }
    columns[level].push(id_from_url(node.species_url()));

    for child in &node.evolves_to {
        walk(child, level + 1, max_depth, visited, columns)?;
    }
    Ok(())
}

/// An evolution identifier matched against entities already at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnEntry<'a> {
    Known(&'a EntityDetail),
    /// Not in the known set; the identifier still has to be fetched.
    Missing(&'a str),
}

/// Map column identifiers back to entities of `known`.
///
/// `known` is usually id-ordered, so entity `n` is first looked for at
/// position `n - 1` and then by scan. Identifiers with no match are kept as
/// [`ColumnEntry::Missing`] so the column layout is unchanged.
pub fn resolve_column_entities<'a>(
    columns: &'a [Vec<String>],
    known: &'a [EntityDetail],
) -> Vec<Vec<ColumnEntry<'a>>> {
    columns
        .iter()
        .map(|column| {
            column
                .iter()
                .map(|id| match find_entity(id, known) {
                    Some(e) => ColumnEntry::Known(e),
                    None => ColumnEntry::Missing(id.as_str()),
                })
                .collect()
        })
        .collect()
}

/// Entity with numeric id `id` in `known`, if any.
pub fn find_entity<'a>(id: &str, known: &'a [EntityDetail]) -> Option<&'a EntityDetail> {
    let n: u32 = id.parse().ok()?;
    let idx = usize::try_from(n).ok()?.checked_sub(1)?;
    known
        .get(idx)
        .filter(|e| e.id == n)
        .or_else(|| known.iter().find(|e| e.id == n))
}
