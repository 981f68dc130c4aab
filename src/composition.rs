//! Set Composition
//!
//! Builds derived sets by piping sets left to right: each step narrows the
//! accumulated set to the hierarchy of the next one. The result always takes
//! the family of the right-most set, so retention components intersected with
//! assessment blocks give assessment blocks, and the reverse order gives
//! retention components. Composition happens at read time and nothing it
//! produces is registered.

use crate::hierarchy::has_intersecting_hierarchy;
use crate::registry::Registry;
use crate::set::{ScoringSet, SetContext};
use crate::types::ItemId;
use std::fmt;
use tracing::{debug, warn};

/// Ordered list of root set ids, written `id.id.id` or given as a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPath(Vec<String>);

impl SetPath {
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl From<&str> for SetPath {
    fn from(path: &str) -> Self {
        SetPath(
            path.split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

impl From<String> for SetPath {
    fn from(path: String) -> Self {
        SetPath::from(path.as_str())
    }
}

impl From<Vec<String>> for SetPath {
    fn from(segments: Vec<String>) -> Self {
        SetPath(segments)
    }
}

impl From<&[&str]> for SetPath {
    fn from(segments: &[&str]) -> Self {
        SetPath(segments.iter().map(|segment| segment.to_string()).collect())
    }
}

/// Fold `sets` left to right into one derived set.
///
/// The first present set starts the chain unchanged; every following present
/// set is re-instantiated in its own family with the accumulator as parent.
/// Absent slots pass through.
pub fn create_intersection_subset(
    ctx: &SetContext<'_>,
    sets: &[Option<&ScoringSet>],
) -> Option<ScoringSet> {
    sets.iter()
        .flatten()
        .fold(None, |accumulator, set| match accumulator {
            Some(parent) => Some(ScoringSet::derive(set, parent, ctx)),
            None => Some((*set).clone()),
        })
}

/// Registered root sets, optionally without the set matching both the id and
/// the type of `exclude_parent`.
pub fn raw_sets<'r>(
    registry: &'r Registry,
    exclude_parent: Option<&ScoringSet>,
) -> Vec<&'r ScoringSet> {
    registry
        .subsets()
        .iter()
        .filter(|set| match exclude_parent {
            Some(parent) => !(set.id() == parent.id() && set.set_type() == parent.set_type()),
            None => true,
        })
        .collect()
}

/// Root sets as-is, or each intersected with `subset_parent`.
fn intersect_with(
    ctx: &SetContext<'_>,
    sets: Vec<&ScoringSet>,
    subset_parent: Option<&ScoringSet>,
) -> Vec<ScoringSet> {
    match subset_parent {
        Some(parent) => sets
            .into_iter()
            .filter_map(|set| create_intersection_subset(ctx, &[Some(parent), Some(set)]))
            .collect(),
        None => sets.into_iter().cloned().collect(),
    }
}

/// All root sets, or their intersections with `subset_parent`.
pub fn get_subsets(ctx: &SetContext<'_>, subset_parent: Option<&ScoringSet>) -> Vec<ScoringSet> {
    let sets = raw_sets(ctx.registry(), subset_parent);
    intersect_with(ctx, sets, subset_parent)
}

/// Root sets of `set_type`, or their intersections with `subset_parent`.
pub fn get_subsets_by_type(
    ctx: &SetContext<'_>,
    set_type: &str,
    subset_parent: Option<&ScoringSet>,
) -> Vec<ScoringSet> {
    let sets = raw_sets(ctx.registry(), subset_parent)
        .into_iter()
        .filter(|set| set.set_type() == set_type)
        .collect();
    intersect_with(ctx, sets, subset_parent)
}

/// Root sets whose items intersect the hierarchy of `item_id`, or their
/// intersections with `subset_parent`. An unknown item matches nothing.
pub fn get_subsets_by_model_id(
    ctx: &SetContext<'_>,
    item_id: &ItemId,
    subset_parent: Option<&ScoringSet>,
) -> Vec<ScoringSet> {
    let sets = sets_intersecting_item(ctx, item_id, subset_parent);
    intersect_with(ctx, sets, subset_parent)
}

pub(crate) fn sets_intersecting_item<'r>(
    ctx: &SetContext<'r>,
    item_id: &ItemId,
    exclude_parent: Option<&ScoringSet>,
) -> Vec<&'r ScoringSet> {
    let Some(item) = ctx.store().find_by_id(item_id) else {
        debug!(item_id = %item_id, "Item not found for set lookup");
        return Vec::new();
    };
    raw_sets(ctx.registry(), exclude_parent)
        .into_iter()
        .filter(|set| {
            set.models(ctx)
                .map(|models| has_intersecting_hierarchy(ctx.store(), &models, &[item]))
                .unwrap_or(false)
        })
        .collect()
}

/// Root set by id, or its intersection with `subset_parent`.
pub fn get_subset_by_id(
    ctx: &SetContext<'_>,
    set_id: &str,
    subset_parent: Option<&ScoringSet>,
) -> Option<ScoringSet> {
    let set = raw_sets(ctx.registry(), subset_parent)
        .into_iter()
        .find(|set| set.id() == set_id)?;
    intersect_with(ctx, vec![set], subset_parent).pop()
}

/// Resolve every path segment as a root set id, prepend `subset_parent` when
/// given, and fold the result with [`create_intersection_subset`].
///
/// Segments that name no root set are skipped.
pub fn get_subset_by_path(
    ctx: &SetContext<'_>,
    path: &SetPath,
    subset_parent: Option<&ScoringSet>,
) -> Option<ScoringSet> {
    let registry = ctx.registry();
    let mut sets: Vec<Option<&ScoringSet>> = Vec::with_capacity(path.segments().len() + 1);
    if let Some(parent) = subset_parent {
        sets.push(Some(parent));
    }
    for segment in path.segments() {
        let set = registry.get_subset_by_id(segment);
        if set.is_none() {
            warn!(path = %path, segment = %segment, "Set path segment matches no registered set");
        }
        sets.push(set);
    }
    create_intersection_subset(ctx, &sets)
}
