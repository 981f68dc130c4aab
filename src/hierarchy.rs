//! Hierarchy Intersection
//!
//! An item intersects a collection when it equals, is a descendant of, or is
//! an ancestor of some item in that collection. Items are compared by id.

use crate::content::{Item, ItemStore};
use std::collections::HashSet;

/// Return `items` followed by every descendant of every item, deduplicated by
/// id with the first occurrence kept.
pub fn expand_with_descendants<'a>(
    store: &'a dyn ItemStore,
    items: &[&'a Item],
) -> Vec<&'a Item> {
    let mut expanded = Vec::new();
    for item in items {
        expanded.push(*item);
        expanded.extend(store.descendants(item));
    }
    unique_by_id(expanded)
}

/// Order-preserving deduplication by item id.
pub fn unique_by_id<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<&'a Item> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(item.id.as_str()) {
            unique.push(item);
        }
    }
    unique
}

/// True when any item of `list_a` intersects the hierarchy spanned by `list_b`.
pub fn has_intersecting_hierarchy(
    store: &dyn ItemStore,
    list_a: &[&Item],
    list_b: &[&Item],
) -> bool {
    let index = HierarchyIndex::build(store, list_b);
    list_a.iter().any(|item| index.intersects(store, item))
}

/// The items of `list_a` that intersect the hierarchy spanned by `list_b`,
/// in their original order.
pub fn filter_intersecting_hierarchy<'a>(
    store: &dyn ItemStore,
    list_a: &[&'a Item],
    list_b: &[&Item],
) -> Vec<&'a Item> {
    let index = HierarchyIndex::build(store, list_b);
    list_a
        .iter()
        .copied()
        .filter(|item| index.intersects(store, item))
        .collect()
}

/// Id index over a collection expanded with all of its descendants.
struct HierarchyIndex<'a> {
    ids: HashSet<&'a str>,
}

impl<'a> HierarchyIndex<'a> {
    fn build(store: &'a dyn ItemStore, items: &[&'a Item]) -> Self {
        let ids = expand_with_descendants(store, items)
            .into_iter()
            .map(|item| item.id.as_str())
            .collect();
        HierarchyIndex { ids }
    }

    fn intersects(&self, store: &dyn ItemStore, item: &Item) -> bool {
        // Equal to, or a descendant of, an indexed item.
        if self.ids.contains(item.id.as_str()) {
            return true;
        }
        // Ancestor of an indexed item.
        store
            .descendants(item)
            .iter()
            .any(|descendant| self.ids.contains(descendant.id.as_str()))
    }
}
