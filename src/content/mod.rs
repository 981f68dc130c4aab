//! Content Store
//!
//! The item forest the scoring engine reads from. The engine only ever reads
//! through [`ItemStore`]; flag mutation belongs to the host that owns the store.

pub mod item;
pub mod tree;

pub use item::Item;
pub use tree::ContentTree;

use crate::types::ItemId;

/// ItemStore interface
///
/// Lookup by id plus parent/child/descendant traversal. All sequences are
/// returned in document order.
pub trait ItemStore {
    fn find_by_id(&self, id: &ItemId) -> Option<&Item>;

    /// Every item in document order.
    fn items(&self) -> Vec<&Item>;

    fn filter(&self, predicate: &dyn Fn(&Item) -> bool) -> Vec<&Item> {
        self.items()
            .into_iter()
            .filter(|item| predicate(item))
            .collect()
    }

    /// Direct children of `item`.
    fn children(&self, item: &Item) -> Vec<&Item> {
        item.children()
            .iter()
            .filter_map(|child_id| self.find_by_id(child_id))
            .collect()
    }

    /// All transitive descendants of `item`, depth first: every child is
    /// followed by its own descendants.
    fn descendants(&self, item: &Item) -> Vec<&Item> {
        let mut out = Vec::new();
        let mut stack: Vec<&Item> = self.children(item).into_iter().rev().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).into_iter().rev());
        }
        out
    }
}
