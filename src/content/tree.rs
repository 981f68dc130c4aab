//! In-memory content forest.
//!
//! Built from flat course data: an ordered JSON array of items
//! linked by `_parentId`. Children are linked in document order.

use crate::content::{Item, ItemStore};
use crate::error::ContentError;
use crate::types::ItemId;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Content forest with O(1) id lookup.
#[derive(Debug, Clone, Default)]
pub struct ContentTree {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl ContentTree {
    /// Build a tree from items in document order.
    ///
    /// Fails on duplicate ids, parents that are not present, and parent cycles.
    pub fn from_items(items: Vec<Item>) -> Result<Self, ContentError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), position).is_some() {
                return Err(ContentError::DuplicateItem(item.id.clone()));
            }
        }

        let mut items = items;
        for item in items.iter_mut() {
            item.children.clear();
        }

        let mut links: Vec<(usize, ItemId)> = Vec::new();
        for item in &items {
            if let Some(parent_id) = &item.parent {
                let parent_position = *index.get(parent_id).ok_or_else(|| {
                    ContentError::MissingParent {
                        item: item.id.clone(),
                        parent: parent_id.clone(),
                    }
                })?;
                links.push((parent_position, item.id.clone()));
            }
        }
        for (parent_position, child_id) in links {
            items[parent_position].children.push(child_id);
        }

        let tree = ContentTree { items, index };
        tree.check_acyclic()?;
        debug!(items = tree.items.len(), "Content tree built");
        Ok(tree)
    }

    /// Parse a JSON array of items.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items without a parent, in document order.
    pub fn roots(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.parent.is_none()).collect()
    }

    /// Set `_isInteractionComplete`. Returns whether the flag changed.
    pub fn set_interaction_complete(
        &mut self,
        id: &ItemId,
        value: bool,
    ) -> Result<bool, ContentError> {
        let item = self.item_mut(id)?;
        let changed = item.is_interaction_complete != value;
        item.is_interaction_complete = value;
        Ok(changed)
    }

    /// Set `_isComplete`. Returns whether the flag changed.
    pub fn set_complete(&mut self, id: &ItemId, value: bool) -> Result<bool, ContentError> {
        let item = self.item_mut(id)?;
        let changed = item.is_complete != value;
        item.is_complete = value;
        Ok(changed)
    }

    /// Set `_isAvailable`. Returns whether the flag changed.
    pub fn set_available(&mut self, id: &ItemId, value: bool) -> Result<bool, ContentError> {
        let item = self.item_mut(id)?;
        let changed = item.is_available != value;
        item.is_available = value;
        Ok(changed)
    }

    fn item_mut(&mut self, id: &ItemId) -> Result<&mut Item, ContentError> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| ContentError::ItemNotFound(id.clone()))?;
        Ok(&mut self.items[position])
    }

    /// Walk every parent chain; a chain longer than the item count loops.
    fn check_acyclic(&self) -> Result<(), ContentError> {
        for item in &self.items {
            let mut steps = 0usize;
            let mut cursor = item.parent.as_ref();
            while let Some(parent_id) = cursor {
                steps += 1;
                if steps > self.items.len() {
                    return Err(ContentError::Cycle(item.id.clone()));
                }
                cursor = self
                    .index
                    .get(parent_id)
                    .and_then(|position| self.items[*position].parent.as_ref());
            }
        }
        Ok(())
    }
}

impl ItemStore for ContentTree {
    fn find_by_id(&self, id: &ItemId) -> Option<&Item> {
        self.index.get(id).map(|position| &self.items[*position])
    }

    fn items(&self) -> Vec<&Item> {
        self.items.iter().collect()
    }
}
