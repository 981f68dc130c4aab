//! Content item: one node of the course forest.

use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A content item as read from flat course data.
///
/// The typed fields are the ones the engine relies on. Everything else
/// (`_buckets`, `_assessment`, `_score`, titles...) stays in `attributes`
/// and is interpreted by set policies through [`Item::get`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "_id")]
    pub id: ItemId,

    #[serde(rename = "_parentId", default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ItemId>,

    #[serde(rename = "_type", default)]
    pub item_type: String,

    #[serde(rename = "_isAvailable", default = "default_true")]
    pub is_available: bool,

    #[serde(rename = "_isComplete", default)]
    pub is_complete: bool,

    #[serde(rename = "_isInteractionComplete", default)]
    pub is_interaction_complete: bool,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,

    #[serde(skip)]
    pub(crate) children: Vec<ItemId>,
}

fn default_true() -> bool {
    true
}

impl Item {
    pub fn new(id: impl Into<ItemId>, item_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            item_type: item_type.into(),
            is_available: true,
            is_complete: false,
            is_interaction_complete: false,
            attributes: Map::new(),
            children: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<ItemId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_attribute(mut self, field: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(field.into(), value);
        self
    }

    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub fn complete(mut self, is_complete: bool) -> Self {
        self.is_complete = is_complete;
        self
    }

    /// Generic attribute read.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.attributes.get(field)
    }

    /// Numeric attribute read; non-numeric values read as `None`.
    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_f64)
    }

    /// Direct child ids in document order. Populated by the owning store.
    pub fn children(&self) -> &[ItemId] {
        &self.children
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }
}
