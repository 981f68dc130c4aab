//! Shared course fixture for integration tests
//!
//! ```text
//! course                      _buckets: bucket1 (scored), bucket2 (required)
//! ├── assessment1             scored, required
//! │   ├── block-1a            [bucket1]
//! │   │   └── comp-1a         2 / 4
//! │   └── block-1b
//! │       └── comp-1b         [bucket2] 1 / 2
//! ├── assessment2             scored
//! │   ├── block-2a            [bucket1]
//! │   │   └── comp-2a         3 / 3
//! │   └── block-2b
//! │       └── comp-2b         0 / 1
//! └── article-3
//!     └── block-3a            [bucket2]
//!         └── comp-3a
//! ```

use coursescore::events::{ScoringBus, ScoringEvent};
use coursescore::policies::{bootstrap, default_families};
use coursescore::{ContentTree, Item, Registry, ScoringSet};
use std::sync::mpsc::Receiver;

pub const COURSE_JSON: &str = r#"[
    {"_id": "course", "_type": "course", "title": "Course",
     "_buckets": {"_isEnabled": true, "_items": [
        {"_id": "bucket1", "title": "Bucket 1", "_isScoreIncluded": true},
        {"_id": "bucket2", "title": "Bucket 2", "_isCompletionRequired": true}
     ]}},
    {"_id": "assessment1", "_parentId": "course", "_type": "article", "title": "Assessment 1",
     "_assessment": {"_isEnabled": true, "_isScoreIncluded": true, "_isCompletionRequired": true}},
    {"_id": "block-1a", "_parentId": "assessment1", "_type": "block", "_buckets": ["bucket1"]},
    {"_id": "comp-1a", "_parentId": "block-1a", "_type": "component", "_score": 2, "_maxScore": 4},
    {"_id": "block-1b", "_parentId": "assessment1", "_type": "block"},
    {"_id": "comp-1b", "_parentId": "block-1b", "_type": "component", "_buckets": ["bucket2"],
     "_score": 1, "_maxScore": 2},
    {"_id": "assessment2", "_parentId": "course", "_type": "article", "title": "Assessment 2",
     "_assessment": {"_isEnabled": true, "_isScoreIncluded": true}},
    {"_id": "block-2a", "_parentId": "assessment2", "_type": "block", "_buckets": ["bucket1"]},
    {"_id": "comp-2a", "_parentId": "block-2a", "_type": "component", "_score": 3, "_maxScore": 3},
    {"_id": "block-2b", "_parentId": "assessment2", "_type": "block"},
    {"_id": "comp-2b", "_parentId": "block-2b", "_type": "component", "_score": 0, "_maxScore": 1},
    {"_id": "article-3", "_parentId": "course", "_type": "article"},
    {"_id": "block-3a", "_parentId": "article-3", "_type": "block", "_buckets": ["bucket2"]},
    {"_id": "comp-3a", "_parentId": "block-3a", "_type": "component"}
]"#;

pub fn course() -> ContentTree {
    ContentTree::from_json_str(COURSE_JSON).unwrap()
}

/// Registry bootstrapped with both families, without an event bus.
pub fn registry(tree: &ContentTree) -> Registry {
    let mut registry = Registry::new();
    bootstrap(&mut registry, tree, &default_families()).unwrap();
    registry
}

/// Registry bootstrapped with both families, publishing on a fresh bus.
pub fn registry_with_events(tree: &ContentTree) -> (Registry, Receiver<ScoringEvent>) {
    let (bus, receiver) = ScoringBus::new_pair();
    let mut registry = Registry::with_bus(bus);
    bootstrap(&mut registry, tree, &default_families()).unwrap();
    (registry, receiver)
}

pub fn model_ids(models: &[&Item]) -> Vec<String> {
    models.iter().map(|item| item.id.to_string()).collect()
}

pub fn set_ids(sets: &[ScoringSet]) -> Vec<String> {
    sets.iter().map(|set| set.id().to_string()).collect()
}
