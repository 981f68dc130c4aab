//! Coursescore: Completion and Scoring Sets over Course Content
//!
//! Named sets of content items (assessments, buckets and their aggregates),
//! composed by hierarchy intersection into derived sets, with score and
//! completion aggregates and transition hooks.

pub mod cli;
pub mod composition;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod hierarchy;
pub mod logging;
pub mod policies;
pub mod registry;
pub mod report;
pub mod set;
pub mod types;

pub use composition::SetPath;
pub use content::{ContentTree, Item, ItemStore};
pub use error::{ContentError, ScoringError};
pub use registry::Registry;
pub use set::{ScoringSet, SetConfig, SetContext, SetPolicy};
pub use types::ItemId;
