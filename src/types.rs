//! Shared identifiers and set type tags.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a content item (`_id` in course data).
///
/// Items are compared by id only, never by object identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Type tag of a single assessment set.
pub const ASSESSMENT: &str = "assessment";
/// Type tag of the aggregate over all assessment sets.
pub const ASSESSMENTS: &str = "assessments";
/// Type tag of a single bucket set.
pub const BUCKET: &str = "bucket";
/// Type tag of the aggregate over all bucket sets.
pub const BUCKETS: &str = "buckets";
