//! Error types for the course scoring engine.

use crate::types::ItemId;
use thiserror::Error;

/// Content store errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Duplicate item id: {0}")]
    DuplicateItem(ItemId),

    #[error("Item {item} references missing parent {parent}")]
    MissingParent { item: ItemId, parent: ItemId },

    #[error("Parent cycle detected at item {0}")]
    Cycle(ItemId),

    #[error("Invalid content data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Content I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Scoring engine errors
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Cannot register two sets with the same id: {0}")]
    DuplicateRegistration(String),

    #[error("Cannot register derived set: {0}")]
    DerivedRegistration(String),

    #[error("Unknown set policy family: {0}")]
    UnknownPolicy(String),

    #[error("Invalid set configuration: {0}")]
    InvalidSetConfig(String),

    #[error("No set found for path: {0}")]
    PathNotFound(String),

    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ScoringError {
    fn from(err: config::ConfigError) -> Self {
        ScoringError::ConfigError(err.to_string())
    }
}
