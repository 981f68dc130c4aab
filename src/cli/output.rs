//! CLI output: error mapping from engine errors to stable CLI surface.

use crate::error::{ContentError, ScoringError};

/// Map engine errors to a string for CLI output.
pub fn map_error(e: &ScoringError) -> String {
    match e {
        ScoringError::PathNotFound(path) => {
            format!("No set found for path '{}'. Run `coursescore sets` to list set ids.", path)
        }
        ScoringError::Content(ContentError::ItemNotFound(id)) => {
            format!("Unknown item '{}'", id)
        }
        other => other.to_string(),
    }
}
