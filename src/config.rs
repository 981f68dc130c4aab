//! Configuration System
//!
//! Layered configuration for the scoring engine and its CLI: built-in
//! defaults, the user's global file, workspace files, then `COURSESCORE__*`
//! environment overrides. Tests included.

use crate::error::ScoringError;
use crate::logging::LoggingConfig;
use crate::policies::default_families;
use crate::types::{ASSESSMENT, BUCKET};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Course content source
    #[serde(default)]
    pub content: ContentConfig,

    /// Enabled set families
    #[serde(default)]
    pub policies: PolicyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where course content is read from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Flat JSON item list; relative paths resolve against the workspace root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Set families bootstrapped into the registry, in registration order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_families")]
    pub families: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            families: default_families(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Content(String),
    Policy(String, String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Content(msg) => write!(f, "Content: {}", msg),
            ValidationError::Policy(family, msg) => write!(f, "Policy '{}': {}", family, msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PolicyConfig {
    fn validate(&self, errors: &mut Vec<ValidationError>) {
        let mut seen = HashSet::new();
        for family in &self.families {
            if family != ASSESSMENT && family != BUCKET {
                errors.push(ValidationError::Policy(
                    family.clone(),
                    format!("unknown family (expected '{}' or '{}')", ASSESSMENT, BUCKET),
                ));
            }
            if !seen.insert(family.as_str()) {
                errors.push(ValidationError::Policy(
                    family.clone(),
                    "listed more than once".to_string(),
                ));
            }
        }
    }
}

impl ScoringConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Some(path) = &self.content.path {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::Content(
                    "content path cannot be empty".to_string(),
                ));
            }
        }

        self.policies.validate(&mut errors);

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Fold validation errors into one [`ScoringError::ConfigError`].
    pub fn validated(self) -> Result<Self, ScoringError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ScoringError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }

    /// Render as TOML, the format of every config file layer.
    pub fn to_toml(&self) -> Result<String, ScoringError> {
        toml::to_string_pretty(self)
            .map_err(|e| ScoringError::ConfigError(format!("Failed to render config: {}", e)))
    }
}
