//! Global config file source: ~/.config/coursescore/config.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::PathBuf;
use tracing::debug;

/// Path to global config file.
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("coursescore")
            .join("config.toml")
    })
}

/// Add global config file source to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let Some(global_path) = global_config_path() else {
        return Ok(builder);
    };
    if !global_path.exists() {
        debug!(config_path = %global_path.display(), "No global configuration file");
        return Ok(builder);
    }
    let canonical_path = global_path
        .canonicalize()
        .unwrap_or_else(|_| global_path.clone());
    Ok(builder.add_source(File::from(canonical_path).required(false)))
}
