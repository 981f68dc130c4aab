//! Environment source: COURSESCORE__SECTION__KEY overrides.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub const PREFIX: &str = "COURSESCORE";

/// Add the environment override layer, the highest precedence source.
///
/// `COURSESCORE__POLICIES__FAMILIES` takes a comma-separated list.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix(PREFIX)
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("policies.families"),
    ))
}
