//! Integration tests for the configuration system

use super::test_utils::COURSE_JSON;
use coursescore::cli::{Commands, OutputFormat, RunContext};
use coursescore::config::ConfigLoader;
use coursescore::policies::bootstrap;
use coursescore::{ContentTree, Registry, ScoringError};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_configured_families_drive_bootstrap() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("coursescore.toml");
    std::fs::write(
        &config_file,
        r#"
[policies]
families = ["bucket"]
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());

    let tree = ContentTree::from_json_str(COURSE_JSON).unwrap();
    let mut registry = Registry::new();
    bootstrap(&mut registry, &tree, &config.policies.families).unwrap();
    let ids: Vec<&str> = registry.subsets().iter().map(|set| set.id()).collect();
    assert_eq!(ids, vec!["buckets", "bucket1", "bucket2"]);
}

#[test]
fn test_invalid_family_fails_run_context() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("coursescore.toml");
    std::fs::write(&config_file, "[policies]\nfamilies = [\"quiz\"]\n").unwrap();

    let result = RunContext::new(temp_dir.path().to_path_buf(), Some(config_file), None);
    assert!(matches!(result, Err(ScoringError::ConfigError(msg)) if msg.contains("quiz")));
}

#[test]
fn test_content_path_resolves_against_workspace() {
    let temp_dir = TempDir::new().unwrap();
    let content_dir = temp_dir.path().join("course");
    std::fs::create_dir_all(&content_dir).unwrap();
    std::fs::write(content_dir.join("items.json"), COURSE_JSON).unwrap();
    let config_file = temp_dir.path().join("coursescore.toml");
    std::fs::write(&config_file, "[content]\npath = \"course/items.json\"\n").unwrap();

    let context =
        RunContext::new(temp_dir.path().to_path_buf(), Some(config_file), None).unwrap();
    assert_eq!(
        context.content_path().unwrap(),
        temp_dir.path().join("course").join("items.json")
    );
    let output = context
        .execute(&Commands::Sets {
            set_type: Some("bucket".to_string()),
            item: None,
            format: OutputFormat::Json,
        })
        .unwrap();
    let rows: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[test]
fn test_config_command_prints_effective_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("coursescore.toml");
    std::fs::write(&config_file, "[logging]\nlevel = \"warn\"\n").unwrap();

    let context = RunContext::new(
        temp_dir.path().to_path_buf(),
        Some(config_file),
        Some(PathBuf::from("items.json")),
    )
    .unwrap();
    let output = context.execute(&Commands::Config).unwrap();
    let value: toml::Value = toml::from_str(&output).unwrap();
    assert_eq!(value["logging"]["level"].as_str(), Some("warn"));
    assert_eq!(value["content"]["path"].as_str(), Some("items.json"));
}

#[test]
fn test_missing_content_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("coursescore.toml");
    std::fs::write(&config_file, "[content]\npath = \"absent.json\"\n").unwrap();

    let context =
        RunContext::new(temp_dir.path().to_path_buf(), Some(config_file), None).unwrap();
    let result = context.execute(&Commands::Report {
        format: OutputFormat::Text,
    });
    assert!(matches!(result, Err(ScoringError::Content(_))));
}
