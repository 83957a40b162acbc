//! Integration tests for loading picker configs from disk

use std::fs;

use imagepick::config::{load_choice_config, ConfigError};
use imagepick::ReasonMode;
use tempfile::TempDir;

#[test]
fn test_load_toml_with_tags() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("picker.toml");
    fs::write(
        &path,
        r#"
title = "Logo vote"
instructions = "Pick the logo you like"
options = ["x", "y"]
labels = ["Round", "Square"]
reasons = ["Clear", "Vague"]
single_select = true
"#,
    )
    .unwrap();

    let config = load_choice_config(&path).expect("Failed to load config");
    assert_eq!(config.title.as_deref(), Some("Logo vote"));
    assert_eq!(config.options, vec!["x".to_string(), "y".to_string()]);
    assert_eq!(config.label_for(1), Some("Square"));
    assert_eq!(
        config.reasons,
        ReasonMode::Tags(vec!["Clear".to_string(), "Vague".to_string()])
    );
    assert!(config.single_select);
}

#[test]
fn test_load_json_camel_case_without_reasons() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("picker.json");
    fs::write(
        &path,
        r#"{"instructions": "Pick", "options": ["a.png", "b.png"], "singleSelect": true}"#,
    )
    .unwrap();

    let config = load_choice_config(&path).expect("Failed to load config");
    assert!(config.single_select);
    assert!(config.reasons.shows_free_text());
    assert!(config.labels.is_none());
}

#[test]
fn test_load_yaml_empty_reasons() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("picker.yaml");
    fs::write(&path, "instructions: Pick\noptions: [x]\nreasons: []\n").unwrap();

    let config = load_choice_config(&path).expect("Failed to load config");
    assert!(config.reasons.is_set());
    assert!(!config.reasons.shows_tag_buttons());
    assert!(!config.reasons.shows_free_text());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = load_choice_config(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }), "Got: {}", err);
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "options = [\"x\"\n").unwrap();

    let err = load_choice_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "Got: {}", err);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("picker.ini");
    fs::write(&path, "options = x").unwrap();

    let err = load_choice_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}
