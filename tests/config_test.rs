use std::fs;
use std::path::PathBuf;

use tagswap::config::{load_config, parse_config, ConfigFormat};
use tagswap::error::Error;
use tempfile::TempDir;

const JSON_CONFIG: &str = r#"{
    "files": ["src/config.h", "README.md"],
    "variants": [
        { "name": "prod", "replacements": { "{{MAX_USERS}}": "1000", "{{HOST}}": "example.com" } },
        { "name": "dev", "replacements": { "{{MAX_USERS}}": "5" } }
    ]
}"#;

const YAML_CONFIG: &str = r#"
files:
  - src/config.h
variants:
  - name: prod
    replacements:
      "{{MAX_USERS}}": "1000"
"#;

#[test]
fn test_load_json_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tags.json");
    fs::write(&path, JSON_CONFIG).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.files, vec![PathBuf::from("src/config.h"), PathBuf::from("README.md")]);
    assert_eq!(config.variants.len(), 2);
    assert_eq!(config.variants[0].name, "prod");
    assert_eq!(config.variants[0].replacements["{{HOST}}"], "example.com");
}

#[test]
fn test_load_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tags.yaml");
    fs::write(&path, YAML_CONFIG).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.files, vec![PathBuf::from("src/config.h")]);
    assert_eq!(config.variant("prod").unwrap().replacements["{{MAX_USERS}}"], "1000");
}

#[test]
fn test_auto_format_falls_back_to_yaml() {
    let config = parse_config(YAML_CONFIG, ConfigFormat::Auto).unwrap();
    assert_eq!(config.variants[0].name, "prod");

    let config = parse_config(JSON_CONFIG, ConfigFormat::Auto).unwrap();
    assert_eq!(config.variants[1].name, "dev");
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    match load_config(temp_dir.path().join("missing.json")) {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Config file not found")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_malformed_config() {
    assert!(matches!(
        parse_config("{ \"files\": [", ConfigFormat::Json),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_missing_required_fields() {
    assert!(matches!(
        parse_config(r#"{"files": ["a.txt"]}"#, ConfigFormat::Json),
        Err(Error::ConfigError(_))
    ));
    assert!(matches!(
        parse_config(r#"{"variants": []}"#, ConfigFormat::Json),
        Err(Error::ConfigError(_))
    ));
    assert!(matches!(
        parse_config(r#"{"files": [], "variants": [{"name": "v"}]}"#, ConfigFormat::Json),
        Err(Error::ConfigError(_))
    ));
}

#[test]
fn test_duplicate_variant_names_rejected() {
    let content = r#"{"files": [], "variants": [
        {"name": "v1", "replacements": {}},
        {"name": "v1", "replacements": {"a": "b"}}
    ]}"#;
    match parse_config(content, ConfigFormat::Json) {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Duplicate variant name 'v1'")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_empty_tag_rejected() {
    let content = r#"{"files": [], "variants": [{"name": "v1", "replacements": {"": "x"}}]}"#;
    assert!(matches!(parse_config(content, ConfigFormat::Json), Err(Error::ConfigError(_))));
}

#[test]
fn test_unknown_variant() {
    let config = parse_config(JSON_CONFIG, ConfigFormat::Json).unwrap();
    match config.variant("staging") {
        Err(Error::UnknownVariantError { variant }) => assert_eq!(variant, "staging"),
        other => panic!("Expected UnknownVariantError, got {other:?}"),
    }
}

#[test]
fn test_load_errors_name_the_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ \"files\": [").unwrap();

    match load_config(&path) {
        Err(Error::ConfigError(msg)) => {
            assert!(msg.starts_with("Invalid JSON configuration"));
            assert!(msg.contains(&path.display().to_string()));
        }
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}
