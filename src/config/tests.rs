//! Tests for config functionality.

use crate::config::Config;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.auto_detect_variables);
    assert!(!config.default_public);
    assert!(config.default_tags.is_empty());
    assert!(!config.strict_resolve);
    assert!(config.events_enabled);
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
strict_resolve: true
default_tags:
  - team/platform
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert!(config.strict_resolve);
    assert_eq!(config.default_tags, vec!["team/platform"]);

    // Unspecified values should use defaults
    assert!(config.auto_detect_variables);
    assert!(config.events_enabled);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
auto_detect_variables: false
default_public: true
default_tags: [shared]
strict_resolve: true
events_enabled: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert!(!config.auto_detect_variables);
    assert!(config.default_public);
    assert_eq!(config.default_tags, vec!["shared"]);
    assert!(config.strict_resolve);
    assert!(!config.events_enabled);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
strict_resolve: true
future_option: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert!(config.strict_resolve);
}

#[test]
fn test_invalid_yaml_is_user_error() {
    let result = Config::from_yaml("strict_resolve: [not, a, bool]");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_validate_rejects_bad_default_tags() {
    for bad in ["", "/", "a//b", "  "] {
        let config = Config {
            default_tags: vec![bad.to_string()],
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_tags"), "tag {:?}", bad);
    }

    let ok = Config {
        default_tags: vec!["a/b".to_string(), "/c/".to_string()],
        ..Config::default()
    };
    assert!(ok.validate().is_ok());
}

#[test]
fn test_yaml_round_trip() {
    let config = Config {
        strict_resolve: true,
        default_tags: vec!["ops".to_string()],
        ..Config::default()
    };
    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_or_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");

    assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

    std::fs::write(&path, "default_public: true\n").unwrap();
    assert!(Config::load_or_default(&path).unwrap().default_public);

    std::fs::write(&path, "default_tags: ['a//b']\n").unwrap();
    assert!(Config::load_or_default(&path).is_err());
}
