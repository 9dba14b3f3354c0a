//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use super::test_utils::TestFixture;
use crate::config::{AppConfig, ConfigLoader, LogConfig, SegmentTrieConfig, Validate};
use crate::error::config::ConfigError;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.trie, SegmentTrieConfig::default());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = AppConfig::default();

    config.trie.delimiter = String::new();
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.trie.delimiter = "/".to_string();
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log = LogConfig::default();
    assert!(config.validate().is_ok());
}

/// Test loading with no file falls back to defaults.
#[test]
fn test_load_defaults_without_file() {
    let loader = ConfigLoader::new(None::<&str>, "TEST_NO_FILE");
    let config = loader.load().unwrap();
    assert_eq!(config, AppConfig::default());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
            [trie]
            delimiter = "/"

            [log]
            level = "debug"
            json = true
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.trie.delimiter, "/");
    assert_eq!(config.log.level, "debug");
    assert!(config.log.json);

    // Other values should be defaults
    assert_eq!(config.trie.wildcard, "*");
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.json", r#"{"trie": {"delimiter": "::", "wildcard": "?"}}"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert_eq!(config.trie.delimiter, "::");
    assert_eq!(config.trie.wildcard, "?");
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_env_test.toml",
            r#"
            [trie]
            delimiter = "/"
            "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__TRIE__DELIMITER", ":");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "trace");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load().unwrap();

    // Environment variables take precedence over the file
    assert_eq!(config.trie.delimiter, ":");
    assert_eq!(config.log.level, "trace");
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.temp_dir.path().join("absent.toml");

    let result = ConfigLoader::new(Some(&path), "TEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(p)) if p == path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "invalid.toml",
            r#"
            [trie
            delimiter = /"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that a file that parses but fails validation is rejected.
#[test]
fn test_load_config_failing_validation() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "bad_wildcard.toml",
            r#"
            [trie]
            delimiter = "."
            wildcard = "a.b"
            "#,
        )
        .unwrap();

    let result = ConfigLoader::new(Some(&config_path), "TEST_BAD_WILDCARD").load();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

/// Test that unsupported extensions are rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.create_file("config.ini", "delimiter=.").unwrap();

    let result = ConfigLoader::new(Some(&config_path), "TEST_INI").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}
