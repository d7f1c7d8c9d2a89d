//! Tests for the configuration module.

use std::fs;

use crate::config::{ConfigLoader, LexiconConfig, LogConfig, MokuluaConfig, Validate};
use crate::error::config::ConfigError;
use crate::tests::test_utils::create_test_dir;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = MokuluaConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.lexicon.max_word_length, 128);
    assert_eq!(config.log.level, "info");
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = MokuluaConfig::default();

    config.lexicon.max_word_length = 0;
    assert!(config.validate().is_err());

    config.lexicon.max_word_length = 64;
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_section_validation() {
    assert!(LexiconConfig { max_word_length: 1 }.validate().is_ok());
    assert!(LexiconConfig { max_word_length: 0 }.validate().is_err());

    let mut log = LogConfig::default();
    for level in ["trace", "debug", "info", "warn", "error"] {
        log.level = level.to_string();
        assert!(log.validate().is_ok());
    }
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    fs::write(
        &config_path,
        r#"
[lexicon]
max_word_length = 32

[log]
level = "debug"
"#,
    )
    .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "MOKULUA_TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.lexicon.max_word_length, 32);
    assert_eq!(config.log.level, "debug");
    // Values absent from the file keep their defaults
    assert!(config.log.source_location);
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_load_config_missing_file() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("nope.toml");

    let loader = ConfigLoader::new(Some(&config_path), "MOKULUA_TEST_MISSING");
    let err = loader.load().unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

/// Test that invalid values in a file fail validation on load.
#[test]
fn test_load_config_rejects_invalid_values() {
    let dir = create_test_dir().unwrap();
    let config_path = dir.path().join("bad.toml");

    fs::write(
        &config_path,
        r#"
[lexicon]
max_word_length = 0
"#,
    )
    .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "MOKULUA_TEST_BAD");
    assert!(loader.load().is_err());
}

/// Test loading configuration without any file at all.
#[test]
fn test_load_config_defaults_only() {
    let loader = ConfigLoader::new(None::<&str>, "MOKULUA_TEST_DEFAULTS");
    let config = loader.load().unwrap();
    assert_eq!(config.lexicon.max_word_length, 128);
}
