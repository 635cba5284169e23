use pitch::config::config_manager::{ConfigManager, SAMPLE_CONFIG};
use pitch::errors::PitchError;
use pitch::structs::config::config::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_explicit_missing_config_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let error = ConfigManager::load(Some(&path)).unwrap_err();

    assert!(matches!(error, PitchError::ConfigurationFileError { .. }));
}

#[test]
fn test_load_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nraw = true\nhidden_fields = [\"object\"]\n").unwrap();

    let config = ConfigManager::load(Some(&path)).unwrap();

    assert!(config.output.raw);
    assert_eq!(config.output.hidden_fields, vec!["object".to_string()]);
    assert_eq!(config.api.model, "gpt-3.5-turbo");
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[poll\nmax_attempts = 3").unwrap();

    let error = ConfigManager::load(Some(&path)).unwrap_err();

    assert!(matches!(error, PitchError::ParseError { ref content_type, .. } if content_type == "TOML"));
}

#[test]
fn test_create_sample_config_writes_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let written = ConfigManager::create_sample_config(Some(&path)).unwrap();
    assert_eq!(written, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_CONFIG);

    let again = ConfigManager::create_sample_config(Some(&path));
    assert!(again.is_err());
}

#[test]
fn test_default_config_is_valid() {
    assert!(ConfigManager::validate_config(&Config::default()).is_ok());
}

#[test]
fn test_initial_delay_above_max_is_reported() {
    let mut config = Config::default();
    config.poll.initial_delay_ms = 60_000;

    let errors = ConfigManager::validate_config(&config).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("initial_delay_ms"));
}
