#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use std::collections::HashMap;

use koe_cli::config::{
    ConfigFile, DEFAULT_TTS_MODEL, KoeConfig, ProviderConfig, ResolveOptions, resolve_config,
};
use koe_cli::pipeline::Language;

fn make_config_with_defaults() -> ConfigFile {
    let mut providers = HashMap::new();
    providers.insert(
        "test_provider".to_string(),
        ProviderConfig {
            endpoint: "http://test.local".to_string(),
            api_key: Some("test_key".to_string()),
            api_key_env: None,
            models: vec!["config_model".to_string(), "cli_model".to_string()],
        },
    );

    ConfigFile {
        koe: KoeConfig {
            provider: Some("test_provider".to_string()),
            model: Some("config_model".to_string()),
            tts_model: Some("config_tts".to_string()),
            to: Some("ja".to_string()),
            speed: Some(1.0),
        },
        providers,
    }
}

#[test]
fn test_cli_model_overrides_config_model() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        model: Some("cli_model".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.model, "cli_model");
}

#[test]
fn test_cli_language_overrides_config_language() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        to: Some("ko".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.target_language, Language::Ko);
}

#[test]
fn test_cli_speed_overrides_config_speed() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        speed: Some(2.0),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.speed, Some(2.0));
}

#[test]
fn test_config_values_used_without_cli_overrides() {
    let config = make_config_with_defaults();
    let options = ResolveOptions::default();

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.provider_name, "test_provider");
    assert_eq!(resolved.endpoint, "http://test.local");
    assert_eq!(resolved.model, "config_model");
    assert_eq!(resolved.tts_model, "config_tts");
    assert_eq!(resolved.target_language, Language::Ja);
    assert_eq!(resolved.speed, Some(1.0));
    assert_eq!(resolved.api_key, Some("test_key".to_string()));
}

#[test]
fn test_language_defaults_to_japanese() {
    let mut config = make_config_with_defaults();
    config.koe.to = None;
    let options = ResolveOptions::default();

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.target_language, Language::Ja);
}

#[test]
fn test_tts_model_defaults_when_unset() {
    let mut config = make_config_with_defaults();
    config.koe.tts_model = None;
    let options = ResolveOptions::default();

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.tts_model, DEFAULT_TTS_MODEL);
}

#[test]
fn test_speed_unset_everywhere_stays_unset() {
    let mut config = make_config_with_defaults();
    config.koe.speed = None;
    let options = ResolveOptions::default();

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.speed, None);
}

#[test]
fn test_unknown_cli_provider_is_an_error() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        provider: Some("missing_provider".to_string()),
        ..ResolveOptions::default()
    };

    let result = resolve_config(&options, &config);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));
}
