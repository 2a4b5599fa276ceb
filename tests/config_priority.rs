#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments (and `GOOGLE_API_KEY`, which clap folds into `--key`)
//! 2. Config file defaults
//! 3. Built-in defaults

use props_translate::config::{
    ConfigFile, ResolveOptions, TranslateDefaults, resolve_config,
};
use props_translate::translation::DEFAULT_ENDPOINT;
use std::path::PathBuf;

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        translate: TranslateDefaults {
            source: Some("en".to_string()),
            target: Some("ja".to_string()),
            endpoint: Some("http://config.local/v2".to_string()),
            api_key_env: None,
        },
    }
}

fn make_options() -> ResolveOptions {
    ResolveOptions {
        source_file: Some(PathBuf::from("messages.properties")),
        target_file: Some(PathBuf::from("messages_out.properties")),
        api_key: Some("abc".to_string()),
        ..ResolveOptions::default()
    }
}

#[test]
fn test_config_values_used_when_cli_not_specified() {
    let resolved = resolve_config(&make_options(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.source, "en");
    assert_eq!(resolved.target, "ja");
    assert_eq!(resolved.endpoint, "http://config.local/v2");
}

#[test]
fn test_cli_languages_override_config() {
    let options = ResolveOptions {
        source: Some("de".to_string()),
        target: Some("fr".to_string()),
        ..make_options()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.source, "de");
    assert_eq!(resolved.target, "fr");
}

#[test]
fn test_cli_endpoint_overrides_config() {
    let options = ResolveOptions {
        endpoint: Some("http://cli.local/v2".to_string()),
        ..make_options()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();
    assert_eq!(resolved.endpoint, "http://cli.local/v2");
}

#[test]
fn test_empty_cli_value_falls_back_to_config() {
    let options = ResolveOptions {
        target: Some(String::new()),
        ..make_options()
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();
    assert_eq!(resolved.target, "ja");
}

#[test]
fn test_built_in_endpoint_without_config() {
    let options = ResolveOptions {
        source: Some("en".to_string()),
        target: Some("es".to_string()),
        ..make_options()
    };

    let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();
    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn test_config_cannot_supply_file_paths() {
    let options = ResolveOptions {
        source_file: None,
        ..make_options()
    };

    let result = resolve_config(&options, &make_config_with_defaults());
    assert!(result.is_err());
}
