use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::paths;
use crate::translation::DEFAULT_ENDPOINT;

/// Environment variable holding the API key when `--key` is not given.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

const USAGE: &str = "Usage: translate --source <LANG> --target <LANG> --key <KEY> <SOURCE_FILE> <TARGET_FILE>";

/// Default settings in the `[translate]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateDefaults {
    /// Default source language code.
    pub source: Option<String>,
    /// Default target language code.
    pub target: Option<String>,
    /// Translation endpoint URL.
    pub endpoint: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
}

impl TranslateDefaults {
    /// Reads the API key from the configured environment variable, if any.
    pub fn get_api_key(&self) -> Option<String> {
        let env_var = self.api_key_env.as_deref()?;
        std::env::var(env_var).ok().filter(|key| !key.is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/props-translate/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub translate: TranslateDefaults,
}

/// Required settings that could not be resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{message}\n\n{}", USAGE)]
    MissingArgument {
        /// The argument as shown on the command line.
        name: &'static str,
        message: &'static str,
    },
}

impl ConfigError {
    const fn missing(name: &'static str, message: &'static str) -> Self {
        Self::MissingArgument { name, message }
    }
}

/// Options for resolving configuration.
///
/// Contains CLI values that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub source_file: Option<PathBuf>,
    pub target_file: Option<PathBuf>,
    /// Source language code override.
    pub source: Option<String>,
    /// Target language code override.
    pub target: Option<String>,
    /// API key from `--key` or `GOOGLE_API_KEY`.
    pub api_key: Option<String>,
    /// Endpoint URL override.
    pub endpoint: Option<String>,
}

/// Everything a run needs, after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source_file: PathBuf,
    pub target_file: PathBuf,
    /// The source language code.
    pub source: String,
    /// The target language code.
    pub target: String,
    pub api_key: String,
    /// The translation endpoint URL.
    pub endpoint: String,
}

fn non_empty(primary: Option<&String>, fallback: Option<&String>) -> Option<String> {
    primary
        .filter(|value| !value.is_empty())
        .or_else(|| fallback.filter(|value| !value.is_empty()))
        .cloned()
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values. Checks run in
/// command-line order, so the first missing argument is the one reported.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, ConfigError> {
    let defaults = &config_file.translate;

    let source_file = options
        .source_file
        .clone()
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or_else(|| ConfigError::missing(
            "SOURCE_FILE",
            "source properties file is required",
        ))?;

    let target_file = options
        .target_file
        .clone()
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or_else(|| ConfigError::missing(
            "TARGET_FILE",
            "destination properties file is required",
        ))?;

    let source = non_empty(options.source.as_ref(), defaults.source.as_ref())
        .ok_or_else(|| ConfigError::missing("--source", "--source is required"))?;

    let target = non_empty(options.target.as_ref(), defaults.target.as_ref())
        .ok_or_else(|| ConfigError::missing("--target", "--target is required"))?;

    let api_key = non_empty(options.api_key.as_ref(), defaults.get_api_key().as_ref())
        .ok_or_else(|| ConfigError::missing("--key", "--key is required"))?;

    let endpoint = non_empty(options.endpoint.as_ref(), defaults.endpoint.as_ref())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    Ok(ResolvedConfig {
        source_file,
        target_file,
        source,
        target,
        api_key,
        endpoint,
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for the default location.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/props-translate/config.toml`
    /// or `~/.config/props-translate/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}
