use anyhow::Result;
use std::path::PathBuf;

use crate::config::{ConfigFile, ConfigManager, ResolveOptions, resolve_config};
use crate::pipeline::{Pipeline, RunSummary};
use crate::status;
use crate::translation::GoogleTranslateClient;
use crate::ui::Style;

pub struct TranslateOptions {
    pub resolve: ResolveOptions,
    /// Explicit config file; must exist when given.
    pub config: Option<PathBuf>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<RunSummary> {
    let config_file = load_config_file(options.config)?;
    let config = resolve_config(&options.resolve, &config_file)?;

    let client = GoogleTranslateClient::new(&config.endpoint)?;

    status!(
        "{} {} from {} to {}\n",
        Style::header("Translating"),
        Style::value(config.source_file.display()),
        Style::code(&config.source),
        Style::code(&config.target)
    );

    let pipeline = Pipeline::new(client, config.source, config.target, config.api_key);
    let summary = pipeline
        .run(&config.source_file, &config.target_file)
        .await?;

    status!(
        "{} Wrote {} of {} entries to {}{}",
        Style::success("✓"),
        summary.translated,
        summary.total(),
        Style::value(config.target_file.display()),
        describe_dropped(&summary)
    );

    Ok(summary)
}

fn load_config_file(path: Option<PathBuf>) -> Result<ConfigFile> {
    match path {
        Some(path) => ConfigManager::with_path(path).load(),
        None => Ok(default_config(ConfigManager::new())),
    }
}

/// The default config file, or an empty one when there is no config
/// directory to look in.
fn default_config(manager: Result<ConfigManager>) -> ConfigFile {
    manager
        .map(|manager| manager.load_or_default())
        .unwrap_or_default()
}

fn describe_dropped(summary: &RunSummary) -> String {
    match (summary.skipped, summary.filtered) {
        (0, 0) => String::new(),
        (skipped, 0) => Style::secondary(format!(" ({skipped} failed)")),
        (0, filtered) => Style::secondary(format!(" ({filtered} empty)")),
        (skipped, filtered) => {
            Style::secondary(format!(" ({skipped} failed, {filtered} empty)"))
        }
    }
}
