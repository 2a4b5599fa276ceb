use clap::Parser;
use std::path::PathBuf;

use crate::config::API_KEY_ENV;

#[derive(Parser, Debug)]
#[command(name = "translate")]
#[command(about = "Translate a Java ResourceBundle properties file with Google Translate")]
#[command(version)]
pub struct Args {
    /// Properties file to translate
    pub source_file: Option<PathBuf>,

    /// Properties file to write the translations to (created or truncated)
    pub target_file: Option<PathBuf>,

    /// Source language code (e.g., en)
    #[arg(short = 's', long = "source")]
    pub source: Option<String>,

    /// Target language code (e.g., de)
    #[arg(short = 't', long = "target")]
    pub target: Option<String>,

    /// Google Translate API key
    #[arg(short = 'k', long = "key", env = API_KEY_ENV, hide_env_values = true)]
    pub key: Option<String>,

    /// Translation endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Config file (defaults to ~/.config/props-translate/config.toml)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
