//! # translate - Properties File Translation CLI
//!
//! `translate` translates Java `ResourceBundle` properties files with the
//! Google Translate API. Every value is translated on its own, non-ASCII
//! characters in the result are written as `\uXXXX` escapes, and entries are
//! written in sorted key order so output files stay diff-stable.
//!
//! ## Quick Start
//!
//! ```bash
//! export GOOGLE_API_KEY=...
//! translate --source en --target de messages.properties messages_de.properties
//! ```
//!
//! ## Configuration
//!
//! Defaults can be stored in `~/.config/props-translate/config.toml`:
//!
//! ```toml
//! [translate]
//! source = "en"
//! target = "de"
//! api_key_env = "GOOGLE_API_KEY"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and argument resolution.
pub mod config;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The load, translate, write run over one properties file.
pub mod pipeline;

/// Properties file parsing and escaping.
pub mod properties;

/// Translation client for the Google Translate v2 API.
pub mod translation;

/// Terminal UI components (progress bar, colors).
pub mod ui;
