//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Command implementations.
pub mod commands;

/// Process exit codes for fatal errors.
pub mod exit;

pub use args::Args;
