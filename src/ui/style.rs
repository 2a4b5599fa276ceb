//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper falls
//! back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

fn paint<T: Display>(text: &T, styled: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        styled(text)
    }
}

impl Style {
    /// Style for section headers (e.g., "Translating")
    pub fn header<T: Display>(text: T) -> String {
        paint(&text, |t| t.bold().to_string())
    }

    /// Style for labels (e.g., "translated from en to es:")
    pub fn label<T: Display>(text: T) -> String {
        paint(&text, |t| t.dimmed().to_string())
    }

    /// Style for primary values (e.g., file paths, phrases)
    pub fn value<T: Display>(text: T) -> String {
        paint(&text, |t| t.cyan().to_string())
    }

    /// Style for secondary/supplementary info
    pub fn secondary<T: Display>(text: T) -> String {
        paint(&text, |t| t.dimmed().to_string())
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        paint(&text, |t| t.green().to_string())
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        paint(&text, |t| t.red().bold().to_string())
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        paint(&text, |t| t.yellow().to_string())
    }

    /// Style for language codes
    pub fn code<T: Display>(text: T) -> String {
        paint(&text, |t| t.yellow().to_string())
    }
}
