use indicatif::{ProgressBar, ProgressStyle};

use crate::output;

/// A terminal progress bar over the entries of a run.
///
/// Hidden in quiet mode. Messages printed through it go above the bar so it
/// is never torn; when the bar is hidden (quiet mode, or stderr is not a
/// terminal) they go straight to stderr. Clears itself when dropped.
pub struct Progress {
    progress_bar: ProgressBar,
}

impl Progress {
    /// Creates a progress bar for `len` entries.
    #[allow(clippy::unwrap_used)]
    pub fn new(len: u64) -> Self {
        if output::is_quiet() {
            return Self {
                progress_bar: ProgressBar::hidden(),
            };
        }

        let progress_bar = ProgressBar::new(len);
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:30} {pos}/{len} {wide_msg}")
                .unwrap()
                .progress_chars("=> "),
        );

        Self { progress_bar }
    }

    /// Shows the key currently being translated.
    pub fn set_key(&self, key: &str) {
        self.progress_bar.set_message(key.to_string());
    }

    /// Marks one entry as done.
    pub fn advance(&self) {
        self.progress_bar.inc(1);
    }

    /// Prints a status message (suppressed in quiet mode).
    pub fn status(&self, message: &str) {
        if !output::is_quiet() {
            self.print(message);
        }
    }

    /// Prints a warning (always shown).
    pub fn warn(&self, message: &str) {
        self.print(message);
    }

    fn print(&self, message: &str) {
        if self.progress_bar.is_hidden() {
            eprintln!("{message}");
        } else {
            self.progress_bar.println(message);
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
