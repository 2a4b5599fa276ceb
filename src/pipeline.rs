//! The translation run: load, sort, translate, escape, write.
//!
//! Loading the source or creating the destination fails the whole run. A
//! failed translation only drops that one entry.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::properties::{PropertiesError, PropertiesStore, PropertyEntry, escape, escape_key};
use crate::translation::{TranslationRequest, Translator};
use crate::ui::{Progress, Style};

/// Fatal errors that stop a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] PropertiesError),

    #[error("Failed to create destination file: {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write destination file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Per-entry outcome counts of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries written to the destination.
    pub translated: usize,
    /// Entries whose translation failed.
    pub skipped: usize,
    /// Entries dropped because the key or the translation was empty.
    pub filtered: usize,
}

impl RunSummary {
    pub const fn total(&self) -> usize {
        self.translated + self.skipped + self.filtered
    }
}

/// Translates every entry of a properties file into another language.
pub struct Pipeline<T> {
    translator: T,
    source: String,
    target: String,
    api_key: String,
}

impl<T: Translator> Pipeline<T> {
    pub const fn new(translator: T, source: String, target: String, api_key: String) -> Self {
        Self {
            translator,
            source,
            target,
            api_key,
        }
    }

    /// Translates `source_file` into `target_file`.
    ///
    /// The source is parsed before the destination is created or truncated,
    /// so a bad source never clobbers an existing translation.
    pub async fn run(
        &self,
        source_file: &Path,
        target_file: &Path,
    ) -> Result<RunSummary, PipelineError> {
        let store = PropertiesStore::load(source_file)?;

        let file = File::create(target_file).map_err(|source| PipelineError::Create {
            path: target_file.to_path_buf(),
            source,
        })?;
        let mut out = BufWriter::new(file);

        let write_error = |source| PipelineError::Write {
            path: target_file.to_path_buf(),
            source,
        };

        let summary = self
            .translate_entries(&store, &mut out)
            .await
            .map_err(write_error)?;
        out.flush().map_err(write_error)?;

        Ok(summary)
    }

    /// Translates every entry of `store` in sorted key order and writes one
    /// `key = value` line per successful, non-empty translation to `out`.
    pub async fn translate_entries<W: Write>(
        &self,
        store: &PropertiesStore,
        out: &mut W,
    ) -> io::Result<RunSummary> {
        let entries = store.sorted_entries();
        let progress = Progress::new(entries.len() as u64);
        let mut summary = RunSummary::default();

        for entry in entries {
            progress.set_key(entry.key);

            let request = TranslationRequest {
                api_key: &self.api_key,
                phrase: entry.value,
                source: &self.source,
                target: &self.target,
            };

            match self.translator.translate(&request).await {
                Ok(translation) => {
                    progress.status(&self.describe(entry, &translation));

                    if entry.key.is_empty() || translation.is_empty() {
                        summary.filtered += 1;
                    } else {
                        writeln!(out, "{} = {}", escape_key(entry.key), escape(&translation))?;
                        summary.translated += 1;
                    }
                }
                Err(err) => {
                    progress.warn(&format!(
                        "{} failed to translate <{}> from `{}` to `{}`: {err}",
                        Style::warning("Warning:"),
                        entry.value,
                        self.source,
                        self.target
                    ));
                    summary.skipped += 1;
                }
            }

            progress.advance();
        }

        Ok(summary)
    }

    fn describe(&self, entry: PropertyEntry<'_>, translation: &str) -> String {
        format!(
            "{}\n  > {}\n  > {}\n",
            Style::label(format!(
                "{}: translated from {} to {}",
                entry.key, self.source, self.target
            )),
            entry.value,
            Style::value(translation)
        )
    }
}
