use std::path::{Path, PathBuf};

use crate::collection::FileOutcome;
use crate::error::StandardizeError;

/// List the files directly inside `dir` whose extension is exactly
/// `extension`, sorted by path.
///
/// An unreadable or missing directory yields no files.
pub fn find_question_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot list question directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();
    files.sort();
    files
}

/// Running tally of a directory pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub modified: usize,
    /// Questions in the files that could be read.
    pub questions: usize,
}

impl RunSummary {
    /// Record the result of one file. Failed files count as processed but
    /// not modified.
    pub fn record(&mut self, result: &Result<FileOutcome, StandardizeError>) {
        self.processed += 1;
        if let Ok(outcome) = result {
            self.questions += outcome.total();
            if outcome.was_written() {
                self.modified += 1;
            }
        }
    }

    pub fn already_standard(&self) -> usize {
        self.processed - self.modified
    }
}
