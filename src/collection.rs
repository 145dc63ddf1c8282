use std::path::Path;

use serde_json::Value;

use crate::error::StandardizeError;
use crate::record::{self, Record};

/// Result of standardizing one question file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Some questions gained fields and the file was rewritten.
    Standardized { modified: usize, total: usize },
    /// Every question already had the extended fields; nothing was written.
    AlreadyStandard { total: usize },
}

impl FileOutcome {
    pub fn total(&self) -> usize {
        match self {
            Self::Standardized { total, .. } | Self::AlreadyStandard { total } => *total,
        }
    }

    pub fn was_written(&self) -> bool {
        matches!(self, Self::Standardized { .. })
    }
}

/// Counts from the single-file `image_id` pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageIdReport {
    pub modified: usize,
    pub total: usize,
}

/// Parse a question collection: a JSON array whose elements are all objects.
pub fn parse_collection(text: &str, path: &Path) -> Result<Vec<Record>, StandardizeError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| StandardizeError::json(path, e))?;

    let Value::Array(items) = value else {
        return Err(StandardizeError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(StandardizeError::NotAnObject { index }),
        })
        .collect()
}

/// Read and parse the question collection stored at `path`.
pub fn read_collection(path: &Path) -> Result<Vec<Record>, StandardizeError> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardizeError::io(path, e))?;
    parse_collection(&text, path)
}

/// Serialize a collection with two-space indentation and unescaped non-ASCII.
pub fn render_collection(records: &[Record]) -> Result<String, StandardizeError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Replace the contents of `path` with the rendered collection.
pub fn write_collection(path: &Path, records: &[Record]) -> Result<(), StandardizeError> {
    let rendered = render_collection(records)?;
    std::fs::write(path, rendered).map_err(|e| StandardizeError::io(path, e))
}

/// Standardize every record in place and return how many changed.
pub fn standardize_records(records: &mut [Record]) -> usize {
    records
        .iter_mut()
        .map(record::standardize)
        .filter(|changed| *changed)
        .count()
}

/// Standardize the question file at `path`.
///
/// The file is rewritten only when at least one question changed, so an
/// already standardized file keeps its bytes and modification time.
pub fn standardize_file(path: &Path) -> Result<FileOutcome, StandardizeError> {
    let mut records = read_collection(path)?;
    let total = records.len();
    let modified = standardize_records(&mut records);

    if modified == 0 {
        tracing::debug!(path = %path.display(), total, "already standardized");
        return Ok(FileOutcome::AlreadyStandard { total });
    }

    write_collection(path, &records)?;
    tracing::debug!(path = %path.display(), modified, total, "rewrote question file");
    Ok(FileOutcome::Standardized { modified, total })
}

/// Add an empty `image_id` to every question in the file at `path`.
///
/// The file is always rewritten, even when no question changed.
pub fn add_image_id_file(path: &Path) -> Result<ImageIdReport, StandardizeError> {
    let mut records = read_collection(path)?;
    let total = records.len();
    let modified = records
        .iter_mut()
        .map(record::insert_image_id)
        .filter(|changed| *changed)
        .count();

    write_collection(path, &records)?;
    Ok(ImageIdReport { modified, total })
}
