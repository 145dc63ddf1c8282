use std::path::PathBuf;

/// Errors that can occur while standardizing a question file.
#[derive(Debug, thiserror::Error)]
pub enum StandardizeError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("root value is not a JSON array")]
    NotAnArray,

    #[error("element {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("failed to serialize questions")]
    Serialize(#[from] serde_json::Error),
}

impl StandardizeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// True when the file content could not be parsed as JSON.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Json { .. })
    }
}
