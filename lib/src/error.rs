use crate::models::errors::ParseError;
use std::path::{Path, PathBuf};

/// Custom error type for the bmhtml library
///
/// Everything the library can fail with while loading, parsing or exporting a
/// bookmark store ends up here. Parse failures keep their full node path.
#[derive(Debug, thiserror::Error)]
pub enum BmError {
    /// I/O errors (writing the output sink)
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// I/O errors tied to a file or directory the user can act on
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed bookmark tree
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// JSON decoding/encoding errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Browser profile lookup errors
    #[error("Browser error: {0}")]
    Browser(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using BmError
pub type Result<T> = std::result::Result<T, BmError>;

impl BmError {
    /// Attach the path an I/O operation was working on
    pub fn at_path(path: &Path, source: std::io::Error) -> Self {
        BmError::File {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<serde_yaml::Error> for BmError {
    fn from(err: serde_yaml::Error) -> Self {
        BmError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for BmError {
    fn from(err: serde_json::Error) -> Self {
        BmError::Json(err.to_string())
    }
}

impl From<simd_json::Error> for BmError {
    fn from(err: simd_json::Error) -> Self {
        BmError::Json(err.to_string())
    }
}
