//! Errors from the file-facing edges of trellis.
//!
//! The engine itself never fails: unmatched or malformed requests degrade to
//! unchanged text. Errors only arise when reading, parsing or writing inputs.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Failures when loading documents and outlines or writing results.
pub enum TrellisError {
    #[error("{}: {source}", .path.display())]
    /// A file could not be read or written.
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    /// Outline JSON could not be read or written.
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    /// A command referred to something the document does not have.
    InvalidArgument(String),
}

/// Result alias for file-facing operations.
pub type Result<T> = std::result::Result<T, TrellisError>;

impl TrellisError {
    #[must_use]
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
