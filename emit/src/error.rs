//! Emitter error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while serializing or writing artifacts.
#[derive(Debug, Error)]
pub enum EmitError {
    /// An output file could not be written.
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML serialization failed.
    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for emitter operations.
pub type EmitResult<T> = Result<T, EmitError>;
