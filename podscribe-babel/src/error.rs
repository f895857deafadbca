//! Error types for import and output

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Unknown input format '{0}'")]
    UnknownFormat(String),
    #[error("Invalid node snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
