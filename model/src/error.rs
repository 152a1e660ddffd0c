//! Error types for the dashboard model

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding or inspecting dashboard documents
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Entry {index} could not be decoded: {message}")]
    Decode { index: usize, message: String },

    #[error("Unknown document kind: {0}")]
    UnknownDocumentKind(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}
