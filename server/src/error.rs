//! Error types for the dashboard server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the dashboard server
#[derive(Debug, Error)]
pub enum Error {
    // Document errors (2000-2999)
    #[error("Unknown document kind: {0}")]
    UnknownDocumentKind(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    // General errors (1000-1999)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the error code
    pub fn code(&self) -> u32 {
        match self {
            // Document errors (2000-2999)
            Error::UnknownDocumentKind(_) => 2001,
            Error::InvalidDocument(_) => 2002,

            // General errors (1000-1999)
            Error::Internal(_) => 1001,
        }
    }

    /// Get the HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::UnknownDocumentKind(_) => StatusCode::NOT_FOUND,

            Error::InvalidDocument(_) => StatusCode::BAD_REQUEST,

            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: self.code(),
            message: self.to_string(),
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<dashboard_model::Error> for Error {
    fn from(err: dashboard_model::Error) -> Self {
        match err {
            dashboard_model::Error::UnknownDocumentKind(kind) => Error::UnknownDocumentKind(kind),
            dashboard_model::Error::Json(e) => Error::InvalidDocument(e.to_string()),
            other => Error::Internal(other.to_string()),
        }
    }
}
