//! Document HTTP handlers

use axum::{extract::Path, Json};
use dashboard_model::document::{schema_for, validate_document};
use dashboard_model::{DocumentKind, Validation};
use serde::Serialize;
use serde_json::Value;

use crate::Result;

/// List document kinds response
#[derive(Debug, Serialize)]
pub struct ListKindsResponse {
    pub kinds: Vec<&'static str>,
    pub total: usize,
}

/// List the document kinds the service understands
pub async fn list_kinds() -> Json<ListKindsResponse> {
    let kinds: Vec<&'static str> = DocumentKind::ALL.iter().map(|k| k.as_str()).collect();
    let total = kinds.len();
    Json(ListKindsResponse { kinds, total })
}

/// Get the JSON Schema of a document kind
pub async fn get_schema(Path(kind): Path<String>) -> Result<Json<Value>> {
    let kind = DocumentKind::parse(&kind)?;
    Ok(Json(schema_for(kind)?))
}

/// Validate a document
///
/// An invalid document is still a successful request; the outcome is in
/// the returned `Validation`.
pub async fn validate(
    Path(kind): Path<String>,
    Json(document): Json<Value>,
) -> Result<Json<Validation>> {
    let kind = DocumentKind::parse(&kind)?;
    Ok(Json(validate_document(kind, &document)))
}
