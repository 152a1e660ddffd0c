//! Stack HTTP handlers

use axum::Json;
use dashboard_model::{Stack, Validate, WorkspaceConfig};
use serde::Deserialize;
use tracing::info;

use crate::{Error, Result};

/// Instantiate stack request
#[derive(Debug, Deserialize)]
pub struct InstantiateStackRequest {
    pub stack: Stack,
    pub name: String,
}

/// Derive the configuration of a new workspace from a stack
///
/// The template's own workspace name is replaced, so only the resulting
/// configuration is validated.
pub async fn instantiate_stack(
    Json(req): Json<InstantiateStackRequest>,
) -> Result<Json<WorkspaceConfig>> {
    let config = req.stack.instantiate(req.name.as_str());

    let mut validation = config.validate();
    if req.stack.name.as_deref().map_or(true, |name| name.trim().is_empty()) {
        validation.push_error("Stack name is required");
    }
    if !validation.is_valid {
        return Err(Error::InvalidDocument(validation.errors.join("; ")));
    }

    info!(
        "Instantiating stack {:?} as workspace {}",
        req.stack.id.as_deref().or(req.stack.name.as_deref()),
        req.name
    );

    Ok(Json(config))
}
