//! Editor settings handler

use axum::{extract::State, Json};
use dashboard_model::EditorOptions;

use crate::AppState;

/// Get the configured recipe editor options
pub async fn get_editor_options(State(state): State<AppState>) -> Json<EditorOptions> {
    Json(state.config.editor_options())
}
