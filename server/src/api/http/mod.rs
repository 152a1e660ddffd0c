//! HTTP API handlers

mod document;
mod editor;
mod health;
mod route;
mod stack;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::AppState;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let api_routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Document routes
        .route("/schemas", get(document::list_kinds))
        .route("/schemas/{kind}", get(document::get_schema))
        .route("/validate/{kind}", post(document::validate))
        // Dashboard settings
        .route("/editor-options", get(editor::get_editor_options))
        .route("/route-params", get(route::parse_route_params))
        // Stack routes
        .route("/stacks/instantiate", post(stack::instantiate_stack));

    let prefix = state.config.api_prefix.as_str();
    let app = if prefix == "/" {
        Router::new().merge(api_routes)
    } else {
        Router::new().nest(prefix, api_routes)
    };

    app.layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}
