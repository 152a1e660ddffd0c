//! Route parameter handler

use axum::{extract::RawQuery, Json};
use dashboard_model::RouteParams;

/// Decode dashboard route parameters from the query string
///
/// `ideParams` may be repeated, which the typed query extractor cannot
/// express, so the raw query is parsed instead.
pub async fn parse_route_params(RawQuery(query): RawQuery) -> Json<RouteParams> {
    Json(RouteParams::from_query(query.as_deref().unwrap_or_default()))
}
