//! Route definitions
//!
//! Log routes are mounted under /api/v1; health sits at the root.

use axum::{http::Uri, routing::get, Router};

use crate::handlers::{health, modlog};
use crate::response::ApiError;
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes())
        .fallback(route_not_found)
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(log_routes())
}

/// Moderation log routes
fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/s/:sub/log", get(modlog::get_first_page))
        .route("/s/:sub/log/:page", get(modlog::get_page))
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
