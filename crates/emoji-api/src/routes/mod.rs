//! Route definitions
//!
//! Gallery routes are mounted under /api/v1; health sits at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{gallery, generate, health, items};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/gallery", get(gallery::get_gallery))
        .route("/generate", post(generate::generate))
        .merge(item_routes())
}

/// Per-item routes
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items/:id/like", post(items::toggle_like))
        .route("/items/:id/liked", get(items::is_liked))
        .route("/items/:id/download", get(items::download))
}
