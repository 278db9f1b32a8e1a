// src/settings/routes.rs

use axum::{routing::post, Router};

use super::handlers;

/// Create the settings router
///
/// # Routes
/// - `POST /api/clear-data` - Delete all data for the current user
pub fn settings_routes() -> Router {
    Router::new().route("/api/clear-data", post(handlers::clear_data))
}
