// src/analysis/routes.rs

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Create the analysis router
///
/// # Routes
/// - `GET  /api/job-roles` - List the seeded job role catalog
/// - `POST /api/analyze-role` - Score a resume against a catalog role
/// - `POST /api/analyze-text` - Score a resume against pasted job text
/// - `GET  /api/analysis/latest` - Most recent analysis (cache-first)
pub fn analysis_routes() -> Router {
    Router::new()
        .route("/api/job-roles", get(handlers::get_job_roles))
        .route("/api/analyze-role", post(handlers::analyze_role))
        .route("/api/analyze-text", post(handlers::analyze_text))
        .route("/api/analysis/latest", get(handlers::get_latest_analysis))
}
