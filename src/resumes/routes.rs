// src/resumes/routes.rs

use axum::{routing::post, Router};

use super::handlers;

/// Create the resumes router
///
/// # Routes
/// - `POST /api/upload-resume` - Upload and parse a resume PDF
pub fn resumes_routes() -> Router {
    Router::new().route("/api/upload-resume", post(handlers::upload_resume))
}
