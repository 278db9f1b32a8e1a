// src/settings/handlers.rs

use axum::{extract::Extension, response::Json};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// POST /api/clear-data - Delete everything belonging to the caller
///
/// Removes the user row (ON DELETE CASCADE takes resumes and analyses with
/// it), then best-effort deletes the stored resume PDFs. The last-analysis
/// slot is cleared too so a deleted account's report cannot linger on the
/// dashboard.
pub async fn clear_data(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    // Collect file paths before the rows disappear
    let file_paths: Vec<(String,)> =
        sqlx::query_as("SELECT file_path FROM resumes WHERE user_id = ?")
            .bind(&authed.id)
            .fetch_all(&state.db)
            .await
            .map_err(ApiError::DatabaseError)?;

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(&authed.id)
        .execute(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    // Remove physical PDFs; a file already gone is not an error
    for (path,) in &file_paths {
        if let Err(e) = tokio::fs::remove_file(path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(error = %e, path = %path, "Failed to remove resume file");
            }
        }
    }

    state_lock.write().await.last_analysis = None;

    info!(
        user_id = %authed.id,
        removed_files = file_paths.len(),
        "User data cleared"
    );

    Ok(Json(json!({ "message": "All data cleared" })))
}
