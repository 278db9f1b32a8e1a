// src/resumes/handlers.rs

use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::auth::AuthedUser;
use crate::common::{generate_resume_id, helpers, ApiError, AppState};

use super::parser::{extract_education, extract_experience, extract_skills};

/// Mirror of the original 5 MB upload ceiling
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// POST /api/upload-resume - Upload and parse a resume PDF
pub async fn upload_resume(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();

    info!(user_id = %authed.id, "User uploading resume");

    // Extract file from multipart
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::BadRequest("Malformed multipart request".to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("resume.pdf").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|_| ApiError::BadRequest("Invalid file".to_string()))?;
            upload = Some((filename, data.to_vec()));
        }
    }

    let (filename, data) = upload
        .ok_or_else(|| ApiError::BadRequest("No file provided".to_string()))?;

    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(ApiError::BadRequest(
            "Only PDF files allowed".to_string(),
        ));
    }

    if data.len() > MAX_FILE_SIZE {
        return Err(ApiError::BadRequest(
            "File exceeds the 5 MB upload limit".to_string(),
        ));
    }

    // Extract text before touching disk so unreadable PDFs never persist
    let text = match pdf_extract::extract_text_from_mem(&data) {
        Ok(t) if !t.trim().is_empty() => t.trim().to_string(),
        Ok(_) => {
            warn!(user_id = %authed.id, file = %filename, "PDF contained no extractable text");
            return Err(ApiError::BadRequest(
                "Could not extract text from PDF".to_string(),
            ));
        }
        Err(e) => {
            warn!(error = %e, user_id = %authed.id, "PDF text extraction failed");
            return Err(ApiError::BadRequest(
                "Could not extract text from PDF".to_string(),
            ));
        }
    };

    // Save file
    let resume_id = generate_resume_id();
    let safe_filename = format!("{}.pdf", resume_id);
    let file_path = state.resumes_dir.join(&safe_filename);
    tokio::fs::write(&file_path, &data).await.map_err(|e| {
        error!(error = %e, "Failed to save resume");
        ApiError::InternalServer("Failed to save resume".to_string())
    })?;

    // Rule-based parsing
    let skills = extract_skills(&text);
    let education = extract_education(&text);
    let experience = extract_experience(&text);

    // Create database record; the stored PDF must not outlive a failed insert
    insert_resume_record(
        &state.db,
        &resume_id,
        &authed.id,
        &filename,
        &file_path,
        &text,
        &skills,
        &education,
        &experience,
    )
    .await?;

    info!(
        user_id = %authed.id,
        resume_id = %resume_id,
        skill_count = skills.len(),
        "Resume uploaded and parsed"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Resume uploaded and processed",
            "resume_id": resume_id,
            "skills": skills,
            "skill_count": skills.len(),
        })),
    ))
}

/// Insert the resume row. If the insert fails, the already-written PDF is
/// removed so no file on disk lacks a referencing row.
#[allow(clippy::too_many_arguments)]
pub(super) async fn insert_resume_record(
    db: &SqlitePool,
    resume_id: &str,
    user_id: &str,
    file_name: &str,
    file_path: &Path,
    parsed_text: &str,
    skills: &[String],
    education: &[String],
    experience: &[String],
) -> Result<(), ApiError> {
    let insert = sqlx::query(
        r#"
        INSERT INTO resumes (id, user_id, file_name, file_path, parsed_text,
                             skills, education, experience)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(resume_id)
    .bind(user_id)
    .bind(file_name)
    .bind(file_path.to_string_lossy().as_ref())
    .bind(parsed_text)
    .bind(helpers::encode_string_list(skills))
    .bind(helpers::encode_string_list(education))
    .bind(helpers::encode_string_list(experience))
    .execute(db)
    .await;

    if let Err(e) = insert {
        if let Err(remove_err) = tokio::fs::remove_file(file_path).await {
            if remove_err.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    error = %remove_err,
                    path = %file_path.display(),
                    "Failed to remove orphaned resume file"
                );
            }
        }
        return Err(ApiError::DatabaseError(e));
    }

    Ok(())
}
