// src/analysis/handlers.rs

use axum::{
    extract::Extension,
    response::{IntoResponse, Json},
};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::auth::AuthedUser;
use crate::common::{generate_analysis_id, helpers, ApiError, AppState};
use crate::resumes::models::Resume;
use crate::roadmap::render_roadmap;

use super::models::{
    AnalysisReport, AnalyzeRoleRequest, AnalyzeTextRequest, JobRole,
};
use super::recommendations::generate_recommendations;
use super::scoring::match_score;

/// GET /api/job-roles - List the job role catalog
pub async fn get_job_roles(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let roles = sqlx::query_as::<_, JobRole>(
        "SELECT * FROM job_roles ORDER BY role_name",
    )
    .fetch_all(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    let roles: Vec<serde_json::Value> = roles
        .iter()
        .map(|r| {
            json!({
                "role_id": r.id,
                "role_name": r.role_name,
                "industry": r.industry,
            })
        })
        .collect();

    Ok(Json(json!({ "roles": roles })))
}

/// POST /api/analyze-role - Score a resume against a catalog job role
pub async fn analyze_role(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(payload): Json<AnalyzeRoleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();

    let resume = fetch_owned_resume(&state, &authed.id, &payload.resume_id).await?;

    let role = sqlx::query_as::<_, JobRole>("SELECT * FROM job_roles WHERE id = ?")
        .bind(&payload.role_id)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Job role not found".to_string()))?;

    let resume_text = resume.parsed_text.clone().unwrap_or_default();
    let score = match_score(&resume_text, &role.job_description);

    let candidate_skills = helpers::decode_string_list(resume.skills.as_deref());
    let required_skills = helpers::decode_string_list(role.required_skills.as_deref());
    let (matched_skills, missing_skills) = skill_gap(&candidate_skills, &required_skills);

    let recommendations = generate_recommendations(&missing_skills, score);
    let roadmap_html = render_roadmap(&recommendations, &state.skill_guide);

    let analysis_id = generate_analysis_id();
    sqlx::query(
        r#"
        INSERT INTO analysis_history (id, user_id, resume_id, role_id,
                                      job_match_score, missing_skills, recommendations)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&analysis_id)
    .bind(&authed.id)
    .bind(&payload.resume_id)
    .bind(&payload.role_id)
    .bind(score)
    .bind(helpers::encode_string_list(&missing_skills))
    .bind(
        serde_json::to_string(&recommendations)
            .map_err(|e| ApiError::InternalServer(format!("serialize recommendations: {e}")))?,
    )
    .execute(&state.db)
    .await
    .map_err(ApiError::DatabaseError)?;

    let report = AnalysisReport {
        analysis_id: Some(analysis_id.clone()),
        job_match_score: score,
        role_name: role.role_name.clone(),
        matched_skills,
        missing_skills,
        recommendations,
    };

    // Keep the freshest result in the shared slot for instant redisplay
    state_lock.write().await.last_analysis = Some(report.clone());

    info!(
        user_id = %authed.id,
        analysis_id = %analysis_id,
        role = %role.role_name,
        score = score,
        "Role analysis completed"
    );

    Ok(Json(json!({
        "analysis_id": report.analysis_id,
        "job_match_score": report.job_match_score,
        "role_name": report.role_name,
        "matched_skills": report.matched_skills,
        "missing_skills": report.missing_skills,
        "recommendations": report.recommendations,
        "roadmap_html": roadmap_html,
    })))
}

/// POST /api/analyze-text - Score a resume against a pasted job description
///
/// Same response shape as analyze-role, but nothing is written to
/// analysis_history: a free-text analysis is a throwaway comparison.
pub async fn analyze_text(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(payload): Json<AnalyzeTextRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let job_text = payload.job_description.trim().to_string();
    if job_text.is_empty() {
        return Err(ApiError::BadRequest(
            "Job description is required".to_string(),
        ));
    }

    let state = state_lock.read().await.clone();
    let resume = fetch_owned_resume(&state, &authed.id, &payload.resume_id).await?;

    let resume_text = resume.parsed_text.clone().unwrap_or_default();
    let score = match_score(&resume_text, &job_text);

    let candidate_skills = helpers::decode_string_list(resume.skills.as_deref());
    let required_skills = crate::resumes::parser::extract_skills(&job_text);
    let (matched_skills, missing_skills) = skill_gap(&candidate_skills, &required_skills);

    let recommendations = generate_recommendations(&missing_skills, score);
    let roadmap_html = render_roadmap(&recommendations, &state.skill_guide);

    let report = AnalysisReport {
        analysis_id: None,
        job_match_score: score,
        role_name: "User-defined role".to_string(),
        matched_skills,
        missing_skills,
        recommendations,
    };

    state_lock.write().await.last_analysis = Some(report.clone());

    info!(
        user_id = %authed.id,
        resume_id = %payload.resume_id,
        score = score,
        "Free-text analysis completed"
    );

    Ok(Json(json!({
        "analysis_id": report.analysis_id,
        "job_match_score": report.job_match_score,
        "role_name": report.role_name,
        "matched_skills": report.matched_skills,
        "missing_skills": report.missing_skills,
        "recommendations": report.recommendations,
        "roadmap_html": roadmap_html,
    })))
}

/// GET /api/analysis/latest - Most recent analysis for the dashboard
///
/// Serves the in-process slot when populated (no database round trip),
/// otherwise falls back to the newest persisted row for this user.
pub async fn get_latest_analysis(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<impl IntoResponse, ApiError> {
    let state = state_lock.read().await.clone();

    if let Some(report) = &state.last_analysis {
        let roadmap_html = render_roadmap(&report.recommendations, &state.skill_guide);
        return Ok(Json(json!({
            "analysis_id": report.analysis_id,
            "job_match_score": report.job_match_score,
            "role_name": report.role_name,
            "matched_skills": report.matched_skills,
            "missing_skills": report.missing_skills,
            "recommendations": report.recommendations,
            "roadmap_html": roadmap_html,
            "source": "cache",
        })));
    }

    let row: Option<(String, f64, Option<String>, Option<String>, Option<String>, String)> =
        sqlx::query_as(
            r#"
            SELECT ah.id, ah.job_match_score, ah.missing_skills,
                   ah.recommendations, ah.created_at, jr.role_name
            FROM analysis_history ah
            JOIN job_roles jr ON ah.role_id = jr.id
            WHERE ah.user_id = ?
            ORDER BY ah.created_at DESC
            LIMIT 1
            "#,
        )
        .bind(&authed.id)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    let (id, score, missing_json, rec_json, created_at, role_name) = match row {
        Some(r) => r,
        None => {
            return Err(ApiError::NotFound("No analysis found".to_string()));
        }
    };

    let recommendations = rec_json
        .as_deref()
        .and_then(|s| serde_json::from_str::<super::models::Recommendations>(s).ok());
    let roadmap_html = recommendations
        .as_ref()
        .map(|rec| render_roadmap(rec, &state.skill_guide));

    if recommendations.is_none() {
        warn!(analysis_id = %id, "Stored recommendations column was unreadable");
    }

    Ok(Json(json!({
        "analysis_id": id,
        "job_match_score": score,
        "role_name": role_name,
        "missing_skills": helpers::decode_string_list(missing_json.as_deref()),
        "recommendations": recommendations,
        "roadmap_html": roadmap_html,
        "timestamp": created_at,
        "source": "database",
    })))
}

// ---- Helper Functions ----

/// Load a resume, enforcing ownership.
async fn fetch_owned_resume(
    state: &AppState,
    user_id: &str,
    resume_id: &str,
) -> Result<Resume, ApiError> {
    sqlx::query_as::<_, Resume>("SELECT * FROM resumes WHERE id = ? AND user_id = ?")
        .bind(resume_id)
        .bind(user_id)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?
        .ok_or_else(|| ApiError::NotFound("Resume not found".to_string()))
}

/// Split required skills into matched and missing, preserving the order the
/// role lists them in. Candidate membership is exact-match.
fn skill_gap(
    candidate_skills: &[String],
    required_skills: &[String],
) -> (Vec<String>, Vec<String>) {
    let candidate: HashSet<&str> = candidate_skills.iter().map(String::as_str).collect();
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for skill in required_skills {
        if candidate.contains(skill.as_str()) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }
    (matched, missing)
}
