// src/analysis/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Job Role Models
// ============================================================================

#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct JobRole {
    pub id: String,
    pub role_name: String,
    pub job_description: String,
    pub required_skills: Option<String>,
    pub industry: Option<String>,
    pub created_at: Option<String>,
}

// ============================================================================
// Analysis Report Models
// ============================================================================

/// One short-term skill gap. Deliberately an object rather than a bare
/// string: the roadmap resolver reads only `skill`, and the shape leaves
/// room for per-gap metadata later without breaking consumers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShortTermItem {
    pub skill: String,
}

/// Three-horizon recommendation set. Short-term entries are resolved
/// against the skill guide catalog; medium/long-term entries are rendered
/// verbatim as bullet items.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub short_term: Vec<ShortTermItem>,
    pub medium_term: Vec<String>,
    pub long_term: Vec<String>,
}

/// Full analysis result returned to the client and cached in the
/// last-analysis slot. `analysis_id` is None for free-text analyses,
/// which are not persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub analysis_id: Option<String>,
    pub job_match_score: f64,
    pub role_name: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Recommendations,
}

// ============================================================================
// Request Payloads
// ============================================================================

#[derive(Deserialize, Debug)]
pub struct AnalyzeRoleRequest {
    pub resume_id: String,
    pub role_id: String,
}

#[derive(Deserialize, Debug)]
pub struct AnalyzeTextRequest {
    pub resume_id: String,
    pub job_description: String,
}
