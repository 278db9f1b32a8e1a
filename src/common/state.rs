// Application state shared across all modules

use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

use crate::analysis::models::AnalysisReport;
use crate::roadmap::SkillGuideCatalog;

/// Application state containing database pool, configuration, and caches
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub resumes_dir: PathBuf,
    pub jwt_secret: String,
    /// Curated learning-path catalog. Built once at startup, read-only after.
    pub skill_guide: Arc<SkillGuideCatalog>,
    /// Most recent analysis report, kept so the dashboard can redisplay it
    /// without hitting the database. Single slot, overwritten on every
    /// successful analysis.
    pub last_analysis: Option<AnalysisReport>,
}
