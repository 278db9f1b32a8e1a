// src/resumes/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Resume database model. The skills/education/experience columns hold
/// JSON-encoded string lists (see common::helpers).
#[derive(FromRow, Serialize, Deserialize, Debug)]
pub struct Resume {
    pub id: String,
    pub user_id: String,
    pub file_name: String,
    pub file_path: String,
    pub parsed_text: Option<String>,
    pub skills: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub created_at: Option<String>,
}
