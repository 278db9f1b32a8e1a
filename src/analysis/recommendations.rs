// src/analysis/recommendations.rs
//! Recommendation generation
//!
//! Short-term: the top skill gaps, one `{skill}` item each. Coverage is not
//! checked here - skills are open vocabulary and the roadmap resolver
//! degrades to search-link fallbacks for anything the catalog lacks.
//! Medium/long-term: fixed strategic guidance picked by score band.

use super::models::{Recommendations, ShortTermItem};

/// Only the most critical gaps get a short-term card.
const MAX_SHORT_TERM_GAPS: usize = 3;

pub fn generate_recommendations(missing_skills: &[String], match_score: f64) -> Recommendations {
    let short_term = missing_skills
        .iter()
        .take(MAX_SHORT_TERM_GAPS)
        .map(|skill| ShortTermItem {
            skill: skill.clone(),
        })
        .collect();

    let (medium_term, long_term) = if match_score < 60.0 {
        (
            vec![
                "Build 2 portfolio projects".to_string(),
                "Contribute to open-source".to_string(),
                "Obtain one certificate above".to_string(),
            ],
            vec![
                "Target mid-level roles".to_string(),
                "Build 5+ significant projects".to_string(),
            ],
        )
    } else if match_score < 80.0 {
        (
            vec![
                "Deepen 2 core tech stacks".to_string(),
                "Lead a small team/task".to_string(),
                "Pass one certificate".to_string(),
            ],
            vec![
                "Aim for senior roles".to_string(),
                "Speak at meet-ups / write blogs".to_string(),
            ],
        )
    } else {
        (
            vec![
                "Prepare for system-design interviews".to_string(),
                "Mentor juniors".to_string(),
            ],
            vec![
                "Target staff / principal level".to_string(),
                "Develop domain expertise".to_string(),
            ],
        )
    };

    Recommendations {
        short_term,
        medium_term,
        long_term,
    }
}
