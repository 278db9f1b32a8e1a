// src/roadmap/resolver.rs
//! Skill-to-roadmap resolution
//!
//! For each short-term skill gap, resolve a learning plan: a curated card
//! when the catalog knows the skill, otherwise a fallback card pointing at
//! search results. Skills are open vocabulary (free text pulled out of
//! resumes and job postings), so the catalog can never be exhaustive; the
//! fallback guarantees every gap still yields actionable next steps.

use crate::analysis::models::ShortTermItem;

use super::catalog::SkillGuideCatalog;

/// One rendered roadmap block for a single short-term skill gap.
#[derive(Debug, Clone, PartialEq)]
pub enum RoadmapCard {
    /// The catalog has a hand-curated plan for this skill.
    Curated {
        skill: String,
        videos: Vec<String>,
        hours: u32,
        project: String,
        certificate: String,
    },
    /// No curated plan: a pair of search links seeded with "<skill> tutorial".
    Fallback {
        skill: String,
        query: String,
        youtube_url: String,
        google_url: String,
    },
}

impl RoadmapCard {
    pub fn skill(&self) -> &str {
        match self {
            RoadmapCard::Curated { skill, .. } => skill,
            RoadmapCard::Fallback { skill, .. } => skill,
        }
    }
}

/// Ephemeral render model, rebuilt from scratch per analysis. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapView {
    pub cards: Vec<RoadmapCard>,
}

impl RoadmapView {
    /// An empty view renders as a placeholder, never as an empty card list.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Resolve each short-term skill gap to a roadmap card.
///
/// Output ordering matches input ordering. Duplicates are not deduplicated:
/// each occurrence produces its own card. No sorting, no filtering.
pub fn resolve(short_term: &[ShortTermItem], catalog: &SkillGuideCatalog) -> RoadmapView {
    let cards = short_term
        .iter()
        .map(|item| match catalog.get(&item.skill) {
            Some(entry) => RoadmapCard::Curated {
                skill: item.skill.clone(),
                videos: entry.videos.clone(),
                hours: entry.hours,
                project: entry.project.clone(),
                certificate: entry.certificate.clone(),
            },
            None => {
                let query = urlencoding::encode(&format!("{} tutorial", item.skill)).into_owned();
                RoadmapCard::Fallback {
                    skill: item.skill.clone(),
                    youtube_url: format!(
                        "https://www.youtube.com/results?search_query={}",
                        query
                    ),
                    google_url: format!("https://www.google.com/search?q={}", query),
                    query,
                }
            }
        })
        .collect();

    RoadmapView { cards }
}
