//! Tests for the roadmap module
//!
//! These cover the resolver contract (curated vs fallback cards, ordering,
//! duplicates, the empty-input placeholder) and HTML rendering/escaping.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::analysis::models::{Recommendations, ShortTermItem};

    fn gaps(skills: &[&str]) -> Vec<ShortTermItem> {
        skills
            .iter()
            .map(|s| ShortTermItem {
                skill: s.to_string(),
            })
            .collect()
    }

    fn empty_rec() -> Recommendations {
        Recommendations {
            short_term: Vec::new(),
            medium_term: Vec::new(),
            long_term: Vec::new(),
        }
    }

    #[test]
    fn test_curated_card_matches_catalog_entry_verbatim() {
        let catalog = SkillGuideCatalog::builtin();
        let view = resolve(&gaps(&["Docker"]), &catalog);

        assert_eq!(view.cards.len(), 1);
        match &view.cards[0] {
            RoadmapCard::Curated {
                skill,
                videos,
                hours,
                project,
                certificate,
            } => {
                let entry = catalog.get("Docker").expect("Docker is curated");
                assert_eq!(skill, "Docker");
                assert_eq!(videos, &entry.videos);
                assert_eq!(*hours, entry.hours);
                assert_eq!(project, &entry.project);
                assert_eq!(certificate, &entry.certificate);
            }
            other => panic!("expected curated card, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_skill_gets_fallback_card_with_encoded_query() {
        let catalog = SkillGuideCatalog::builtin();
        let view = resolve(&gaps(&["Quantum Basket Weaving"]), &catalog);

        assert_eq!(view.cards.len(), 1);
        match &view.cards[0] {
            RoadmapCard::Fallback {
                query,
                youtube_url,
                google_url,
                ..
            } => {
                assert_eq!(query, "Quantum%20Basket%20Weaving%20tutorial");
                assert!(youtube_url.contains(query.as_str()));
                assert!(google_url.contains(query.as_str()));
            }
            other => panic!("expected fallback card, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_renders_placeholder_not_empty_list() {
        let catalog = SkillGuideCatalog::builtin();
        let view = resolve(&[], &catalog);
        assert!(view.is_empty());

        let html = render_roadmap(&empty_rec(), &catalog);
        assert!(html.contains("No specific learning path available."));
        assert!(!html.contains("roadmap-card"));
    }

    #[test]
    fn test_order_preserved_including_duplicates() {
        let catalog = SkillGuideCatalog::builtin();
        // "Rust" misses the catalog, "Docker" hits it; order must not change,
        // and the duplicate Docker yields two independent cards.
        let view = resolve(&gaps(&["Docker", "Rust", "Docker"]), &catalog);

        let skills: Vec<&str> = view.cards.iter().map(|c| c.skill()).collect();
        assert_eq!(skills, vec!["Docker", "Rust", "Docker"]);
        assert_eq!(view.cards[0], view.cards[2]);
    }

    #[test]
    fn test_docker_and_rust_scenario() {
        let catalog = SkillGuideCatalog::builtin();
        let view = resolve(&gaps(&["Docker", "Rust"]), &catalog);
        assert_eq!(view.cards.len(), 2);

        match &view.cards[0] {
            RoadmapCard::Curated {
                hours,
                project,
                certificate,
                videos,
                ..
            } => {
                assert_eq!(*hours, 6);
                assert_eq!(project, "Build a multi-container Node+Postgres app");
                assert_eq!(certificate, "Docker Certified Associate");
                assert_eq!(videos.len(), 2);
            }
            other => panic!("expected curated Docker card, got {:?}", other),
        }

        match &view.cards[1] {
            RoadmapCard::Fallback {
                query,
                youtube_url,
                google_url,
                ..
            } => {
                assert_eq!(query, "Rust%20tutorial");
                assert!(youtube_url.ends_with("search_query=Rust%20tutorial"));
                assert!(google_url.ends_with("q=Rust%20tutorial"));
            }
            other => panic!("expected fallback Rust card, got {:?}", other),
        }
    }

    #[test]
    fn test_medium_and_long_term_pass_through_verbatim() {
        let catalog = SkillGuideCatalog::builtin();
        let rec = Recommendations {
            short_term: Vec::new(),
            medium_term: vec!["Learn GraphQL".to_string()],
            long_term: vec!["Target staff / principal level".to_string()],
        };

        let html = render_roadmap(&rec, &catalog);
        assert!(html.contains("<li>Learn GraphQL</li>"));
        assert!(html.contains("<li>Target staff / principal level</li>"));
    }

    #[test]
    fn test_rendered_curated_card_contains_all_fields() {
        let catalog = SkillGuideCatalog::builtin();
        let rec = Recommendations {
            short_term: gaps(&["Kubernetes"]),
            medium_term: Vec::new(),
            long_term: Vec::new(),
        };

        let html = render_roadmap(&rec, &catalog);
        assert!(html.contains("<h5>Kubernetes</h5>"));
        assert!(html.contains("<strong>Est. hours:</strong> 10"));
        assert!(html.contains("Deploy micro-services on minikube with auto-scaling"));
        assert!(html.contains("CKAD"));
        // both curated videos become links opening in a new browsing context
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
    }

    #[test]
    fn test_user_influenced_content_is_escaped() {
        let catalog = SkillGuideCatalog::builtin();
        let rec = Recommendations {
            short_term: gaps(&["<script>alert(1)</script>"]),
            medium_term: vec!["a & b <i>".to_string()],
            long_term: Vec::new(),
        };

        let html = render_roadmap(&rec, &catalog);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<li>a &amp; b &lt;i&gt;</li>"));
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = SkillGuideCatalog::builtin();
        assert_eq!(catalog.len(), 13);
        // case-sensitive exact match: "docker" is not "Docker"
        assert!(catalog.get("Docker").is_some());
        assert!(catalog.get("docker").is_none());
    }
}
