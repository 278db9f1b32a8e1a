//! Tests for the analysis module: scoring determinism and
//! recommendation band selection.

#[cfg(test)]
mod tests {
    use super::super::recommendations::generate_recommendations;
    use super::super::scoring::match_score;

    #[test]
    fn test_identical_texts_score_full_marks() {
        let text = "Python developer with SQL and Docker experience";
        assert_eq!(match_score(text, text), 100.0);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(match_score("alpha beta gamma", "delta epsilon zeta"), 0.0);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(match_score("", "some job description"), 0.0);
        assert_eq!(match_score("some resume", ""), 0.0);
    }

    #[test]
    fn test_score_is_case_insensitive_and_deterministic() {
        let a = match_score("PYTHON sql docker", "python SQL Docker");
        assert_eq!(a, 100.0);

        let b = match_score("python developer", "python and sql developer");
        let c = match_score("python developer", "python and sql developer");
        assert_eq!(b, c);
        assert!(b > 0.0 && b < 100.0);
    }

    #[test]
    fn test_partial_overlap_lands_between_bounds() {
        let score = match_score(
            "experienced python engineer building data pipelines",
            "python engineer wanted for web services",
        );
        assert!(score > 0.0, "shared terms must contribute: {score}");
        assert!(score < 100.0, "different texts must not be perfect: {score}");
    }

    #[test]
    fn test_short_term_caps_at_three_gaps() {
        let missing: Vec<String> = ["Docker", "AWS", "SQL", "React", "Git"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rec = generate_recommendations(&missing, 50.0);

        let skills: Vec<&str> = rec.short_term.iter().map(|i| i.skill.as_str()).collect();
        assert_eq!(skills, vec!["Docker", "AWS", "SQL"]);
    }

    #[test]
    fn test_no_gaps_means_empty_short_term() {
        let rec = generate_recommendations(&[], 90.0);
        assert!(rec.short_term.is_empty());
        // medium/long horizons are always populated
        assert!(!rec.medium_term.is_empty());
        assert!(!rec.long_term.is_empty());
    }

    #[test]
    fn test_recommendation_bands() {
        let low = generate_recommendations(&[], 45.0);
        assert!(low
            .medium_term
            .contains(&"Build 2 portfolio projects".to_string()));
        assert!(low.long_term.contains(&"Target mid-level roles".to_string()));

        let mid = generate_recommendations(&[], 70.0);
        assert!(mid
            .medium_term
            .contains(&"Deepen 2 core tech stacks".to_string()));
        assert!(mid.long_term.contains(&"Aim for senior roles".to_string()));

        let high = generate_recommendations(&[], 85.0);
        assert!(high
            .medium_term
            .contains(&"Prepare for system-design interviews".to_string()));
        assert!(high
            .long_term
            .contains(&"Target staff / principal level".to_string()));
    }

    #[test]
    fn test_band_boundaries_are_left_inclusive() {
        // exactly 60 falls in the middle band, exactly 80 in the top band
        let at_sixty = generate_recommendations(&[], 60.0);
        assert!(at_sixty
            .medium_term
            .contains(&"Deepen 2 core tech stacks".to_string()));

        let at_eighty = generate_recommendations(&[], 80.0);
        assert!(at_eighty.medium_term.contains(&"Mentor juniors".to_string()));
    }
}
