//! Tests for the rule-based resume parsers and the upload persistence path

#[cfg(test)]
mod tests {
    use super::super::handlers::insert_resume_record;
    use super::super::parser::*;

    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn test_pool() -> SqlitePool {
        // single connection so the in-memory database is shared
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::common::migrations::run_migrations(&pool).await.unwrap();
        sqlx::query("INSERT INTO users (id, name, email, password_hash) VALUES (?, ?, ?, ?)")
            .bind("U_TEST01")
            .bind("Test User")
            .bind("test@example.com")
            .bind("irrelevant$hash")
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    #[tokio::test]
    async fn test_failed_resume_insert_removes_stored_file() {
        let pool = test_pool().await;
        let dir = std::env::temp_dir().join("resume_insert_test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let file_path = dir.join("R_TEST01.pdf");
        tokio::fs::write(&file_path, b"%PDF-1.4 test").await.unwrap();

        let skills = vec!["Python".to_string()];
        insert_resume_record(
            &pool, "R_TEST01", "U_TEST01", "cv.pdf", &file_path, "text",
            &skills, &[], &[],
        )
        .await
        .unwrap();
        assert!(file_path.exists());

        // second write of the same file, same id: the insert must fail on the
        // primary key and take the freshly stored file with it
        tokio::fs::write(&file_path, b"%PDF-1.4 test").await.unwrap();
        let result = insert_resume_record(
            &pool, "R_TEST01", "U_TEST01", "cv.pdf", &file_path, "text",
            &skills, &[], &[],
        )
        .await;
        assert!(result.is_err());
        assert!(!file_path.exists());
    }

    const SAMPLE: &str = "\
Jane Doe
Senior Backend Engineer

SKILLS
Python, Docker, SQL and a bit of React. Familiar with machine learning.

EDUCATION
Bachelor of Science in Computer Science, 2018
Master of Engineering, 2020

EXPERIENCE
5 years of experience building APIs
2019 - present: Backend Engineer at Acme
";

    #[test]
    fn test_extract_skills_finds_whole_words_case_insensitively() {
        let skills = extract_skills(SAMPLE);
        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"Docker".to_string()));
        assert!(skills.contains(&"SQL".to_string()));
        assert!(skills.contains(&"React".to_string()));
        // multi-word skill, matched despite lowercase in the text
        assert!(skills.contains(&"Machine Learning".to_string()));
    }

    #[test]
    fn test_extract_skills_requires_word_boundaries() {
        // "Rusty" must not count as Rust, "going" not as Go
        let skills = extract_skills("A rusty gate, going nowhere fast.");
        assert!(!skills.contains(&"Rust".to_string()));
        assert!(!skills.contains(&"Go".to_string()));

        let skills = extract_skills("Rewrote the service in Rust. Go was considered.");
        assert!(skills.contains(&"Rust".to_string()));
        assert!(skills.contains(&"Go".to_string()));
    }

    #[test]
    fn test_extract_skills_deduplicates_and_keeps_dictionary_order() {
        let skills = extract_skills("SQL then python then SQL again, more sql.");
        assert_eq!(skills, vec!["Python".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn test_extract_skills_empty_text() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_extract_education_caps_at_three_lines() {
        let education = extract_education(SAMPLE);
        assert_eq!(education.len(), 2);
        assert!(education[0].starts_with("Bachelor of Science"));

        let many = "Bachelor A\nMaster B\nPhD C\nMBA D\n";
        assert_eq!(extract_education(many).len(), 3);
    }

    #[test]
    fn test_extract_education_keyword_is_whole_word() {
        // "jobs" contains "bs" but is not a degree line
        assert!(extract_education("Applied to many jobs last year").is_empty());
    }

    #[test]
    fn test_extract_experience_matches_tenure_patterns() {
        let experience = extract_experience(SAMPLE);
        assert_eq!(experience.len(), 2);
        assert!(experience[0].contains("5 years of experience"));
        assert!(experience[1].contains("present"));
    }

    #[test]
    fn test_extract_experience_caps_at_five_lines() {
        let many = (0..8)
            .map(|i| format!("{} years of experience doing thing {}", i + 1, i))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract_experience(&many).len(), 5);
    }
}
