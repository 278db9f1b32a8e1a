// src/resumes/parser.rs
//! Rule-based resume/job-text parsers
//!
//! Skill extraction is whole-word, case-insensitive matching against a fixed
//! skill dictionary, returning canonical names. Education and experience are
//! line filters over keyword and tenure patterns. Deliberately simple and
//! deterministic: the same text always parses the same way.

use regex::Regex;

/// Skill dictionary grouped by category. Matching is case-insensitive; the
/// canonical (capitalized) name is what gets reported.
const SKILL_PATTERNS: &[(&str, &[&str])] = &[
    (
        "Programming",
        &["Python", "JavaScript", "Java", "C++", "C#", "Go", "Rust", "PHP", "Ruby"],
    ),
    (
        "Web",
        &["HTML", "CSS", "React", "Vue", "Angular", "Node.js", "Django", "Flask"],
    ),
    (
        "Cloud",
        &["AWS", "Azure", "GCP", "Docker", "Kubernetes", "CI/CD"],
    ),
    (
        "Data",
        &["SQL", "Pandas", "NumPy", "Tableau", "Power BI", "Excel", "R"],
    ),
    (
        "AI/ML",
        &["Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "scikit-learn"],
    ),
    (
        "Soft Skills",
        &["Team Leadership", "Communication", "Agile", "Scrum", "Project Management"],
    ),
];

const EDUCATION_KEYWORDS: &[&str] = &["bachelor", "master", "phd", "bs", "ba", "ms", "mba"];

const EXPERIENCE_PATTERNS: &[&str] = &[
    r"(?i)(\d+)\s*years?\s+of\s+experience",
    r"(?i)(\d+)-(\d+)\s*years?",
    r"(?i)\b(present|current|today)\b",
];

const MAX_EDUCATION_ENTRIES: usize = 3;
const MAX_EXPERIENCE_ENTRIES: usize = 5;

/// Extract known skills from free text. Whole-word, case-insensitive;
/// output order follows the dictionary, duplicates collapsed.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut found = Vec::new();

    for (_category, skills) in SKILL_PATTERNS {
        for skill in *skills {
            let pattern = format!(r"\b{}\b", regex::escape(&skill.to_lowercase()));
            let matched = match Regex::new(&pattern) {
                Ok(re) => re.is_match(&text_lower),
                // escaped literals always compile; fall back to substring
                Err(_) => text_lower.contains(&skill.to_lowercase()),
            };
            if matched && !found.contains(&skill.to_string()) {
                found.push(skill.to_string());
            }
        }
    }

    found
}

/// Extract education lines: any line mentioning a degree keyword,
/// capped at the top entries.
pub fn extract_education(text: &str) -> Vec<String> {
    let keyword_re = Regex::new(&format!(r"(?i)\b({})\b", EDUCATION_KEYWORDS.join("|")))
        .expect("education keyword pattern is static");

    text.lines()
        .filter(|line| keyword_re.is_match(line))
        .map(|line| line.trim().to_string())
        .take(MAX_EDUCATION_ENTRIES)
        .collect()
}

/// Extract experience lines: any line matching a tenure/date pattern,
/// capped at the top entries.
pub fn extract_experience(text: &str) -> Vec<String> {
    let patterns: Vec<Regex> = EXPERIENCE_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("experience patterns are static"))
        .collect();

    text.lines()
        .filter(|line| patterns.iter().any(|re| re.is_match(line)))
        .map(|line| line.trim().to_string())
        .take(MAX_EXPERIENCE_ENTRIES)
        .collect()
}
