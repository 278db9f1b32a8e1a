// src/analysis/scoring.rs
//! Resume-to-job similarity scoring
//!
//! Pure-Rust, deterministic scorer: lowercase word tokenization into
//! term-frequency vectors, then cosine similarity scaled to 0-100 and
//! rounded to one decimal. Fast enough to run inline in a request handler
//! and fully testable without fixtures.

use std::collections::HashMap;

/// Tokenize into lowercase alphanumeric words. Single characters are kept:
/// skills like "R" and "C" are real words in this domain.
fn term_frequencies(text: &str) -> HashMap<String, f64> {
    let mut counts: HashMap<String, f64> = HashMap::new();
    for token in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        *counts.entry(token.to_lowercase()).or_insert(0.0) += 1.0;
    }
    counts
}

fn cosine_similarity(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, &wa)| b.get(term).map(|&wb| wa * wb))
        .sum();
    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Score a resume against a job description: 0.0-100.0, one decimal place.
pub fn match_score(resume_text: &str, job_text: &str) -> f64 {
    let similarity = cosine_similarity(
        &term_frequencies(resume_text),
        &term_frequencies(job_text),
    );
    let score = (similarity * 100.0).clamp(0.0, 100.0);
    (score * 10.0).round() / 10.0
}
