// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXX (e.g., R_K7NP3X for resumes)
//!
//! Benefits:
//! - No ambiguous characters (excludes I, L, O, U)
//! - Case-insensitive
//! - ~1 billion combinations per entity type (32^6)
//! - Easy to read, type, and communicate verbally

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User account (U_)
    User,
    /// Resume (R_)
    Resume,
    /// Job role (J_)
    Role,
    /// Analysis run (A_)
    Analysis,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::Resume => "R",
            EntityPrefix::Role => "J",
            EntityPrefix::Analysis => "A",
        }
    }
}

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID using Crockford Base32 encoding
///
/// Returns a string in format "PREFIX_XXXXXX" (e.g., "R_K7NP3X").
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(6))
}

/// Generate a User ID (U_XXXXXX)
pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

/// Generate a Resume ID (R_XXXXXX)
pub fn generate_resume_id() -> String {
    generate_id(EntityPrefix::Resume)
}

/// Generate a Job Role ID (J_XXXXXX)
pub fn generate_role_id() -> String {
    generate_id(EntityPrefix::Role)
}

/// Generate an Analysis ID (A_XXXXXX)
pub fn generate_analysis_id() -> String {
    generate_id(EntityPrefix::Analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let id = generate_user_id();
        assert!(id.starts_with("U_"));
        assert_eq!(id.len(), 8); // "U_" + 6 chars

        let id = generate_analysis_id();
        assert!(id.starts_with("A_"));
    }

    #[test]
    fn test_ids_use_crockford_alphabet() {
        let id = generate_resume_id();
        let suffix = id.strip_prefix("R_").unwrap();
        for c in suffix.bytes() {
            assert!(
                CROCKFORD_ALPHABET.contains(&c),
                "unexpected character {} in id {}",
                c as char,
                id
            );
        }
    }

    #[test]
    fn test_ids_are_not_trivially_colliding() {
        let a = generate_role_id();
        let b = generate_role_id();
        // 32^6 space; two consecutive draws matching would be suspicious
        assert_ne!(a, b);
    }
}
