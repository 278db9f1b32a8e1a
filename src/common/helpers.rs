// Helper functions for safe logging and JSON column handling

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            // first char, not first byte: local parts may start multi-byte
            if let Some(first) = parts[0].chars().next() {
                return format!("{}***@{}", first, parts[1]);
            }
        }
    }
    "***@***.***".to_string()
}

/// Parses a JSON-encoded string-list column into a `Vec<String>`.
/// Columns like `resumes.skills` and `job_roles.required_skills` store
/// their lists as JSON text; a NULL or malformed value decodes to empty.
pub fn decode_string_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
        .unwrap_or_default()
}

/// Encodes a string list for storage in a JSON text column.
pub fn encode_string_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_email_log_masks_local_part() {
        assert_eq!(safe_email_log("user@example.com"), "u***@example.com");
    }

    #[test]
    fn test_safe_email_log_multibyte_first_char() {
        assert_eq!(safe_email_log("émail@example.com"), "é***@example.com");
        assert_eq!(safe_email_log("日本@example.jp"), "日***@example.jp");
    }

    #[test]
    fn test_safe_email_log_handles_garbage() {
        assert_eq!(safe_email_log("no-at-sign"), "***@***.***");
        assert_eq!(safe_email_log("ab"), "***@***.***");
    }

    #[test]
    fn test_string_list_round_trip() {
        let skills = vec!["Python".to_string(), "SQL".to_string()];
        let encoded = encode_string_list(&skills);
        assert_eq!(decode_string_list(Some(&encoded)), skills);
    }

    #[test]
    fn test_decode_string_list_tolerates_null_and_bad_json() {
        assert!(decode_string_list(None).is_empty());
        assert!(decode_string_list(Some("not json")).is_empty());
    }
}
