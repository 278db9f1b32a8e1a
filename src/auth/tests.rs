//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Password hashing and verification
//! - JWT token validation
//! - Request validation

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::Validator;
    use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

    #[test]
    fn test_password_round_trip() {
        let hash = password::hash_password("hunter2!");
        assert!(password::verify_password("hunter2!", &hash));
        assert!(!password::verify_password("hunter3!", &hash));
    }

    #[test]
    fn test_password_hashes_are_salted() {
        let a = password::hash_password("same-password");
        let b = password::hash_password("same-password");
        assert_ne!(a, b, "two hashes of the same password must differ by salt");
        assert!(password::verify_password("same-password", &a));
        assert!(password::verify_password("same-password", &b));
    }

    #[test]
    fn test_verify_rejects_malformed_stored_values() {
        assert!(!password::verify_password("x", ""));
        assert!(!password::verify_password("x", "no-dollar-sign"));
        assert!(!password::verify_password("x", "###not-base64$deadbeef"));
    }

    #[test]
    fn test_jwt_encoding_and_decoding() {
        let secret = "test_secret_key";
        let claims = models::Claims {
            sub: "U_TEST01".to_string(),
            exp: 9999999999, // Far future
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("Failed to encode token");

        let decoded = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .expect("Failed to decode token");

        assert_eq!(decoded.claims.sub, "U_TEST01");
        assert_eq!(decoded.claims.exp, 9999999999);
    }

    #[test]
    fn test_jwt_validation_fails_with_wrong_secret() {
        let claims = models::Claims {
            sub: "U_TEST01".to_string(),
            exp: 9999999999,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"right secret"),
        )
        .expect("Failed to encode token");

        let result = decode::<models::Claims>(
            &token,
            &DecodingKey::from_secret(b"wrong secret"),
            &Validation::new(Algorithm::HS256),
        );

        assert!(
            result.is_err(),
            "Token validation should fail with wrong secret"
        );
    }

    #[test]
    fn test_register_validator() {
        let valid = models::RegisterRequest {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(validators::RegisterValidator.validate(&valid).is_valid);

        let invalid = models::RegisterRequest {
            name: "".to_string(),
            email: "not-an-email".to_string(),
            password: "abc".to_string(),
        };
        let result = validators::RegisterValidator.validate(&invalid);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
    }

    #[test]
    fn test_login_validator_requires_both_fields() {
        let result = validators::LoginValidator.validate(&models::LoginRequest {
            email: "".to_string(),
            password: "".to_string(),
        });
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
    }
}
