// src/auth/validators.rs

use super::models::{LoginRequest, RegisterRequest};
use crate::common::{ValidationResult, Validator};

pub struct RegisterValidator;

impl Validator<RegisterRequest> for RegisterValidator {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Name is required");
        } else if data.name.len() > 100 {
            result.add_error("name", "Name must be less than 100 characters");
        }

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        } else if !data.email.contains('@') || data.email.len() > 255 {
            result.add_error("email", "Email address is not valid");
        }

        if data.password.is_empty() {
            result.add_error("password", "Password is required");
        } else if data.password.len() < 6 {
            result.add_error("password", "Password must be at least 6 characters");
        }

        result
    }
}

pub struct LoginValidator;

impl Validator<LoginRequest> for LoginValidator {
    fn validate(&self, data: &LoginRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.email.trim().is_empty() {
            result.add_error("email", "Email is required");
        }
        if data.password.is_empty() {
            result.add_error("password", "Password is required");
        }

        result
    }
}
