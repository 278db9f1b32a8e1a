//! Authentication handlers

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::common::{generate_user_id, safe_email_log, ApiError, AppState, Validator};

use super::extractors::AuthedUser;
use super::models::{Claims, LoginRequest, RegisterRequest, User};
use super::password::{hash_password, verify_password};
use super::validators::{LoginValidator, RegisterValidator};

/// POST /api/register
/// Creates a new user account with a salted password hash
pub async fn register_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let validation = RegisterValidator.validate(&payload);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let state = state_lock.read().await.clone();
    let email = payload.email.trim().to_lowercase();

    let user_id = generate_user_id();
    let password_hash = hash_password(&payload.password);

    let insert = sqlx::query(
        r#"
        INSERT INTO users (id, name, email, password_hash)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&user_id)
    .bind(payload.name.trim())
    .bind(&email)
    .bind(&password_hash)
    .execute(&state.db)
    .await;

    match insert {
        Ok(_) => {
            info!(
                user_id = %user_id,
                email = %safe_email_log(&email),
                "New user account created"
            );
            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "message": "User registered",
                    "user_id": user_id,
                })),
            ))
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            warn!(email = %safe_email_log(&email), "Registration rejected: email already exists");
            Err(ApiError::Conflict("Email already exists".to_string()))
        }
        Err(e) => {
            error!(error = %e, "Database error during registration");
            Err(ApiError::DatabaseError(e))
        }
    }
}

/// POST /api/login
/// Verifies credentials and issues a 24h JWT
pub async fn login_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let validation = LoginValidator.validate(&payload);
    if !validation.is_valid {
        return Err(validation.into());
    }

    let state = state_lock.read().await.clone();
    let email = payload.email.trim().to_lowercase();

    let user: Option<User> = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    // One rejection path for both unknown email and wrong password:
    // the response must not reveal which field failed
    let user = match user {
        Some(u) if verify_password(&payload.password, &u.password_hash) => u,
        _ => {
            warn!(email = %safe_email_log(&email), "Login failed: invalid credentials");
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }
    };

    // create JWT
    let exp = (Utc::now() + Duration::hours(24)).timestamp() as usize;
    let claims = Claims {
        sub: user.id.clone(),
        exp,
    };
    let token = match encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(state.jwt_secret.as_bytes()),
    ) {
        Ok(t) => t,
        Err(e) => {
            error!(error = %e, user_id = %user.id, "JWT encoding error during login");
            return Err(ApiError::InternalServer("jwt error".to_string()));
        }
    };

    info!(
        user_id = %user.id,
        email = %safe_email_log(&user.email),
        "User login successful"
    );

    Ok(Json(json!({
        "message": "Login successful",
        "token": token,
        "user": {
            "user_id": user.id,
            "name": user.name,
            "email": user.email,
        },
    })))
}

/// POST /api/logout
/// Logout is handled client-side by discarding the JWT; this endpoint just
/// acknowledges the request
pub async fn logout_handler(_authed: AuthedUser) -> Result<Json<serde_json::Value>, ApiError> {
    info!("User logout successful");
    Ok(Json(json!({
        "message": "Logged out"
    })))
}

/// GET /api/me
/// Returns the current authenticated user's information
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(&authed.id)
        .fetch_one(&state.db)
        .await
        .map_err(ApiError::DatabaseError)?;

    Ok(Json(json!({
        "user": {
            "user_id": user.id,
            "name": user.name,
            "email": user.email,
            "created_at": user.created_at,
        },
    })))
}
