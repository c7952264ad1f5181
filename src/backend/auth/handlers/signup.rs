/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email format, and password length
 * 2. Check if user already exists
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Generate JWT token
 * 6. Return token and user info
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never returned in responses
 * - JWT tokens are generated with 30-day expiration
 */

use axum::{
    extract::State,
    response::Json,
};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::backend::error::BackendError;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    // Rest can be alphanumeric or underscore
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Sign up handler
///
/// Validates the input, creates a new user account, and returns a JWT
/// token for immediate authentication.
///
/// # Errors
///
/// * `400 Bad Request` - invalid username, email, or password
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - hashing, user creation, or token failure
pub async fn signup(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;
    tracing::info!("Signup request for username: {}", request.username);

    if !is_valid_username(&request.username) {
        return Err(BackendError::validation(
            "username",
            "must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    // Basic email shape check
    if !request.email.contains('@') {
        return Err(BackendError::validation("email", "invalid email format"));
    }

    if request.password.len() < 8 {
        return Err(BackendError::validation(
            "password",
            "must be at least 8 characters",
        ));
    }

    if get_user_by_username(&pool, &request.username).await?.is_some() {
        return Err(BackendError::validation("username", "already taken"));
    }

    if get_user_by_email(&pool, &request.email).await?.is_some() {
        return Err(BackendError::validation("email", "already registered"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::Io(std::io::Error::other(e.to_string()))
    })?;

    let user = create_user(
        &pool,
        request.username.clone(),
        request.email.clone(),
        password_hash,
        request.display_name.clone(),
    )
    .await?;

    let token = create_token(user.id, user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::Io(std::io::Error::other(e.to_string()))
    })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("a_b_c_123"));
        assert!(is_valid_username("Writer99"));
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("1starts_with_digit"));
        assert!(!is_valid_username("_underscore_first"));
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username(&"x".repeat(31)));
    }
}
