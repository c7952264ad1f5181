/**
 * Profile Update Handler
 *
 * This module implements the handler for PUT /api/auth/profile, which
 * updates the authenticated viewer's public profile fields.
 */

use axum::{
    extract::State,
    response::Json,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::update_profile;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Profile update request
///
/// Both fields are written as given; sending `null` clears a field.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Update profile handler
///
/// Overwrites the viewer's display name and avatar URL and returns the
/// updated profile.
///
/// # Errors
///
/// * `401 Unauthorized` - Authorization header missing or token invalid
/// * `503 Service Unavailable` - database not configured
pub async fn put_profile(
    State(pool): State<Option<PgPool>>,
    AuthUser(viewer): AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;

    let display_name = request
        .display_name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let user = update_profile(&pool, viewer.user_id, display_name, request.avatar_url).await?;
    tracing::info!("Profile updated for user {}", user.username);

    Ok(Json(user.into()))
}
