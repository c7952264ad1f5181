/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * information about the currently authenticated user.
 */

use axum::{
    extract::State,
    response::Json,
};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Get current user handler
///
/// Returns the authenticated viewer's profile, without sensitive fields.
///
/// # Errors
///
/// * `401 Unauthorized` - Authorization header missing or token invalid
/// * `404 Not Found` - token valid but user no longer exists
/// * `503 Service Unavailable` - database not configured
pub async fn get_me(
    State(pool): State<Option<PgPool>>,
    AuthUser(viewer): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;

    let user = get_user_by_id(&pool, viewer.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("User"))?;

    Ok(Json(user.into()))
}
