/**
 * Authentication Extractors
 *
 * This module provides Axum extractors for identifying the current viewer
 * from the `Authorization: Bearer <token>` header.
 *
 * Two variants exist because the application distinguishes between
 * endpoints that require a viewer (all mutations) and endpoints that merely
 * personalize their output when a viewer is present (discussion and post
 * reads, which report liked-by-viewer state):
 *
 * - `AuthUser` - rejects with 401 when no valid token is present
 * - `MaybeAuthUser` - yields `None` for anonymous visitors; an invalid or
 *   malformed token still rejects with 401 rather than silently degrading
 *   to anonymous
 *
 * The viewer is always an explicit value handed to the data layer, never
 * ambient state.
 */

use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated viewer data extracted from a JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Parse and verify the Authorization header, if present
///
/// Returns `Ok(None)` when the header is absent, `Err(NotAuthenticated)`
/// when it is present but malformed or carries an invalid token.
fn viewer_from_parts(parts: &Parts) -> Result<Option<AuthenticatedUser>, BackendError> {
    let auth_header = match parts.headers.get(AUTHORIZATION) {
        Some(value) => value.to_str().map_err(|_| {
            tracing::warn!("Non-ASCII Authorization header");
            BackendError::NotAuthenticated
        })?,
        None => return Ok(None),
    };

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::NotAuthenticated
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::NotAuthenticated
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        BackendError::NotAuthenticated
    })?;

    Ok(Some(AuthenticatedUser {
        user_id,
        email: claims.email,
    }))
}

/// Axum extractor for a required authenticated viewer
///
/// Use on every mutating endpoint. Rejects with 401 Unauthorized when the
/// Authorization header is missing or invalid; the pending action is
/// discarded, not queued.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match viewer_from_parts(parts)? {
            Some(user) => Ok(AuthUser(user)),
            None => {
                tracing::warn!("Missing Authorization header");
                Err(BackendError::NotAuthenticated)
            }
        }
    }
}

/// Axum extractor for an optional viewer
///
/// Use on read endpoints whose output is personalized when a viewer is
/// present (e.g. liked-by-viewer flags). Anonymous visitors extract as
/// `MaybeAuthUser(None)`.
#[derive(Clone, Debug)]
pub struct MaybeAuthUser(pub Option<AuthenticatedUser>);

impl axum::extract::FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(viewer_from_parts(parts)?))
    }
}
