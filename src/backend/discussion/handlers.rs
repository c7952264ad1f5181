//! Discussion HTTP Handlers
//!
//! This module contains the HTTP handlers for the discussion endpoints:
//! fetching a post's assembled discussion, posting comments and replies,
//! toggling comment likes, and deleting comments.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::discussion::{self, DiscussionView};
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, MaybeAuthUser};

use super::db;

/// Request body for posting a comment or reply
#[derive(Debug, Deserialize)]
pub struct PostCommentRequest {
    /// Comment text; rejected if empty after trimming
    pub content: String,
    /// Parent comment for replies; must be a top-level comment on the
    /// same post
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

/// Response for a newly created comment
#[derive(Debug, Serialize)]
pub struct PostCommentResponse {
    pub id: Uuid,
}

/// Response for a like toggle
#[derive(Debug, Serialize)]
pub struct ToggleLikeResponse {
    /// Whether the viewer likes the comment after the toggle
    pub liked: bool,
    /// Like count after the toggle
    pub like_count: i64,
}

/// GET /api/posts/{post_id}/discussion
///
/// Returns the assembled discussion. Anonymous visitors get
/// `liked_by_viewer: false` on every comment.
pub async fn get_discussion(
    State(pool): State<Option<PgPool>>,
    MaybeAuthUser(viewer): MaybeAuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<DiscussionView>, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;
    let viewer_id = viewer.map(|v| v.user_id);

    let view = discussion::load_discussion(&pool, post_id, viewer_id).await?;
    Ok(Json(view))
}

/// POST /api/posts/{post_id}/comments
///
/// Requires authentication. Returns the new comment's ID; clients
/// re-fetch the discussion to render it.
pub async fn create_comment(
    State(pool): State<Option<PgPool>>,
    AuthUser(viewer): AuthUser,
    Path(post_id): Path<Uuid>,
    Json(request): Json<PostCommentRequest>,
) -> Result<Json<PostCommentResponse>, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;

    let id = discussion::post_comment(
        &pool,
        post_id,
        viewer.user_id,
        &request.content,
        request.parent_id,
    )
    .await?;

    Ok(Json(PostCommentResponse { id }))
}

/// POST /api/comments/{comment_id}/like
///
/// Requires authentication. Toggles the viewer's like and reports the
/// resulting state and count.
pub async fn toggle_like(
    State(pool): State<Option<PgPool>>,
    AuthUser(viewer): AuthUser,
    Path(comment_id): Path<Uuid>,
) -> Result<Json<ToggleLikeResponse>, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;

    let liked = discussion::toggle_comment_like(&pool, comment_id, viewer.user_id).await?;
    let like_count = db::count_comment_likes(&pool, comment_id).await?;

    Ok(Json(ToggleLikeResponse { liked, like_count }))
}

/// DELETE /api/comments/{comment_id}
///
/// Requires authentication; only the author may delete. Replies to the
/// deleted comment orphan and stop rendering.
pub async fn delete_comment(
    State(pool): State<Option<PgPool>>,
    AuthUser(viewer): AuthUser,
    Path(comment_id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;

    discussion::delete_comment(&pool, comment_id, viewer.user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
