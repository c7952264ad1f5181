//! Discussion Module
//!
//! This module implements the discussion view of a post: all comments with
//! their like counts and the current viewer's like state, partitioned into
//! top-level threads and reply groups, plus the comment and comment-like
//! mutations.
//!
//! # Module Structure
//!
//! ```text
//! discussion/
//! ├── mod.rs        - Operations (load/post/toggle-like/delete)
//! ├── db.rs         - Database operations for comments and likes
//! ├── aggregate.rs  - Pure thread-assembly logic and view types
//! └── handlers.rs   - HTTP handlers
//! ```
//!
//! # Consistency Model
//!
//! After any mutation, callers observe the new state by calling
//! [`load_discussion`] again; mutations return only identifiers or toggle
//! results, never an incrementally patched view.

use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::BackendError;

/// Database operations for comments and likes
pub mod db;

/// Thread assembly and view types
pub mod aggregate;

/// HTTP handlers
pub mod handlers;

pub use aggregate::{AuthorProfile, CommentThread, CommentView, DiscussionView};

/// Validate a comment body
///
/// Rejects empty and whitespace-only bodies before any store call and
/// returns the trimmed text that gets persisted.
pub fn validate_comment_body(body: &str) -> Result<&str, BackendError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(BackendError::validation("content", "must not be empty"));
    }
    Ok(trimmed)
}

/// Load the full discussion for a post
///
/// Fetches every comment on the post (newest first, joined with author
/// public fields), annotates each with its like count and - when a viewer
/// is present - the viewer's like state, then assembles threads: top-level
/// comments in store order, reply groups re-ordered oldest first. Replies
/// whose parent has been deleted are counted but not rendered.
pub async fn load_discussion(
    pool: &PgPool,
    post_id: Uuid,
    viewer_id: Option<Uuid>,
) -> Result<DiscussionView, BackendError> {
    let records = db::list_comments_for_post(pool, post_id).await?;

    let mut views = Vec::with_capacity(records.len());
    for record in records {
        let like_count = db::count_comment_likes(pool, record.id).await?;
        let liked_by_viewer = match viewer_id {
            Some(viewer) => db::has_comment_like(pool, record.id, viewer).await?,
            None => false,
        };
        views.push(CommentView::from_record(record, like_count, liked_by_viewer));
    }

    let comment_count = views.len();
    let threads = aggregate::assemble_threads(views);

    Ok(DiscussionView {
        post_id,
        comment_count,
        threads,
    })
}

/// Append a new comment (or reply) to a post's discussion
///
/// The body must be non-empty after trimming. A reply's parent must exist,
/// must belong to the same post, and must itself be a top-level comment -
/// nesting depth is exactly one level and is enforced here at write time,
/// not flattened later by the read path.
///
/// Returns the new comment's ID. Callers re-run [`load_discussion`] to
/// observe it.
pub async fn post_comment(
    pool: &PgPool,
    post_id: Uuid,
    author_id: Uuid,
    body: &str,
    parent_id: Option<Uuid>,
) -> Result<Uuid, BackendError> {
    let content = validate_comment_body(body)?;

    if let Some(parent) = parent_id {
        let parent_comment = db::get_comment(pool, parent)
            .await?
            .ok_or_else(|| BackendError::validation("parent_id", "parent comment does not exist"))?;

        if parent_comment.post_id != post_id {
            return Err(BackendError::validation(
                "parent_id",
                "parent comment belongs to a different post",
            ));
        }

        if parent_comment.parent_id.is_some() {
            return Err(BackendError::validation(
                "parent_id",
                "replies to replies are not allowed",
            ));
        }
    }

    let id = db::insert_comment(pool, post_id, author_id, content, parent_id).await?;
    tracing::debug!("Comment {} added to post {}", id, post_id);

    Ok(id)
}

/// Toggle the viewer's like on a comment
///
/// Deletes the like if one exists, inserts it otherwise, and returns the
/// resulting liked state. Duplicate inserts from concurrent toggles are
/// absorbed by the store-side uniqueness constraint, not by this
/// read-then-act sequence.
pub async fn toggle_comment_like(
    pool: &PgPool,
    comment_id: Uuid,
    viewer_id: Uuid,
) -> Result<bool, BackendError> {
    db::get_comment(pool, comment_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Comment"))?;

    let liked = db::has_comment_like(pool, comment_id, viewer_id).await?;
    if liked {
        db::delete_comment_like(pool, comment_id, viewer_id).await?;
        Ok(false)
    } else {
        db::insert_comment_like(pool, comment_id, viewer_id).await?;
        Ok(true)
    }
}

/// Delete a comment
///
/// Only the comment's author may delete it. Deletion does not cascade to
/// replies; they orphan and stop rendering (see `aggregate`).
pub async fn delete_comment(
    pool: &PgPool,
    comment_id: Uuid,
    requester_id: Uuid,
) -> Result<(), BackendError> {
    let comment = db::get_comment(pool, comment_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Comment"))?;

    if comment.user_id != requester_id {
        return Err(BackendError::forbidden("only the author can delete a comment"));
    }

    db::delete_comment(pool, comment_id).await?;
    tracing::debug!("Comment {} deleted", comment_id);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_comment_body_trims() {
        assert_eq!(validate_comment_body("  hello  ").unwrap(), "hello");
    }

    #[test]
    fn test_validate_comment_body_rejects_empty() {
        assert!(validate_comment_body("").is_err());
        assert!(validate_comment_body("   \t\n ").is_err());
    }
}
