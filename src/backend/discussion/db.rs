//! Database operations for discussions
//!
//! This module contains database operations for comments and comment likes.
//! Ordering from the store is always descending by creation time; the read
//! path in `aggregate` re-orders reply groups.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// A comment row joined with its author's public display fields
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRecord {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_display_name: Option<String>,
    pub author_avatar_url: Option<String>,
}

/// List all comments on a post, newest first, joined with author fields
pub async fn list_comments_for_post(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Vec<CommentRecord>, sqlx::Error> {
    sqlx::query_as::<_, CommentRecord>(
        r#"
        SELECT c.id, c.post_id, c.user_id, c.parent_id, c.content, c.created_at,
               u.display_name AS author_display_name,
               u.avatar_url AS author_avatar_url
        FROM comments c
        INNER JOIN users u ON u.id = c.user_id
        WHERE c.post_id = $1
        ORDER BY c.created_at DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// Get a single comment by ID
pub async fn get_comment(
    pool: &PgPool,
    comment_id: Uuid,
) -> Result<Option<CommentRecord>, sqlx::Error> {
    sqlx::query_as::<_, CommentRecord>(
        r#"
        SELECT c.id, c.post_id, c.user_id, c.parent_id, c.content, c.created_at,
               u.display_name AS author_display_name,
               u.avatar_url AS author_avatar_url
        FROM comments c
        INNER JOIN users u ON u.id = c.user_id
        WHERE c.id = $1
        "#,
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await
}

/// Insert a new comment and return its ID
pub async fn insert_comment(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
    content: &str,
    parent_id: Option<Uuid>,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO comments (id, post_id, user_id, parent_id, content, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(id)
    .bind(post_id)
    .bind(user_id)
    .bind(parent_id)
    .bind(content)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Delete a comment
///
/// Replies to the deleted comment are left in place; they become orphans
/// and drop out of the assembled thread list on the next read.
pub async fn delete_comment(pool: &PgPool, comment_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM comments WHERE id = $1
        "#,
    )
    .bind(comment_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Count likes on a comment
pub async fn count_comment_likes(pool: &PgPool, comment_id: Uuid) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) AS count FROM comment_likes WHERE comment_id = $1
        "#,
    )
    .bind(comment_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get("count"))
}

/// Check whether a like exists for (comment, user)
pub async fn has_comment_like(
    pool: &PgPool,
    comment_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM comment_likes WHERE comment_id = $1 AND user_id = $2
        ) AS liked
        "#,
    )
    .bind(comment_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get("liked"))
}

/// Insert a like for (comment, user)
///
/// The composite primary key is the enforcement point for at-most-one like
/// per (comment, user); concurrent inserts collapse into one row.
pub async fn insert_comment_like(
    pool: &PgPool,
    comment_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO comment_likes (comment_id, user_id, created_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (comment_id, user_id) DO NOTHING
        "#,
    )
    .bind(comment_id)
    .bind(user_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete the like for (comment, user), if any
pub async fn delete_comment_like(
    pool: &PgPool,
    comment_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM comment_likes WHERE comment_id = $1 AND user_id = $2
        "#,
    )
    .bind(comment_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}
