//! Database operations for posts
//!
//! Feed queries select published posts only and join author and category
//! fields in one pass. Category filter and search are optional and folded
//! into the same statement via NULL-tolerant predicates.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// A post row joined with author and category display fields
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRecord {
    pub id: Uuid,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub status: String,
    pub reading_time_minutes: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_display_name: Option<String>,
    pub author_avatar_url: Option<String>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
}

/// Fields written on post create and update
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub category_id: Option<Uuid>,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub status: String,
    pub reading_time_minutes: i32,
    pub published_at: Option<DateTime<Utc>>,
}

const POST_SELECT: &str = r#"
    SELECT p.id, p.author_id, p.category_id, p.title, p.summary, p.content,
           p.cover_image, p.status, p.reading_time_minutes, p.published_at,
           p.created_at, p.updated_at,
           u.display_name AS author_display_name,
           u.avatar_url AS author_avatar_url,
           c.name AS category_name,
           c.slug AS category_slug
    FROM posts p
    INNER JOIN users u ON u.id = p.author_id
    LEFT JOIN categories c ON c.id = p.category_id
"#;

/// List one page of published posts, newest publication first
///
/// `category_slug` and `search` are optional filters; a NULL bind disables
/// the corresponding predicate. Search matches title or body,
/// case-insensitive.
pub async fn list_published(
    pool: &PgPool,
    category_slug: Option<&str>,
    search: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostRecord>, sqlx::Error> {
    let query = format!(
        r#"{POST_SELECT}
        WHERE p.status = 'published'
          AND ($1::text IS NULL OR c.slug = $1)
          AND ($2::text IS NULL OR p.title ILIKE '%' || $2 || '%' OR p.content ILIKE '%' || $2 || '%')
        ORDER BY p.published_at DESC
        LIMIT $3 OFFSET $4
        "#
    );

    sqlx::query_as::<_, PostRecord>(&query)
        .bind(category_slug)
        .bind(search)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

/// Count published posts matching the same filters as [`list_published`]
pub async fn count_published(
    pool: &PgPool,
    category_slug: Option<&str>,
    search: Option<&str>,
) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) AS count
        FROM posts p
        LEFT JOIN categories c ON c.id = p.category_id
        WHERE p.status = 'published'
          AND ($1::text IS NULL OR c.slug = $1)
          AND ($2::text IS NULL OR p.title ILIKE '%' || $2 || '%' OR p.content ILIKE '%' || $2 || '%')
        "#,
    )
    .bind(category_slug)
    .bind(search)
    .fetch_one(pool)
    .await?;

    Ok(row.get("count"))
}

/// Get a single post by ID, any status
pub async fn get_post(pool: &PgPool, post_id: Uuid) -> Result<Option<PostRecord>, sqlx::Error> {
    let query = format!("{POST_SELECT} WHERE p.id = $1");

    sqlx::query_as::<_, PostRecord>(&query)
        .bind(post_id)
        .fetch_optional(pool)
        .await
}

/// Insert a new post and return its ID
pub async fn insert_post(
    pool: &PgPool,
    author_id: Uuid,
    draft: &PostDraft,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO posts (id, author_id, category_id, title, summary, content,
                           cover_image, status, reading_time_minutes, published_at,
                           created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)
        "#,
    )
    .bind(id)
    .bind(author_id)
    .bind(draft.category_id)
    .bind(&draft.title)
    .bind(&draft.summary)
    .bind(&draft.content)
    .bind(&draft.cover_image)
    .bind(&draft.status)
    .bind(draft.reading_time_minutes)
    .bind(draft.published_at)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(id)
}

/// Overwrite a post's editable fields
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    draft: &PostDraft,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET category_id = $2, title = $3, summary = $4, content = $5,
            cover_image = $6, status = $7, reading_time_minutes = $8,
            published_at = $9, updated_at = $10
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .bind(draft.category_id)
    .bind(&draft.title)
    .bind(&draft.summary)
    .bind(&draft.content)
    .bind(&draft.cover_image)
    .bind(&draft.status)
    .bind(draft.reading_time_minutes)
    .bind(draft.published_at)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a post
///
/// Comments on the post cascade in the store; likes cascade through the
/// comment rows.
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM posts WHERE id = $1
        "#,
    )
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Count all comments on a post, orphaned replies included
pub async fn count_comments(pool: &PgPool, post_id: Uuid) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) AS count FROM comments WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get("count"))
}

/// Count likes on a post
pub async fn count_post_likes(pool: &PgPool, post_id: Uuid) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) AS count FROM post_likes WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get("count"))
}

/// Check whether a like exists for (post, user)
pub async fn has_post_like(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM post_likes WHERE post_id = $1 AND user_id = $2
        ) AS liked
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get("liked"))
}

/// Insert a like for (post, user)
///
/// Uniqueness is enforced by the composite primary key; concurrent inserts
/// collapse into one row.
pub async fn insert_post_like(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO post_likes (post_id, user_id, created_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (post_id, user_id) DO NOTHING
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete the like for (post, user), if any
pub async fn delete_post_like(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}
