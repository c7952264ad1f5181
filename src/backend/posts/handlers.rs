//! Post HTTP Handlers
//!
//! Feed listing with category filter, search, and pagination; post detail;
//! post CRUD (author-only for edits); post like toggle.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::discussion::AuthorProfile;
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, MaybeAuthUser};
use crate::backend::posts::{reading_time_minutes, PostStatus};

use super::db::{self, PostDraft, PostRecord};

/// Feed page size
const POSTS_PER_PAGE: i64 = 6;

/// Query parameters for GET /api/posts
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    /// 1-based page number; defaults to 1
    #[serde(default)]
    pub page: Option<u32>,
    /// Category slug filter
    #[serde(default)]
    pub category: Option<String>,
    /// Free-text search over title and body
    #[serde(default)]
    pub q: Option<String>,
}

/// Category fields shown on a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub slug: String,
}

/// A post as rendered in the feed (no body)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub cover_image: Option<String>,
    pub reading_time_minutes: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub author: AuthorProfile,
    pub category: Option<CategoryRef>,
}

impl PostSummary {
    fn from_record(record: PostRecord) -> Self {
        let category = match (record.category_name, record.category_slug) {
            (Some(name), Some(slug)) => Some(CategoryRef { name, slug }),
            _ => None,
        };
        Self {
            id: record.id,
            title: record.title,
            summary: record.summary,
            cover_image: record.cover_image,
            reading_time_minutes: record.reading_time_minutes,
            published_at: record.published_at,
            author: AuthorProfile {
                display_name: record.author_display_name,
                avatar_url: record.author_avatar_url,
            },
            category,
        }
    }
}

/// One page of the feed
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub posts: Vec<PostSummary>,
    pub page: u32,
    pub total_pages: u32,
    pub total_count: i64,
}

/// A full post as rendered on its own page
#[derive(Debug, Serialize)]
pub struct PostDetail {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub status: PostStatus,
    pub reading_time_minutes: i32,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: AuthorProfile,
    pub category: Option<CategoryRef>,
    pub like_count: i64,
    pub liked_by_viewer: bool,
    pub comment_count: i64,
}

/// Request body for creating or updating a post
#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub status: PostStatus,
}

/// Response for a newly created post
#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub id: Uuid,
}

/// Response for a post like toggle
#[derive(Debug, Serialize)]
pub struct TogglePostLikeResponse {
    pub liked: bool,
    pub like_count: i64,
}

/// Parse a status string coming back from the store
///
/// Only 'draft' and 'published' are ever written; anything else is corrupt
/// data and is reported as a store error rather than rendered as a draft.
fn stored_status(status: &str) -> Result<PostStatus, BackendError> {
    PostStatus::from_str(status).ok_or_else(|| {
        BackendError::Database(sqlx::Error::Decode(
            format!("unrecognized post status '{status}'").into(),
        ))
    })
}

fn validate_post_request(request: &PostRequest) -> Result<(), BackendError> {
    if request.title.trim().is_empty() {
        return Err(BackendError::validation("title", "must not be empty"));
    }
    if request.content.trim().is_empty() {
        return Err(BackendError::validation("content", "must not be empty"));
    }
    Ok(())
}

/// Build the stored draft from a request
///
/// `published_at` is stamped on first publication and preserved on later
/// edits; moving a post back to draft clears it.
fn build_draft(request: &PostRequest, existing_published_at: Option<DateTime<Utc>>) -> PostDraft {
    let published_at = match request.status {
        PostStatus::Published => existing_published_at.or_else(|| Some(Utc::now())),
        PostStatus::Draft => None,
    };

    PostDraft {
        category_id: request.category_id,
        title: request.title.trim().to_string(),
        summary: request.summary.trim().to_string(),
        content: request.content.clone(),
        cover_image: request.cover_image.clone(),
        status: request.status.as_str().to_string(),
        reading_time_minutes: reading_time_minutes(&request.content),
        published_at,
    }
}

/// GET /api/posts
///
/// Public feed of published posts, newest first, six per page.
pub async fn list_posts(
    State(pool): State<Option<PgPool>>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<FeedResponse>, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;

    let page = query.page.unwrap_or(1).max(1);
    let offset = (page as i64 - 1) * POSTS_PER_PAGE;
    let category = query.category.as_deref().filter(|s| !s.is_empty());
    let search = query.q.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let records = db::list_published(&pool, category, search, POSTS_PER_PAGE, offset).await?;
    let total_count = db::count_published(&pool, category, search).await?;
    let total_pages = ((total_count + POSTS_PER_PAGE - 1) / POSTS_PER_PAGE).max(1) as u32;

    Ok(Json(FeedResponse {
        posts: records.into_iter().map(PostSummary::from_record).collect(),
        page,
        total_pages,
        total_count,
    }))
}

/// GET /api/posts/{post_id}
///
/// Published posts are public; a draft is visible only to its author.
pub async fn get_post(
    State(pool): State<Option<PgPool>>,
    MaybeAuthUser(viewer): MaybeAuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostDetail>, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;

    let record = db::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post"))?;

    let viewer_id = viewer.map(|v| v.user_id);
    if record.status != PostStatus::Published.as_str() && viewer_id != Some(record.author_id) {
        return Err(BackendError::not_found("Post"));
    }

    let like_count = db::count_post_likes(&pool, post_id).await?;
    let liked_by_viewer = match viewer_id {
        Some(viewer) => db::has_post_like(&pool, post_id, viewer).await?,
        None => false,
    };
    let comment_count = db::count_comments(&pool, post_id).await?;

    let status = stored_status(&record.status)?;
    let category = match (record.category_name, record.category_slug) {
        (Some(name), Some(slug)) => Some(CategoryRef { name, slug }),
        _ => None,
    };

    Ok(Json(PostDetail {
        id: record.id,
        author_id: record.author_id,
        title: record.title,
        summary: record.summary,
        content: record.content,
        cover_image: record.cover_image,
        status,
        reading_time_minutes: record.reading_time_minutes,
        published_at: record.published_at,
        created_at: record.created_at,
        updated_at: record.updated_at,
        author: AuthorProfile {
            display_name: record.author_display_name,
            avatar_url: record.author_avatar_url,
        },
        category,
        like_count,
        liked_by_viewer,
        comment_count,
    }))
}

/// POST /api/posts
///
/// Requires authentication. Creates a draft or publishes directly.
pub async fn create_post(
    State(pool): State<Option<PgPool>>,
    AuthUser(viewer): AuthUser,
    Json(request): Json<PostRequest>,
) -> Result<Json<CreatePostResponse>, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;
    validate_post_request(&request)?;

    let draft = build_draft(&request, None);
    let id = db::insert_post(&pool, viewer.user_id, &draft).await?;
    tracing::info!("Post {} created by {} ({})", id, viewer.user_id, draft.status);

    Ok(Json(CreatePostResponse { id }))
}

/// PUT /api/posts/{post_id}
///
/// Requires authentication; only the author may edit.
pub async fn update_post(
    State(pool): State<Option<PgPool>>,
    AuthUser(viewer): AuthUser,
    Path(post_id): Path<Uuid>,
    Json(request): Json<PostRequest>,
) -> Result<StatusCode, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;

    let existing = db::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post"))?;
    if existing.author_id != viewer.user_id {
        return Err(BackendError::forbidden("only the author can edit a post"));
    }

    validate_post_request(&request)?;
    let draft = build_draft(&request, existing.published_at);
    db::update_post(&pool, post_id, &draft).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/posts/{post_id}
///
/// Requires authentication; only the author may delete. Comments on the
/// post are removed with it.
pub async fn delete_post(
    State(pool): State<Option<PgPool>>,
    AuthUser(viewer): AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;

    let existing = db::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post"))?;
    if existing.author_id != viewer.user_id {
        return Err(BackendError::forbidden("only the author can delete a post"));
    }

    db::delete_post(&pool, post_id).await?;
    tracing::info!("Post {} deleted by {}", post_id, viewer.user_id);

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/posts/{post_id}/like
///
/// Requires authentication. Toggles the viewer's like and reports the
/// resulting state and count.
pub async fn toggle_post_like(
    State(pool): State<Option<PgPool>>,
    AuthUser(viewer): AuthUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<TogglePostLikeResponse>, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;

    db::get_post(&pool, post_id)
        .await?
        .ok_or_else(|| BackendError::not_found("Post"))?;

    let liked = if db::has_post_like(&pool, post_id, viewer.user_id).await? {
        db::delete_post_like(&pool, post_id, viewer.user_id).await?;
        false
    } else {
        db::insert_post_like(&pool, post_id, viewer.user_id).await?;
        true
    };
    let like_count = db::count_post_likes(&pool, post_id).await?;

    Ok(Json(TogglePostLikeResponse { liked, like_count }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: PostStatus) -> PostRequest {
        PostRequest {
            title: "A title".to_string(),
            summary: "".to_string(),
            content: "some body text".to_string(),
            category_id: None,
            cover_image: None,
            status,
        }
    }

    #[test]
    fn test_stored_status_rejects_unknown_values() {
        assert_eq!(stored_status("published").unwrap(), PostStatus::Published);
        assert_eq!(stored_status("draft").unwrap(), PostStatus::Draft);

        let err = stored_status("archived").expect_err("unknown status");
        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validate_rejects_blank_title_and_content() {
        let mut r = request(PostStatus::Draft);
        r.title = "   ".to_string();
        assert!(validate_post_request(&r).is_err());

        let mut r = request(PostStatus::Draft);
        r.content = "".to_string();
        assert!(validate_post_request(&r).is_err());

        assert!(validate_post_request(&request(PostStatus::Draft)).is_ok());
    }

    #[test]
    fn test_publishing_stamps_published_at_once() {
        let draft = build_draft(&request(PostStatus::Published), None);
        assert!(draft.published_at.is_some());

        let original = draft.published_at;
        let edited = build_draft(&request(PostStatus::Published), original);
        assert_eq!(edited.published_at, original);
    }

    #[test]
    fn test_unpublishing_clears_published_at() {
        let first = build_draft(&request(PostStatus::Published), None);
        let back_to_draft = build_draft(&request(PostStatus::Draft), first.published_at);
        assert!(back_to_draft.published_at.is_none());
    }
}
