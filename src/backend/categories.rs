//! Categories Module
//!
//! Categories are a small fixed vocabulary managed through migrations;
//! there is no write API. The feed filters on the slug.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::BackendError;

/// A post category
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// URL-safe identifier used by the feed's category filter
    pub slug: String,
}

/// List all categories, ordered by name
pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name, slug FROM categories ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// GET /api/categories
pub async fn get_categories(
    State(pool): State<Option<PgPool>>,
) -> Result<Json<Vec<Category>>, BackendError> {
    let pool = pool.ok_or(BackendError::StoreUnavailable)?;
    let categories = list_categories(&pool).await?;
    Ok(Json(categories))
}
