/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - An optional PostgreSQL connection pool (the external store)
 * - Media storage configuration for uploaded cover images
 *
 * There is no in-process mutable state: every read and mutation goes to
 * the database, and clients re-fetch after mutations. This keeps the
 * server stateless across requests.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. This follows
 * Axum's recommended pattern for state management.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::server::config::MediaConfig;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g., if the
    /// `DATABASE_URL` environment variable is not set). Handlers answer
    /// 503 Service Unavailable in that case.
    pub db_pool: Option<PgPool>,

    /// Media storage configuration for uploaded cover images
    pub media: MediaConfig,
}

/// Implement FromRef for Option<PgPool>
///
/// This allows Axum handlers to extract the optional database pool
/// directly from `AppState` with `State(pool): State<Option<PgPool>>`.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for MediaConfig
///
/// This allows the upload handler to extract the media configuration
/// directly from `AppState`.
impl FromRef<AppState> for MediaConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.media.clone()
    }
}
