/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration:
 * the optional PostgreSQL database connection and media storage paths.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible defaults
 * for local development when possible:
 *
 * - `DATABASE_URL` - PostgreSQL connection string (optional)
 * - `MEDIA_ROOT` - directory for uploaded files (default: `media`)
 * - `JWT_SECRET` - session token secret (read in `auth::sessions`)
 * - `SERVER_PORT` - listen port (read in `main`)
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * If the database fails to initialize the pool is set to `None` and
 * store-dependent endpoints answer 503.
 */

use sqlx::PgPool;
use std::path::PathBuf;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Media storage configuration
///
/// Uploaded cover images are written below `root` and served under the
/// `public_base` URL prefix by the static-file route.
#[derive(Clone, Debug)]
pub struct MediaConfig {
    /// Filesystem directory that receives uploads
    pub root: PathBuf,
    /// URL prefix under which `root` is served
    pub public_base: String,
}

impl MediaConfig {
    /// Load media configuration from the environment
    pub fn from_env() -> Self {
        let root = std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string());
        Self {
            root: PathBuf::from(root),
            public_base: "/media".to_string(),
        }
    }
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
///
/// # Errors
///
/// Errors are logged but do not prevent server startup. The function
/// returns `None` on any error, allowing the server to run with
/// store-dependent endpoints answering 503.
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Store-dependent endpoints will answer 503.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Store-dependent endpoints will answer 503.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
