/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load media storage configuration and ensure the upload directory exists
 * 2. Load optional services (database pool, migrations)
 * 3. Create the application state
 * 4. Create and configure the router
 *
 * # Error Handling
 *
 * The function is designed to be resilient:
 * - Missing database: server continues, store endpoints answer 503
 * - Migration failures: logged but don't prevent startup
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, MediaConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing DevLog backend server");

    // Step 1: Media storage
    let media = MediaConfig::from_env();
    if let Err(e) = tokio::fs::create_dir_all(&media.root).await {
        tracing::warn!("Failed to create media root {:?}: {:?}", media.root, e);
    }

    // Step 2: Load optional services
    let db_pool = load_database().await;

    // Step 3: Create app state
    let app_state = AppState { db_pool, media };

    // Step 4: Create router with all routes
    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
