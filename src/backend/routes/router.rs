/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * Routes are added in a specific order to ensure proper matching:
 * 1. API routes (auth, posts, discussion, categories, media)
 * 2. Static file serving for uploaded media
 * 3. Fallback handler (404)
 */

use axum::Router;
use tower_http::services::ServeDir;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// API routes are registered first, then the media root is mounted under
/// its public URL prefix so uploaded cover images are served back, and
/// finally a fallback answers 404 for everything else.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    // Serve uploaded media below the configured public prefix
    let router = router.nest_service(
        &app_state.media.public_base,
        ServeDir::new(&app_state.media.root),
    );

    let router = router.fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") });

    router.with_state(app_state)
}
