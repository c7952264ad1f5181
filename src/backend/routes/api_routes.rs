/**
 * API Route Handlers
 *
 * This module wires the API endpoints to their handlers:
 * - Authentication (signup, login, current user)
 * - Posts (feed, CRUD, likes)
 * - Discussion (threads, comments, comment likes)
 * - Categories and media uploads
 */

use axum::extract::DefaultBodyLimit;
use axum::Router;

use crate::backend::auth::{get_me, login, put_profile, signup};
use crate::backend::categories::get_categories;
use crate::backend::discussion::handlers as discussion_handlers;
use crate::backend::media::{upload_image, UPLOAD_BODY_LIMIT};
use crate::backend::posts::handlers as post_handlers;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Authentication requirements are enforced per-handler through the
/// `AuthUser` / `MaybeAuthUser` extractors, not at the routing layer.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/signup", axum::routing::post(signup))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/me", axum::routing::get(get_me))
        .route("/api/auth/profile", axum::routing::put(put_profile))
        // Post feed and CRUD
        .route(
            "/api/posts",
            axum::routing::get(post_handlers::list_posts).post(post_handlers::create_post),
        )
        .route(
            "/api/posts/{post_id}",
            axum::routing::get(post_handlers::get_post)
                .put(post_handlers::update_post)
                .delete(post_handlers::delete_post),
        )
        .route(
            "/api/posts/{post_id}/like",
            axum::routing::post(post_handlers::toggle_post_like),
        )
        // Discussion endpoints
        .route(
            "/api/posts/{post_id}/discussion",
            axum::routing::get(discussion_handlers::get_discussion),
        )
        .route(
            "/api/posts/{post_id}/comments",
            axum::routing::post(discussion_handlers::create_comment),
        )
        .route(
            "/api/comments/{comment_id}/like",
            axum::routing::post(discussion_handlers::toggle_like),
        )
        .route(
            "/api/comments/{comment_id}",
            axum::routing::delete(discussion_handlers::delete_comment),
        )
        // Categories
        .route("/api/categories", axum::routing::get(get_categories))
        // Media uploads; the route-level body limit must sit above the
        // handler's per-file cap or the cap can never be reached
        .route(
            "/api/media",
            axum::routing::post(upload_image).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
}
