//! Backend Module
//!
//! This module contains all server-side code for the DevLog application:
//! an Axum HTTP server over a PostgreSQL store, with JWT authentication
//! and local media storage.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication, JWT tokens, user management
//! - **`posts`** - Post model, feed queries, post likes
//! - **`discussion`** - Comment aggregation, comment likes
//! - **`categories`** - Category model and listing
//! - **`media`** - Cover-image upload and storage
//! - **`middleware`** - Authentication extractors
//! - **`error`** - Backend-specific error types
//!
//! # State Management
//!
//! Shared state (`AppState`) carries the optional database pool and the
//! media storage configuration. Handlers extract the parts they need via
//! `FromRef`. When the database is not configured the server stays up and
//! store-dependent endpoints answer 503.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware and extractors for request processing
pub mod middleware;

/// Post model, feed queries, and post likes
pub mod posts;

/// Comment discussion aggregation and comment likes
pub mod discussion;

/// Category model and listing
pub mod categories;

/// Cover-image upload and storage
pub mod media;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::state::AppState;
