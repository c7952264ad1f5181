//! DevLog - Main Library
//!
//! DevLog is a server-rendered blogging platform backend built with Rust:
//! authenticated users write, edit, and publish Markdown posts; readers
//! browse, search, filter by category, like posts, and hold two-tier
//! threaded discussions with per-comment likes.
//!
//! # Module Structure
//!
//! The library is a single `backend` module tree:
//!
//! - **`backend::server`** - Configuration, application state, app assembly
//! - **`backend::routes`** - HTTP route configuration
//! - **`backend::auth`** - Signup/login, JWT sessions, user model
//! - **`backend::posts`** - Post CRUD, feed queries, post likes
//! - **`backend::discussion`** - Comment threads, comment likes (the core
//!   aggregation logic lives in `discussion::aggregate`)
//! - **`backend::categories`** - Category listing
//! - **`backend::media`** - Cover-image uploads
//! - **`backend::middleware`** - Authentication extractors
//! - **`backend::error`** - Error taxonomy and HTTP conversion
//!
//! # Consistency Model
//!
//! Every mutation (posting a comment, toggling a like, deleting a comment)
//! is a terminal request/response call; clients observe the new state by
//! re-fetching the discussion. No push or subscription mechanism exists.
//!
//! # Error Handling
//!
//! All fallible paths return `Result` with the `BackendError` taxonomy in
//! `backend::error`; handlers convert errors to JSON HTTP responses via
//! `IntoResponse`. No operation is automatically retried.

/// Backend server-side code
pub mod backend;
