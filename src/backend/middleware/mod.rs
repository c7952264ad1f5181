//! Middleware Module
//!
//! Request-processing extractors, currently authentication only.

/// Authentication extractors
pub mod auth;

pub use auth::{AuthUser, AuthenticatedUser, MaybeAuthUser};
