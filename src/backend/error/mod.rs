//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Taxonomy
//!
//! - `Validation` - bad input, rejected before any store call (400)
//! - `NotAuthenticated` - mutating action with no viewer (401)
//! - `Forbidden` - viewer not permitted, e.g. non-author delete (403)
//! - `NotFound` - referenced entity missing (404)
//! - `StoreUnavailable` - database not configured (503)
//! - `Database` / `Io` - internal failures (500)
//!
//! All backend errors implement `IntoResponse`, allowing them to be returned
//! directly from handlers as JSON error responses.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
