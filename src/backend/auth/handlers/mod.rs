//! Authentication HTTP Handlers
//!
//! Handlers for the authentication endpoints.

/// Request/response types
pub mod types;

/// User registration handler
pub mod signup;

/// User authentication handler
pub mod login;

/// Current user handler
pub mod me;

/// Profile update handler
pub mod profile;

pub use login::login;
pub use me::get_me;
pub use profile::put_profile;
pub use signup::signup;
