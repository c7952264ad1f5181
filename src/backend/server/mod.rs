//! Server Module
//!
//! Server setup: configuration loading, application state, and app assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports
//! ├── config.rs  - Environment configuration (database, media)
//! ├── state.rs   - AppState and FromRef implementations
//! └── init.rs    - Application assembly
//! ```

/// Environment configuration
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

pub use init::create_app;
pub use state::AppState;
