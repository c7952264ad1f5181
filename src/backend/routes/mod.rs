//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint wiring
//! ```
//!
//! # Route Organization
//!
//! 1. **API Routes** - auth, posts, discussion, categories, media
//! 2. **Static Files** - uploaded media served from the media root
//! 3. **Fallback Handler** - 404 for unknown routes
//!
//! # API Surface
//!
//! ## Authentication
//! - `POST /api/auth/signup` - User registration
//! - `POST /api/auth/login` - User login
//! - `GET /api/auth/me` - Get current user
//! - `PUT /api/auth/profile` - Update display name and avatar
//!
//! ## Posts
//! - `GET /api/posts` - Published feed (pagination, category, search)
//! - `POST /api/posts` - Create a post
//! - `GET /api/posts/{post_id}` - Post detail
//! - `PUT /api/posts/{post_id}` - Edit a post (author only)
//! - `DELETE /api/posts/{post_id}` - Delete a post (author only)
//! - `POST /api/posts/{post_id}/like` - Toggle post like
//!
//! ## Discussion
//! - `GET /api/posts/{post_id}/discussion` - Assembled comment threads
//! - `POST /api/posts/{post_id}/comments` - Post a comment or reply
//! - `POST /api/comments/{comment_id}/like` - Toggle comment like
//! - `DELETE /api/comments/{comment_id}` - Delete a comment (author only)
//!
//! ## Other
//! - `GET /api/categories` - Category list
//! - `POST /api/media` - Upload a cover image

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

pub use router::create_router;
