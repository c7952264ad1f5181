//! Posts Module
//!
//! Post model, feed queries (category filter, search, pagination), post
//! CRUD, and post likes.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs      - Status type, derived fields, exports
//! ├── db.rs       - Database operations for posts and post likes
//! └── handlers.rs - HTTP handlers
//! ```
//!
//! # Lifecycle
//!
//! Posts are created as drafts or published directly. Publishing stamps
//! `published_at` once; editing a published post keeps the original
//! publication time. Only published posts appear in the feed; a draft is
//! visible to its author alone.

use serde::{Deserialize, Serialize};

/// Database operations for posts
pub mod db;

/// HTTP handlers
pub mod handlers;

/// Publication status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            _ => None,
        }
    }
}

/// Estimated reading time in minutes
///
/// One minute per 200 words, rounded up, never below one minute.
pub fn reading_time_minutes(content: &str) -> i32 {
    let words = content.split_whitespace().count();
    (words.div_ceil(200)).max(1) as i32
}
