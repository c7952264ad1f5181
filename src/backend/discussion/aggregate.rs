/**
 * Comment Thread Assembly
 *
 * This module contains the pure aggregation logic of the discussion view:
 * a flat comment list (as returned by the store, newest first) is
 * partitioned into top-level threads and reply groups.
 *
 * # Ordering
 *
 * - Top-level comments keep the store order: descending by creation time,
 *   so the newest thread appears first.
 * - Each reply group is re-ordered ascending by creation time, so a
 *   conversation reads top-to-bottom chronologically under its thread.
 *   This is the one ordering inversion in the whole flow and it is
 *   intentional.
 *
 * # Orphans
 *
 * A reply whose parent comment has been deleted belongs to no thread. It
 * is excluded from the assembled output entirely (neither promoted to
 * top-level nor attached elsewhere), while still counting toward the
 * discussion's total comment count. Callers must tolerate this.
 *
 * # Nesting
 *
 * Nesting depth is exactly one level; the write path rejects replies to
 * replies, so assembly only ever distinguishes "no parent" from "parent".
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::backend::discussion::db::CommentRecord;

/// Public author fields joined onto each comment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorProfile {
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}

/// A comment annotated with its like statistics for the current viewer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: AuthorProfile,
    /// Number of distinct users with an active like on this comment
    pub like_count: i64,
    /// Whether the current viewer has liked this comment; always false
    /// for anonymous visitors
    pub liked_by_viewer: bool,
}

impl CommentView {
    /// Build a view from a store record plus its like annotations
    pub fn from_record(record: CommentRecord, like_count: i64, liked_by_viewer: bool) -> Self {
        Self {
            id: record.id,
            post_id: record.post_id,
            author_id: record.user_id,
            parent_id: record.parent_id,
            content: record.content,
            created_at: record.created_at,
            author: AuthorProfile {
                display_name: record.author_display_name,
                avatar_url: record.author_avatar_url,
            },
            like_count,
            liked_by_viewer,
        }
    }
}

/// A top-level comment paired with its ordered reply group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentThread {
    pub comment: CommentView,
    /// Replies ordered ascending by creation time (oldest first)
    pub replies: Vec<CommentView>,
}

/// The assembled discussion for one post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionView {
    pub post_id: Uuid,
    /// Total comments in the store at read time, orphans included
    pub comment_count: usize,
    pub threads: Vec<CommentThread>,
}

/// Partition a flat comment list into threads
///
/// The input must be ordered descending by creation time (the store
/// order); the top-level list preserves that order. Replies are grouped
/// under their parent and re-sorted ascending. Replies referencing a
/// parent that is not in the input are dropped.
pub fn assemble_threads(comments: Vec<CommentView>) -> Vec<CommentThread> {
    let mut top_level: Vec<CommentView> = Vec::new();
    let mut by_parent: HashMap<Uuid, Vec<CommentView>> = HashMap::new();

    for comment in comments {
        match comment.parent_id {
            None => top_level.push(comment),
            Some(parent_id) => by_parent.entry(parent_id).or_default().push(comment),
        }
    }

    top_level
        .into_iter()
        .map(|comment| {
            let mut replies = by_parent.remove(&comment.id).unwrap_or_default();
            replies.sort_by_key(|reply| reply.created_at);
            CommentThread { comment, replies }
        })
        .collect()
    // Anything still left in by_parent references a deleted parent and is
    // dropped here.
}
