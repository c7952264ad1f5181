//! Property-based tests for thread assembly
//!
//! Uses proptest to generate random comment lists and verify the
//! structural properties of the assembled discussion.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use devlog::backend::discussion::aggregate::{assemble_threads, AuthorProfile, CommentView};

fn comment(id: Uuid, parent_id: Option<Uuid>, t: i64) -> CommentView {
    CommentView {
        id,
        post_id: Uuid::nil(),
        author_id: Uuid::new_v4(),
        parent_id,
        content: String::from("generated"),
        created_at: Utc.timestamp_opt(t, 0).unwrap(),
        author: AuthorProfile {
            display_name: None,
            avatar_url: None,
        },
        like_count: 0,
        liked_by_viewer: false,
    }
}

/// A random discussion: some top-level comments, some replies to them,
/// and some orphan replies to unknown parents, flattened newest first.
fn discussion_strategy() -> impl Strategy<Value = Vec<CommentView>> {
    (
        prop::collection::vec(0i64..100_000, 0..8),
        prop::collection::vec((0usize..8, 0i64..100_000), 0..20),
        prop::collection::vec(0i64..100_000, 0..4),
    )
        .prop_map(|(top_times, reply_specs, orphan_times)| {
            let top_ids: Vec<Uuid> = top_times.iter().map(|_| Uuid::new_v4()).collect();
            let mut comments: Vec<CommentView> = top_ids
                .iter()
                .zip(&top_times)
                .map(|(id, t)| comment(*id, None, *t))
                .collect();

            for (parent_index, t) in reply_specs {
                if let Some(parent) = top_ids.get(parent_index) {
                    comments.push(comment(Uuid::new_v4(), Some(*parent), t));
                }
            }
            for t in orphan_times {
                comments.push(comment(Uuid::new_v4(), Some(Uuid::new_v4()), t));
            }

            comments.sort_by_key(|c| std::cmp::Reverse(c.created_at));
            comments
        })
}

proptest! {
    #[test]
    fn test_threads_only_contain_their_own_replies(comments in discussion_strategy()) {
        let threads = assemble_threads(comments);
        for thread in &threads {
            prop_assert!(thread.comment.parent_id.is_none());
            for reply in &thread.replies {
                prop_assert_eq!(reply.parent_id, Some(thread.comment.id));
            }
        }
    }

    #[test]
    fn test_no_comment_appears_twice(comments in discussion_strategy()) {
        let threads = assemble_threads(comments);
        let mut seen = std::collections::HashSet::new();
        for thread in &threads {
            prop_assert!(seen.insert(thread.comment.id));
            for reply in &thread.replies {
                prop_assert!(seen.insert(reply.id));
            }
        }
    }

    #[test]
    fn test_top_level_is_newest_first(comments in discussion_strategy()) {
        let threads = assemble_threads(comments);
        for pair in threads.windows(2) {
            prop_assert!(pair[0].comment.created_at >= pair[1].comment.created_at);
        }
    }

    #[test]
    fn test_replies_are_oldest_first(comments in discussion_strategy()) {
        let threads = assemble_threads(comments);
        for thread in &threads {
            for pair in thread.replies.windows(2) {
                prop_assert!(pair[0].created_at <= pair[1].created_at);
            }
        }
    }

    #[test]
    fn test_only_orphans_are_dropped(comments in discussion_strategy()) {
        let input_ids: std::collections::HashSet<Uuid> =
            comments.iter().map(|c| c.id).collect();
        let orphan_count = comments
            .iter()
            .filter(|c| matches!(c.parent_id, Some(p) if !input_ids.contains(&p)))
            .count();
        let total = comments.len();

        let threads = assemble_threads(comments);

        let placed: usize = threads.iter().map(|t| 1 + t.replies.len()).sum();
        prop_assert_eq!(placed, total - orphan_count);
    }
}
