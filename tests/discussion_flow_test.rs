//! Integration tests for the discussion flow
//!
//! These tests need a live PostgreSQL instance (`DATABASE_URL` or the
//! local default) and are ignored by default. Run with:
//!
//! ```sh
//! cargo test -- --ignored
//! ```

mod common;

use serial_test::serial;
use uuid::Uuid;

use common::database::TestDatabase;
use devlog::backend::discussion::{
    delete_comment, load_discussion, post_comment, toggle_comment_like,
};
use devlog::backend::error::BackendError;

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn test_discussion_round_trip_ordering() {
    let db = TestDatabase::new().await;
    let alice = db.seed_user("alice").await;
    let bob = db.seed_user("bob").await;
    let post = db.seed_published_post(alice, None, "First post").await;

    // Two top-level comments, then two replies to the first.
    let c1 = post_comment(db.pool(), post, alice, "first thread", None)
        .await
        .expect("post c1");
    let c2 = post_comment(db.pool(), post, bob, "second thread", None)
        .await
        .expect("post c2");
    let r1 = post_comment(db.pool(), post, bob, "first reply", Some(c1))
        .await
        .expect("post r1");
    let r2 = post_comment(db.pool(), post, alice, "second reply", Some(c1))
        .await
        .expect("post r2");

    let view = load_discussion(db.pool(), post, None).await.expect("load");

    assert_eq!(view.comment_count, 4);
    assert_eq!(view.threads.len(), 2);
    // Top-level newest first; replies oldest first under their thread.
    assert_eq!(view.threads[0].comment.id, c2);
    assert!(view.threads[0].replies.is_empty());
    assert_eq!(view.threads[1].comment.id, c1);
    let reply_ids: Vec<Uuid> = view.threads[1].replies.iter().map(|r| r.id).collect();
    assert_eq!(reply_ids, vec![r1, r2]);

    db.cleanup().await.expect("cleanup");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn test_comment_validation_rules() {
    let db = TestDatabase::new().await;
    let alice = db.seed_user("alice").await;
    let post_a = db.seed_published_post(alice, None, "Post A").await;
    let post_b = db.seed_published_post(alice, None, "Post B").await;

    // Empty bodies are rejected before any write.
    let err = post_comment(db.pool(), post_a, alice, "   ", None)
        .await
        .expect_err("empty body");
    assert!(matches!(err, BackendError::Validation { .. }));

    let top = post_comment(db.pool(), post_a, alice, "top", None)
        .await
        .expect("top");
    let reply = post_comment(db.pool(), post_a, alice, "reply", Some(top))
        .await
        .expect("reply");

    // Replies to replies are rejected at write time.
    let err = post_comment(db.pool(), post_a, alice, "too deep", Some(reply))
        .await
        .expect_err("nested reply");
    assert!(matches!(err, BackendError::Validation { .. }));

    // The parent must belong to the same post.
    let err = post_comment(db.pool(), post_b, alice, "wrong post", Some(top))
        .await
        .expect_err("cross-post parent");
    assert!(matches!(err, BackendError::Validation { .. }));

    // The parent must exist.
    let err = post_comment(db.pool(), post_a, alice, "ghost parent", Some(Uuid::new_v4()))
        .await
        .expect_err("missing parent");
    assert!(matches!(err, BackendError::Validation { .. }));

    db.cleanup().await.expect("cleanup");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn test_comment_like_toggle() {
    let db = TestDatabase::new().await;
    let alice = db.seed_user("alice").await;
    let bob = db.seed_user("bob").await;
    let post = db.seed_published_post(alice, None, "Liked post").await;
    let comment = post_comment(db.pool(), post, alice, "like me", None)
        .await
        .expect("comment");

    assert!(toggle_comment_like(db.pool(), comment, bob).await.expect("like"));

    let view = load_discussion(db.pool(), post, Some(bob)).await.expect("load");
    assert_eq!(view.threads[0].comment.like_count, 1);
    assert!(view.threads[0].comment.liked_by_viewer);

    // Another viewer sees the count but not the liked flag.
    let view = load_discussion(db.pool(), post, Some(alice)).await.expect("load");
    assert_eq!(view.threads[0].comment.like_count, 1);
    assert!(!view.threads[0].comment.liked_by_viewer);

    // Anonymous visitors see the count too, and never a liked flag.
    let view = load_discussion(db.pool(), post, None).await.expect("load");
    assert_eq!(view.threads[0].comment.like_count, 1);
    assert!(!view.threads[0].comment.liked_by_viewer);

    // Toggling again removes the like.
    assert!(!toggle_comment_like(db.pool(), comment, bob).await.expect("unlike"));
    let view = load_discussion(db.pool(), post, Some(bob)).await.expect("load");
    assert_eq!(view.threads[0].comment.like_count, 0);
    assert!(!view.threads[0].comment.liked_by_viewer);

    db.cleanup().await.expect("cleanup");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn test_delete_is_author_only_and_orphans_replies() {
    let db = TestDatabase::new().await;
    let alice = db.seed_user("alice").await;
    let bob = db.seed_user("bob").await;
    let post = db.seed_published_post(alice, None, "Deletions").await;

    let top = post_comment(db.pool(), post, alice, "thread", None)
        .await
        .expect("top");
    post_comment(db.pool(), post, bob, "reply", Some(top))
        .await
        .expect("reply");

    // Only the author may delete.
    let err = delete_comment(db.pool(), top, bob).await.expect_err("forbidden");
    assert!(matches!(err, BackendError::Forbidden { .. }));

    delete_comment(db.pool(), top, alice).await.expect("delete");

    // The reply survives as an orphan: counted, not rendered.
    let view = load_discussion(db.pool(), post, None).await.expect("load");
    assert_eq!(view.comment_count, 1);
    assert!(view.threads.is_empty());

    // Deleting a missing comment reports 404.
    let err = delete_comment(db.pool(), top, alice).await.expect_err("gone");
    assert!(matches!(err, BackendError::NotFound { .. }));

    db.cleanup().await.expect("cleanup");
}
