//! Integration tests for the post feed and post likes
//!
//! These tests need a live PostgreSQL instance and are ignored by
//! default. Run with `cargo test -- --ignored`.

mod common;

use serial_test::serial;

use common::database::TestDatabase;
use devlog::backend::posts::db::{
    count_post_likes, count_published, delete_post_like, get_post, has_post_like,
    insert_post, insert_post_like, list_published, PostDraft,
};
use devlog::backend::posts::reading_time_minutes;

fn draft(title: &str, content: &str, category_id: Option<uuid::Uuid>, published: bool) -> PostDraft {
    PostDraft {
        category_id,
        title: title.to_string(),
        summary: String::new(),
        content: content.to_string(),
        cover_image: None,
        status: if published { "published" } else { "draft" }.to_string(),
        reading_time_minutes: reading_time_minutes(content),
        published_at: published.then(chrono::Utc::now),
    }
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn test_feed_pagination_newest_first() {
    let db = TestDatabase::new().await;
    let author = db.seed_user("writer").await;

    for i in 0..8 {
        insert_post(db.pool(), author, &draft(&format!("Post {i}"), "body", None, true))
            .await
            .expect("insert");
        // Distinct publication instants keep the ordering deterministic.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let page_one = list_published(db.pool(), None, None, 6, 0).await.expect("page 1");
    let page_two = list_published(db.pool(), None, None, 6, 6).await.expect("page 2");
    assert_eq!(page_one.len(), 6);
    assert_eq!(page_two.len(), 2);
    assert_eq!(count_published(db.pool(), None, None).await.expect("count"), 8);

    assert_eq!(page_one[0].title, "Post 7");
    for pair in page_one.windows(2) {
        assert!(pair[0].published_at >= pair[1].published_at);
    }

    db.cleanup().await.expect("cleanup");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn test_feed_excludes_drafts() {
    let db = TestDatabase::new().await;
    let author = db.seed_user("writer").await;

    insert_post(db.pool(), author, &draft("Visible", "body", None, true))
        .await
        .expect("published");
    let draft_id = insert_post(db.pool(), author, &draft("Hidden", "body", None, false))
        .await
        .expect("draft");

    let feed = list_published(db.pool(), None, None, 6, 0).await.expect("feed");
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].title, "Visible");

    // The draft is still fetchable by ID for its author's edit page.
    let fetched = get_post(db.pool(), draft_id).await.expect("get").expect("some");
    assert_eq!(fetched.status, "draft");

    db.cleanup().await.expect("cleanup");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn test_feed_category_filter_and_search() {
    let db = TestDatabase::new().await;
    let author = db.seed_user("writer").await;
    let rust = db.seed_category("Rust", "rust").await;
    let web = db.seed_category("Web", "web").await;

    insert_post(db.pool(), author, &draft("Borrow checker", "ownership rules", Some(rust), true))
        .await
        .expect("insert");
    insert_post(db.pool(), author, &draft("CSS grid", "layout tricks", Some(web), true))
        .await
        .expect("insert");
    insert_post(db.pool(), author, &draft("Uncategorized", "misc notes", None, true))
        .await
        .expect("insert");

    let rust_posts = list_published(db.pool(), Some("rust"), None, 6, 0).await.expect("filter");
    assert_eq!(rust_posts.len(), 1);
    assert_eq!(rust_posts[0].title, "Borrow checker");
    assert_eq!(rust_posts[0].category_slug.as_deref(), Some("rust"));

    // Search matches title or body, case-insensitive.
    let by_title = list_published(db.pool(), None, Some("css"), 6, 0).await.expect("search");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "CSS grid");

    let by_body = list_published(db.pool(), None, Some("OWNERSHIP"), 6, 0).await.expect("search");
    assert_eq!(by_body.len(), 1);
    assert_eq!(by_body[0].title, "Borrow checker");

    // Filters combine.
    let none = list_published(db.pool(), Some("web"), Some("ownership"), 6, 0)
        .await
        .expect("combined");
    assert!(none.is_empty());

    db.cleanup().await.expect("cleanup");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn test_post_like_uniqueness() {
    let db = TestDatabase::new().await;
    let author = db.seed_user("writer").await;
    let reader = db.seed_user("reader").await;
    let post = insert_post(db.pool(), author, &draft("Liked", "body", None, true))
        .await
        .expect("insert");

    insert_post_like(db.pool(), post, reader).await.expect("like");
    // A second insert collapses into the existing row.
    insert_post_like(db.pool(), post, reader).await.expect("re-like");

    assert_eq!(count_post_likes(db.pool(), post).await.expect("count"), 1);
    assert!(has_post_like(db.pool(), post, reader).await.expect("has"));

    delete_post_like(db.pool(), post, reader).await.expect("unlike");
    assert_eq!(count_post_likes(db.pool(), post).await.expect("count"), 0);

    db.cleanup().await.expect("cleanup");
}
