use gradient_feed::constants::JUST_NOW;
use gradient_feed::feed::{seed_posts, FeedError, FeedStore};
use gradient_feed::models::{Author, Post, PostContent, PostId};
use std::io::Write;
use std::path::Path;

fn text_post(id: PostId, text: &str) -> Post {
    Post {
        id,
        content: PostContent::Text,
        description: text.to_string(),
        author: Author::new("Tester", "https://example.com/t.png"),
        timestamp: JUST_NOW.to_string(),
        likes: 0,
        comments: Vec::new(),
    }
}

#[test]
fn test_initial_feed_is_seeded_newest_first() {
    let store = FeedStore::initial();
    assert_eq!(store.len(), 3);

    let ids: Vec<PostId> = store.posts().iter().map(|post| post.id).collect();
    assert_eq!(ids, vec![PostId(3), PostId(2), PostId(1)]);

    let first = &store.posts()[0];
    assert_eq!(first.author.name, "Sarah Chen");
    assert_eq!(first.likes, 234);
    assert_eq!(first.comments.len(), 2);
    assert!(first.image_url().is_some());

    let purple = store.get(PostId(2)).unwrap();
    let gradient = purple.gradient().unwrap();
    assert_eq!(gradient.name, "Purple Haze");
    assert_eq!(gradient.colors, vec!["#667eea", "#764ba2", "#f093fb"]);
    assert_eq!(gradient.css, "linear-gradient(135deg, #667eea, #764ba2, #f093fb)");
}

#[test]
fn test_append_inserts_at_head() {
    let mut store = FeedStore::initial();
    let id = store.allocate_id().unwrap();
    assert!(store.posts().iter().all(|post| post.id != id));

    store.append(text_post(id, "hello")).unwrap();

    assert_eq!(store.len(), 4);
    assert_eq!(store.posts()[0].id, id);
    assert_eq!(store.posts()[1].id, PostId(3));

    // Ids keep increasing
    let next = store.allocate_id().unwrap();
    assert!(next.0 > id.0);
}

#[test]
fn test_append_to_empty_store() {
    let mut store = FeedStore::from_posts(Vec::new()).unwrap();
    assert!(store.is_empty());

    let id = store.allocate_id().unwrap();
    store.append(text_post(id, "first")).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.posts()[0].description, "first");
}

#[test]
fn test_add_comment_appends_to_tail() {
    let mut store = FeedStore::initial();
    let me = Author::new("You", "https://example.com/me.png");

    let comment_id = store.add_comment(PostId(3), &me, "Nice colors").unwrap();

    let post = store.get(PostId(3)).unwrap();
    assert_eq!(post.comments.len(), 3);
    let last = post.comments.last().unwrap();
    assert_eq!(last.id, comment_id);
    assert_eq!(last.author, "You");
    assert_eq!(last.text, "Nice colors");
    assert_eq!(last.timestamp, JUST_NOW);
    assert_eq!(post.comments[0].author, "Mike Johnson");
    assert!(post.comments.iter().filter(|c| c.id == comment_id).count() == 1);
}

#[test]
fn test_add_comment_to_unknown_post() {
    let mut store = FeedStore::initial();
    let me = Author::new("You", "");
    assert_eq!(
        store.add_comment(PostId(99), &me, "hello"),
        Err(FeedError::UnknownPost(PostId(99)))
    );
}

#[test]
fn test_subscribers_see_new_snapshots() {
    let mut store = FeedStore::initial();
    let mut rx = store.subscribe();
    assert!(!rx.has_changed().unwrap());

    let id = store.allocate_id().unwrap();
    store.append(text_post(id, "observed")).unwrap();

    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.len(), 4);
    assert_eq!(snapshot.posts()[0].description, "observed");
    assert!(!rx.has_changed().unwrap());

    store.add_comment(id, &Author::new("You", ""), "first!").unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().get(id).unwrap().comments.len(), 1);
}

#[test]
fn test_snapshot_is_detached_from_later_changes() {
    let mut store = FeedStore::initial();
    let before = store.snapshot();

    let id = store.allocate_id().unwrap();
    store.append(text_post(id, "later")).unwrap();

    assert_eq!(before.len(), 3);
    assert_eq!(store.snapshot().len(), 4);
}

#[test]
fn test_seed_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&seed_posts()).unwrap().as_bytes())
        .unwrap();

    let store = FeedStore::from_seed_file(file.path()).unwrap();
    assert_eq!(store.posts(), seed_posts().as_slice());
}

#[test]
fn test_seed_file_format() {
    let json = r##"[
        {
            "id": 10,
            "type": "gradient",
            "gradient": "linear-gradient(135deg, #000, #fff)",
            "name": "Mono",
            "colors": ["#000", "#fff"],
            "description": "Black to white",
            "author": { "name": "Kim", "avatar": "https://example.com/kim.png" },
            "timestamp": "Yesterday",
            "likes": 5
        },
        {
            "id": 4,
            "type": "text",
            "description": "Plain words",
            "author": { "name": "Lee", "avatar": "" },
            "timestamp": "Last week"
        }
    ]"##;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let mut store = FeedStore::from_seed_file(file.path()).unwrap();
    assert_eq!(store.len(), 2);

    let mono = &store.posts()[0];
    assert_eq!(mono.gradient().unwrap().name, "Mono");
    assert_eq!(mono.likes, 5);
    assert!(mono.comments.is_empty());

    let plain = &store.posts()[1];
    assert_eq!(plain.content, PostContent::Text);
    assert_eq!(plain.description, "Plain words");
    assert_eq!(plain.likes, 0);

    // New ids continue after the highest seeded id
    assert_eq!(store.allocate_id().unwrap(), PostId(11));
}

#[test]
fn test_seed_file_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    assert!(FeedStore::from_seed_file(file.path()).is_err());
    assert!(FeedStore::from_seed_file("/definitely/not/here.json").is_err());
}

fn write_seed(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn seed_error(path: &Path) -> FeedError {
    let err = match FeedStore::from_seed_file(path) {
        Ok(_) => panic!("seed file should be rejected"),
        Err(err) => err,
    };
    err.downcast_ref::<FeedError>().cloned().unwrap()
}

#[test]
fn test_seed_file_rejects_text_post_without_description() {
    let file = write_seed(
        r#"[{ "id": 5, "type": "text", "description": "  ",
              "author": { "name": "A", "avatar": "" }, "timestamp": "Now" }]"#,
    );
    assert_eq!(seed_error(file.path()), FeedError::EmptyPost(PostId(5)));
}

#[test]
fn test_seed_file_allows_media_post_without_description() {
    let file = write_seed(
        r#"[{ "id": 5, "type": "image", "image_url": "https://example.com/a.jpg",
              "author": { "name": "A", "avatar": "" }, "timestamp": "Now" }]"#,
    );
    let store = FeedStore::from_seed_file(file.path()).unwrap();
    assert_eq!(store.posts()[0].description, "");
}

#[test]
fn test_seed_file_rejects_duplicate_ids() {
    let file = write_seed(
        r#"[
            { "id": 5, "type": "text", "description": "first",
              "author": { "name": "A", "avatar": "" }, "timestamp": "Now" },
            { "id": 5, "type": "text", "description": "dup",
              "author": { "name": "B", "avatar": "" }, "timestamp": "Now" }
        ]"#,
    );
    assert_eq!(seed_error(file.path()), FeedError::DuplicateId(PostId(5)));
}

#[test]
fn test_seed_file_rejects_largest_id() {
    let file = write_seed(
        r#"[{ "id": 18446744073709551615, "type": "text", "description": "edge",
              "author": { "name": "A", "avatar": "" }, "timestamp": "Now" }]"#,
    );
    assert_eq!(seed_error(file.path()), FeedError::IdsExhausted(PostId(u64::MAX)));
}

#[test]
fn test_allocation_stops_when_ids_run_out() {
    let mut store = FeedStore::from_posts(vec![text_post(PostId(u64::MAX - 1), "edge")]).unwrap();
    assert_eq!(store.allocate_id(), Err(FeedError::IdsExhausted(PostId(u64::MAX))));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_append_rejects_invalid_posts() {
    let mut store = FeedStore::initial();

    assert_eq!(
        store.append(text_post(PostId(3), "again")),
        Err(FeedError::DuplicateId(PostId(3)))
    );
    let id = store.allocate_id().unwrap();
    assert_eq!(store.append(text_post(id, "")), Err(FeedError::EmptyPost(id)));
    assert_eq!(
        store.append(text_post(PostId(u64::MAX), "edge")),
        Err(FeedError::IdsExhausted(PostId(u64::MAX)))
    );
    assert_eq!(store.len(), 3);
}

#[test]
fn test_comment_ids_stop_when_exhausted() {
    let file = write_seed(
        r#"[{ "id": 1, "type": "text", "description": "busy",
              "author": { "name": "A", "avatar": "" }, "timestamp": "Now",
              "comments": [{ "id": 18446744073709551615, "author": "B", "avatar": "",
                             "text": "last", "timestamp": "Now" }] }]"#,
    );
    let mut store = FeedStore::from_seed_file(file.path()).unwrap();
    assert_eq!(
        store.add_comment(PostId(1), &Author::new("You", ""), "one more"),
        Err(FeedError::CommentIdsExhausted(PostId(1)))
    );
    assert_eq!(store.posts()[0].comments.len(), 1);
}
