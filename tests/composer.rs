use gradient_feed::composer::{Composer, ComposerState};
use gradient_feed::feed::{FeedError, FeedStore};
use gradient_feed::media::MediaError;
use gradient_feed::models::{Author, Post, PostContent, PostId};

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

fn composer() -> Composer {
    Composer::new(Author::new("You", "https://example.com/me.png"), 1024)
}

#[test]
fn test_new_composer_is_collapsed_and_empty() {
    let composer = composer();
    assert_eq!(composer.state(), ComposerState::Collapsed);
    assert_eq!(composer.draft(), "");
    assert!(composer.image().is_none());
    assert!(!composer.can_submit());
}

#[test]
fn test_empty_submit_is_a_no_op() {
    let mut store = FeedStore::initial();
    let mut composer = composer();
    composer.expand();

    assert_eq!(composer.submit(&mut store), Ok(None));
    assert_eq!(store.len(), 3);

    composer.update_text("   \n ");
    assert!(!composer.can_submit());
    assert_eq!(composer.submit(&mut store), Ok(None));
    assert_eq!(store.len(), 3);
    assert_eq!(composer.state(), ComposerState::Expanded);
}

#[test]
fn test_text_submit_prepends_post_and_resets() {
    let mut store = FeedStore::initial();
    let mut composer = composer();
    composer.expand();
    for c in "Hello feed".chars() {
        composer.push_char(c);
    }

    let id = composer.submit(&mut store).unwrap().unwrap();

    let post = &store.posts()[0];
    assert_eq!(post.id, id);
    assert_eq!(post.content, PostContent::Text);
    assert_eq!(post.description, "Hello feed");
    assert_eq!(post.author.name, "You");
    assert_eq!(post.timestamp, "Just now");
    assert_eq!(post.likes, 0);
    assert!(post.comments.is_empty());

    assert_eq!(composer.state(), ComposerState::Collapsed);
    assert_eq!(composer.draft(), "");
}

#[test]
fn test_attach_expands_and_submits_image_post() {
    let mut store = FeedStore::initial();
    let mut composer = composer();

    composer.attach_image("sunset.png", PNG).unwrap();
    assert_eq!(composer.state(), ComposerState::Expanded);
    let image = composer.image().unwrap();
    assert_eq!(image.file_name, "sunset.png");
    assert_eq!(image.mime, mime::IMAGE_PNG);
    assert!(composer.can_submit());

    let id = composer.submit(&mut store).unwrap().unwrap();
    let post = store.get(id).unwrap();
    let url = post.image_url().unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
    assert_eq!(post.description, "");
    assert!(composer.image().is_none());
    assert_eq!(composer.state(), ComposerState::Collapsed);
}

#[test]
fn test_failed_attach_leaves_composer_untouched() {
    let mut composer = composer();

    let err = composer.attach_image("notes.txt", b"just some text").unwrap_err();
    assert!(matches!(err, MediaError::UnsupportedType(_)));
    assert_eq!(composer.state(), ComposerState::Collapsed);
    assert!(composer.image().is_none());

    let big = [PNG, &[0u8; 2048][..]].concat();
    let err = composer.attach_image("huge.png", &big).unwrap_err();
    assert!(matches!(err, MediaError::TooLarge { limit: 1024, .. }));
    assert!(composer.image().is_none());
}

#[test]
fn test_remove_image_keeps_text() {
    let mut composer = composer();
    composer.attach_image("a.png", PNG).unwrap();
    composer.update_text("caption");

    composer.remove_image();

    assert!(composer.image().is_none());
    assert_eq!(composer.draft(), "caption");
    assert_eq!(composer.state(), ComposerState::Expanded);
}

#[test]
fn test_cancel_discards_draft() {
    let mut composer = composer();
    composer.attach_image("a.png", PNG).unwrap();
    composer.update_text("never mind");
    composer.pop_char();

    composer.cancel();

    assert_eq!(composer.state(), ComposerState::Collapsed);
    assert_eq!(composer.draft(), "");
    assert!(composer.image().is_none());
}

#[test]
fn test_failed_submit_keeps_draft() {
    let edge = Post {
        id: PostId(u64::MAX - 1),
        content: PostContent::Text,
        description: "edge".to_string(),
        author: Author::new("Tester", ""),
        timestamp: "Now".to_string(),
        likes: 0,
        comments: Vec::new(),
    };
    let mut store = FeedStore::from_posts(vec![edge]).unwrap();
    let mut composer = composer();
    composer.attach_image("sunset.png", PNG).unwrap();
    composer.update_text("still here");

    assert_eq!(
        composer.submit(&mut store),
        Err(FeedError::IdsExhausted(PostId(u64::MAX)))
    );
    assert_eq!(store.len(), 1);
    assert_eq!(composer.state(), ComposerState::Expanded);
    assert_eq!(composer.draft(), "still here");
    assert!(composer.image().is_some());
}
