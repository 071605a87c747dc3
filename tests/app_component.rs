use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gradient_feed::clipboard::MemoryClipboard;
use gradient_feed::clock::{Clock, ManualClock};
use gradient_feed::composer::ComposerState;
use gradient_feed::config::Config;
use gradient_feed::constants::{SUCCESS_IMAGE_ATTACHED, SUCCESS_POST_CREATED};
use gradient_feed::feed::FeedStore;
use gradient_feed::logger::Logger;
use gradient_feed::models::{Author, Post, PostContent, PostId};
use gradient_feed::post_view::CopySlot;
use gradient_feed::ui::core::{Action, Component, DialogType, EventType, Focus};
use gradient_feed::ui::AppComponent;
use ratatui::{backend::TestBackend, Terminal};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13];

struct Harness {
    app: AppComponent,
    clipboard: MemoryClipboard,
    clock: ManualClock,
}

impl Harness {
    fn new() -> Self {
        Self::with_store(FeedStore::initial())
    }

    fn with_store(store: FeedStore) -> Self {
        let clipboard = MemoryClipboard::new();
        let clock = ManualClock::new();
        let app = AppComponent::new(
            store,
            &Config::default(),
            Logger::new(),
            Box::new(clipboard.clone()),
            Arc::new(clock.clone()),
        );
        Self { app, clipboard, clock }
    }

    fn key(&mut self, code: KeyCode) {
        self.app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn ctrl(&mut self, c: char) {
        self.app
            .handle_event(EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)));
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
    }

    fn screen(&mut self) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                self.app.render(f, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[test]
fn test_like_toggle_round_trip() {
    let mut h = Harness::new();
    assert_eq!(h.app.feed().selected_post_id(), Some(PostId(3)));

    h.key(KeyCode::Char('l'));
    let view = h.app.feed().view(PostId(3)).unwrap();
    assert!(view.liked());
    assert_eq!(view.like_count(), 235);

    h.key(KeyCode::Char('l'));
    let view = h.app.feed().view(PostId(3)).unwrap();
    assert!(!view.liked());
    assert_eq!(view.like_count(), 234);
}

#[test]
fn test_compose_and_publish_text_post() {
    let mut h = Harness::new();

    h.key(KeyCode::Char('i'));
    assert_eq!(h.app.focus(), Focus::Composer);
    assert_eq!(h.app.composer().state(), ComposerState::Expanded);

    // Global shortcuts are plain text while composing
    h.type_text("quick note");
    assert_eq!(h.app.composer().draft(), "quick note");
    assert!(!h.app.should_quit());

    h.key(KeyCode::Enter);

    assert_eq!(h.app.store().len(), 4);
    let newest = &h.app.store().posts()[0];
    assert_eq!(newest.description, "quick note");
    assert_eq!(newest.content, PostContent::Text);
    assert_eq!(newest.author.name, "You");
    assert_eq!(newest.likes, 0);

    assert_eq!(h.app.focus(), Focus::Feed);
    assert_eq!(h.app.composer().state(), ComposerState::Collapsed);
    assert_eq!(h.app.feed().posts().len(), 4);
    assert_eq!(h.app.feed().selected_post_id(), Some(newest.id));
    assert_eq!(h.app.status_text(), Some(SUCCESS_POST_CREATED));

    // The status message goes away on its own
    h.clock.advance(Duration::from_secs(5));
    assert!(h.app.tick());
    assert_eq!(h.app.status_text(), None);
}

#[test]
fn test_empty_submit_does_nothing() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('i'));
    h.type_text("   ");
    h.key(KeyCode::Enter);

    assert_eq!(h.app.store().len(), 3);
    assert_eq!(h.app.focus(), Focus::Composer);
    assert_eq!(h.app.status_text(), None);
}

#[test]
fn test_cancel_collapses_composer() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('i'));
    h.type_text("draft");
    h.key(KeyCode::Esc);

    assert_eq!(h.app.focus(), Focus::Feed);
    assert_eq!(h.app.composer().state(), ComposerState::Collapsed);
    assert_eq!(h.app.composer().draft(), "");
    assert_eq!(h.app.store().len(), 3);
}

#[test]
fn test_copy_palette_color_and_expire_indicator() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('j'));
    assert_eq!(h.app.feed().selected_post_id(), Some(PostId(2)));

    // Number keys do nothing until the palette is shown
    h.key(KeyCode::Char('1'));
    assert_eq!(h.clipboard.contents(), None);

    h.key(KeyCode::Char('v'));
    assert!(h.app.feed().view(PostId(2)).unwrap().colors_visible());

    h.key(KeyCode::Char('1'));
    assert_eq!(h.clipboard.contents().as_deref(), Some("#667eea"));
    let view = h.app.feed().view(PostId(2)).unwrap();
    assert!(view.is_copied(CopySlot::Color(0), h.clock.now()));
    assert!(h.screen().contains("Copied!"));

    h.clock.advance(Duration::from_millis(2000));
    assert!(h.app.tick());
    let view = h.app.feed().view(PostId(2)).unwrap();
    assert_eq!(view.copied_slot(h.clock.now()), None);
    assert!(!h.screen().contains("Copied!"));

    h.key(KeyCode::Char('y'));
    assert_eq!(
        h.clipboard.contents().as_deref(),
        Some("linear-gradient(135deg, #667eea, #764ba2, #f093fb)")
    );
}

#[test]
fn test_palette_keys_ignored_on_photo_post() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('v'));
    h.key(KeyCode::Char('1'));
    assert!(!h.app.feed().view(PostId(3)).unwrap().colors_visible());
    assert!(h.clipboard.history().is_empty());
}

#[test]
fn test_write_comment() {
    let mut h = Harness::new();

    h.key(KeyCode::Char('r'));
    assert_eq!(h.app.feed().commenting(), Some(PostId(3)));
    assert!(h.app.feed().view(PostId(3)).unwrap().comments_visible());

    // Blank comments are not sent
    h.key(KeyCode::Enter);
    assert_eq!(h.app.store().get(PostId(3)).unwrap().comments.len(), 2);

    h.type_text("Wow, q is fine here");
    h.key(KeyCode::Enter);
    assert!(!h.app.should_quit());

    let comments = &h.app.store().get(PostId(3)).unwrap().comments;
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[2].text, "Wow, q is fine here");
    assert_eq!(comments[2].author, "You");
    assert_eq!(h.app.feed().posts()[0].comments.len(), 3);
    assert_eq!(h.app.feed().view(PostId(3)).unwrap().comment_draft(), "");

    h.key(KeyCode::Esc);
    assert_eq!(h.app.feed().commenting(), None);

    h.key(KeyCode::Char('q'));
    assert!(h.app.should_quit());
}

#[test]
fn test_toggle_comments_shows_existing_comments() {
    let mut h = Harness::new();
    assert!(!h.screen().contains("Emma Wilson"));

    h.key(KeyCode::Char('c'));
    let screen = h.screen();
    assert!(screen.contains("Mike Johnson"));
    assert!(screen.contains("Emma Wilson"));
    assert!(screen.contains("Write a comment..."));
}

#[test]
fn test_dialogs_open_and_close() {
    let mut h = Harness::new();

    h.key(KeyCode::Char('?'));
    assert_eq!(h.app.dialog_type(), Some(&DialogType::Help));
    assert!(h.screen().contains("Keyboard shortcuts"));
    // Keys go to the dialog, not the feed
    h.key(KeyCode::Char('l'));
    assert!(!h.app.feed().view(PostId(3)).unwrap().liked());
    h.key(KeyCode::Esc);
    assert_eq!(h.app.dialog_type(), None);

    h.key(KeyCode::Char('G'));
    assert_eq!(h.app.dialog_type(), Some(&DialogType::Logs));
    h.key(KeyCode::Char('G'));
    assert_eq!(h.app.dialog_type(), None);

    h.key(KeyCode::Char('p'));
    assert_eq!(h.app.dialog_type(), Some(&DialogType::AttachImage));
    h.key(KeyCode::Esc);
    assert_eq!(h.app.dialog_type(), None);
}

#[test]
fn test_image_load_failure_shows_error() {
    let mut h = Harness::new();
    h.app.dispatch(Action::ImageLoadFailed {
        path: "/tmp/missing.png".into(),
        error: "failed to read".to_string(),
    });
    assert!(matches!(h.app.dialog_type(), Some(DialogType::Error(_))));

    h.app.dispatch(Action::ImageLoaded {
        path: "/tmp/notes.txt".into(),
        bytes: b"plain text".to_vec(),
    });
    match h.app.dialog_type() {
        Some(DialogType::Error(message)) => assert!(message.contains("unsupported file type")),
        other => panic!("expected an error dialog, got {:?}", other),
    }
    assert!(h.app.composer().image().is_none());
}

#[tokio::test]
async fn test_attach_photo_and_publish() {
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(PNG).unwrap();

    let mut h = Harness::new();
    h.ctrl('o');
    assert_eq!(h.app.dialog_type(), Some(&DialogType::AttachImage));
    h.type_text(&file.path().display().to_string());
    h.key(KeyCode::Enter);
    assert_eq!(h.app.dialog_type(), None);

    for _ in 0..200 {
        h.app.handle_event(EventType::Tick);
        if h.app.composer().image().is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let image = h.app.composer().image().expect("image should be attached");
    assert_eq!(image.mime, mime::IMAGE_PNG);
    assert_eq!(h.app.composer().state(), ComposerState::Expanded);
    assert_eq!(h.app.focus(), Focus::Composer);
    assert_eq!(h.app.status_text(), Some(SUCCESS_IMAGE_ATTACHED));

    h.key(KeyCode::Enter);
    let newest = &h.app.store().posts()[0];
    assert!(newest.image_url().unwrap().starts_with("data:image/png;base64,"));
    assert_eq!(newest.description, "");
}

#[test]
fn test_remove_attached_photo() {
    let mut h = Harness::new();
    h.app.dispatch(Action::ImageLoaded {
        path: "/tmp/dot.png".into(),
        bytes: PNG.to_vec(),
    });
    assert!(h.app.composer().image().is_some());
    assert!(h.screen().contains("dot.png"));

    h.ctrl('x');
    assert!(h.app.composer().image().is_none());
    assert_eq!(h.app.composer().state(), ComposerState::Expanded);
}

#[test]
fn test_initial_screen() {
    let mut h = Harness::new();
    let screen = h.screen();
    assert!(screen.contains("What's on your mind?"));
    assert!(screen.contains("Sarah Chen"));
    assert!(screen.contains("234 likes"));
    assert!(screen.contains("2 comments"));
    assert!(screen.contains("Purple Haze"));
    assert!(screen.contains("⇪ Share"));
}

#[test]
fn test_ctrl_c_quits_from_composer() {
    let mut h = Harness::new();
    h.key(KeyCode::Char('i'));
    h.ctrl('c');
    assert!(h.app.should_quit());
}

fn text_post(id: u64, description: &str) -> Post {
    Post {
        id: PostId(id),
        content: PostContent::Text,
        description: description.to_string(),
        author: Author::new("Tester", ""),
        timestamp: "Now".to_string(),
        likes: 0,
        comments: Vec::new(),
    }
}

#[test]
fn test_publish_failure_keeps_composer_open() {
    let store = FeedStore::from_posts(vec![text_post(u64::MAX - 1, "edge")]).unwrap();
    let mut h = Harness::with_store(store);

    h.key(KeyCode::Char('i'));
    h.type_text("no room");
    h.key(KeyCode::Enter);

    match h.app.dialog_type() {
        Some(DialogType::Error(message)) => assert!(message.contains("no room for new posts")),
        other => panic!("expected an error dialog, got {:?}", other),
    }
    assert_eq!(h.app.store().len(), 1);
    assert_eq!(h.app.focus(), Focus::Composer);
    assert_eq!(h.app.composer().draft(), "no room");
    assert_ne!(h.app.status_text(), Some(SUCCESS_POST_CREATED));
}

#[test]
fn test_feed_scroll_stays_within_drawable_range() {
    let tall = "line\n".repeat(70_000);
    let store = FeedStore::from_posts(vec![text_post(2, &tall), text_post(1, "below")]).unwrap();
    let mut h = Harness::with_store(store);

    h.key(KeyCode::Char('j'));
    assert_eq!(h.app.feed().selected_post_id(), Some(PostId(1)));
    h.screen();

    assert_eq!(h.app.feed().scroll_offset(), usize::from(u16::MAX));
}
