//! Ephemeral interaction state of one rendered post.
//!
//! A [`PostView`] is created when a post first appears in the feed and is
//! seeded from the post's stored fields. After that it diverges: likes are
//! counted locally and never written back, toggles are plain booleans, and the
//! "copied" confirmation is an expiring [`CopiedToken`] checked against the
//! caller's clock.

use crate::clipboard::{Clipboard, ClipboardError};
use crate::feed::FeedStore;
use crate::models::{Author, CommentId, Post, PostId};
use std::time::{Duration, Instant};

/// A copyable value's position in the palette overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopySlot {
    /// Index into the palette's colors
    Color(usize),
    /// The CSS gradient snippet
    Css,
}

impl CopySlot {
    /// The text this slot copies from `post`, if the post has such a slot
    pub fn value<'a>(&self, post: &'a Post) -> Option<&'a str> {
        let gradient = post.gradient()?;
        match self {
            Self::Color(index) => gradient.colors.get(*index).map(String::as_str),
            Self::Css => Some(gradient.css.as_str()),
        }
    }
}

/// Marks `slot` as copied until `deadline`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopiedToken {
    pub slot: CopySlot,
    pub deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct PostView {
    post_id: PostId,
    liked: bool,
    like_count: u32,
    comments_visible: bool,
    colors_visible: bool,
    comment_draft: String,
    copied: Option<CopiedToken>,
    copied_window: Duration,
}

impl PostView {
    /// Mount a view for `post`
    pub fn new(post: &Post, copied_window: Duration) -> Self {
        Self {
            post_id: post.id,
            liked: false,
            like_count: post.likes,
            comments_visible: false,
            colors_visible: false,
            comment_draft: String::new(),
            copied: None,
            copied_window,
        }
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn like_count(&self) -> u32 {
        self.like_count
    }

    pub fn comments_visible(&self) -> bool {
        self.comments_visible
    }

    pub fn colors_visible(&self) -> bool {
        self.colors_visible
    }

    pub fn comment_draft(&self) -> &str {
        &self.comment_draft
    }

    pub fn toggle_like(&mut self) {
        if self.liked {
            self.like_count = self.like_count.saturating_sub(1);
        } else {
            self.like_count += 1;
        }
        self.liked = !self.liked;
        log::debug!("Post {}: liked={} ({} likes)", self.post_id, self.liked, self.like_count);
    }

    pub fn toggle_comments(&mut self) {
        self.comments_visible = !self.comments_visible;
    }

    /// Show or hide the palette overlay of a gradient post
    pub fn toggle_colors(&mut self) {
        self.colors_visible = !self.colors_visible;
    }

    pub fn update_comment_draft(&mut self, text: impl Into<String>) {
        self.comment_draft = text.into();
    }

    pub fn push_comment_char(&mut self, c: char) {
        self.comment_draft.push(c);
    }

    pub fn pop_comment_char(&mut self) {
        self.comment_draft.pop();
    }

    /// Append the draft as a comment by `author` and clear it.
    ///
    /// Blank drafts are ignored and return `None`.
    pub fn submit_comment(&mut self, feed: &mut FeedStore, author: &Author) -> Option<CommentId> {
        if self.comment_draft.trim().is_empty() {
            return None;
        }

        match feed.add_comment(self.post_id, author, &self.comment_draft) {
            Ok(id) => {
                self.comment_draft.clear();
                Some(id)
            }
            Err(e) => {
                log::warn!("Post {}: comment dropped: {}", self.post_id, e);
                None
            }
        }
    }

    /// Copy `value` and mark `slot` as copied for the configured window.
    ///
    /// A later copy replaces the mark, whichever slot it targets. When the
    /// clipboard write fails nothing is marked.
    pub fn copy(
        &mut self,
        slot: CopySlot,
        value: &str,
        clipboard: &mut dyn Clipboard,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        if let Err(e) = clipboard.copy_text(value) {
            log::warn!("Post {}: copy of {:?} failed: {}", self.post_id, slot, e);
            return Err(e);
        }

        log::info!("Post {}: copied {} ({:?})", self.post_id, value, slot);
        self.copied = Some(CopiedToken {
            slot,
            deadline: now + self.copied_window,
        });
        Ok(())
    }

    pub fn is_copied(&self, slot: CopySlot, now: Instant) -> bool {
        self.copied
            .is_some_and(|token| token.slot == slot && now < token.deadline)
    }

    /// The slot currently shown as copied, if any
    pub fn copied_slot(&self, now: Instant) -> Option<CopySlot> {
        self.copied.filter(|token| now < token.deadline).map(|token| token.slot)
    }

    /// Drop the copied mark once its deadline has passed.
    ///
    /// Returns `true` when a mark was cleared, so the caller knows to redraw.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.copied {
            Some(token) if now >= token.deadline => {
                self.copied = None;
                true
            }
            _ => false,
        }
    }
}
