//! Post composer: draft text, an optional attached image, and submission.
//!
//! The composer starts [`ComposerState::Collapsed`]. Focusing it or attaching
//! an image expands it; cancelling or a successful submit collapses it again
//! and clears the draft. Submitting an empty draft (blank text and no image)
//! is rejected here rather than only by the UI.

use crate::constants::JUST_NOW;
use crate::feed::{FeedError, FeedStore};
use crate::media::{decode_image, AttachedImage, MediaError};
use crate::models::{Author, Post, PostContent, PostId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerState {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone)]
pub struct Composer {
    state: ComposerState,
    draft: String,
    image: Option<AttachedImage>,
    author: Author,
    max_image_bytes: usize,
}

impl Composer {
    pub fn new(author: Author, max_image_bytes: usize) -> Self {
        Self {
            state: ComposerState::Collapsed,
            draft: String::new(),
            image: None,
            author,
            max_image_bytes,
        }
    }

    pub fn state(&self) -> ComposerState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state == ComposerState::Expanded
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn image(&self) -> Option<&AttachedImage> {
        self.image.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    /// Focus the composer
    pub fn expand(&mut self) {
        self.state = ComposerState::Expanded;
    }

    /// Decode `bytes` and attach them as the draft image.
    ///
    /// On failure the composer is left exactly as it was.
    pub fn attach_image(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), MediaError> {
        let image = decode_image(file_name, bytes, self.max_image_bytes)?;
        log::info!("Composer: attached {} ({})", image.file_name, image.mime);
        self.image = Some(image);
        self.state = ComposerState::Expanded;
        Ok(())
    }

    pub fn update_text(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    pub fn remove_image(&mut self) {
        if let Some(image) = self.image.take() {
            log::info!("Composer: removed {}", image.file_name);
        }
    }

    /// Whether [`Composer::submit`] would publish a post
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty() || self.image.is_some()
    }

    /// Publish the draft to `feed` and reset.
    ///
    /// Returns the new post id, or `None` when the draft is empty. On error
    /// the draft is kept.
    pub fn submit(&mut self, feed: &mut FeedStore) -> Result<Option<PostId>, FeedError> {
        if !self.can_submit() {
            log::debug!("Composer: ignoring submit of an empty draft");
            return Ok(None);
        }

        let content = match &self.image {
            Some(image) => PostContent::Image {
                image_url: image.data_uri.clone(),
            },
            None => PostContent::Text,
        };

        let id = feed.allocate_id()?;
        feed.append(Post {
            id,
            content,
            description: self.draft.clone(),
            author: self.author.clone(),
            timestamp: JUST_NOW.to_string(),
            likes: 0,
            comments: Vec::new(),
        })?;

        self.draft.clear();
        self.image = None;
        self.state = ComposerState::Collapsed;
        Ok(Some(id))
    }

    /// Discard the draft and collapse
    pub fn cancel(&mut self) {
        self.draft.clear();
        self.image = None;
        self.state = ComposerState::Collapsed;
    }
}
