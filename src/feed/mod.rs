//! The feed store.
//!
//! [`FeedStore`] owns the ordered list of posts (most recent first) and is the
//! only place posts and comments are created. Every mutation publishes a new
//! read-only [`FeedSnapshot`] to subscribers through a `tokio::sync::watch`
//! channel, which is how the UI learns it has to redraw.

mod seed;

use crate::constants::JUST_NOW;
use crate::models::{Author, Comment, CommentId, Post, PostId};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

pub use seed::seed_posts;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeedError {
    #[error("post {0} is not in the feed")]
    UnknownPost(PostId),
    #[error("post {0} has neither a description nor media")]
    EmptyPost(PostId),
    #[error("post id {0} is used more than once")]
    DuplicateId(PostId),
    #[error("post id {0} leaves no room for new posts")]
    IdsExhausted(PostId),
    #[error("post {0} has no room for new comments")]
    CommentIdsExhausted(PostId),
}

/// Id that follows `id`, if there is one
fn successor(id: PostId) -> Result<u64, FeedError> {
    id.0.checked_add(1).ok_or(FeedError::IdsExhausted(id))
}

fn check_content(post: &Post) -> Result<(), FeedError> {
    if post.description.trim().is_empty() && !post.content.has_media() {
        return Err(FeedError::EmptyPost(post.id));
    }
    Ok(())
}

/// Immutable view of the feed at one point in time
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    posts: Arc<Vec<Post>>,
}

impl FeedSnapshot {
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }
}

pub struct FeedStore {
    posts: Vec<Post>,
    next_post_id: u64,
    snapshot_tx: watch::Sender<FeedSnapshot>,
}

impl FeedStore {
    /// Build a store holding `posts`, given most recent first.
    ///
    /// Rejects posts without content, repeated ids and ids too large to
    /// leave room for another post.
    pub fn from_posts(posts: Vec<Post>) -> Result<Self, FeedError> {
        let mut seen = HashSet::with_capacity(posts.len());
        let mut next_post_id = 1;
        for post in &posts {
            check_content(post)?;
            if !seen.insert(post.id) {
                return Err(FeedError::DuplicateId(post.id));
            }
            next_post_id = next_post_id.max(successor(post.id)?);
        }
        Ok(Self::with_next_id(posts, next_post_id))
    }

    fn with_next_id(posts: Vec<Post>, next_post_id: u64) -> Self {
        let (snapshot_tx, _) = watch::channel(FeedSnapshot {
            posts: Arc::new(posts.clone()),
        });

        Self {
            posts,
            next_post_id,
            snapshot_tx,
        }
    }

    /// The feed shown at startup
    pub fn initial() -> Self {
        Self::from_posts(seed_posts()).unwrap_or_else(|e| {
            log::error!("Built-in feed is invalid: {}", e);
            Self::with_next_id(Vec::new(), 1)
        })
    }

    /// Load the startup feed from a JSON array of posts
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read seed file: {}", path.as_ref().display()))?;
        let posts: Vec<Post> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse seed file: {}", path.as_ref().display()))?;
        let store = Self::from_posts(posts)
            .with_context(|| format!("Invalid seed file: {}", path.as_ref().display()))?;

        log::info!("Loaded {} posts from {}", store.len(), path.as_ref().display());
        Ok(store)
    }

    /// Reserve the id for a post about to be created
    pub fn allocate_id(&mut self) -> Result<PostId, FeedError> {
        let id = PostId(self.next_post_id);
        self.next_post_id = successor(id)?;
        Ok(id)
    }

    /// Insert `post` at the head of the feed
    pub fn append(&mut self, post: Post) -> Result<(), FeedError> {
        check_content(&post)?;
        if self.get(post.id).is_some() {
            return Err(FeedError::DuplicateId(post.id));
        }
        self.next_post_id = self.next_post_id.max(successor(post.id)?);

        log::info!("Feed: appended post {} by {} ({:?})", post.id, post.author.name, post.kind());
        self.posts.insert(0, post);
        self.publish();
        Ok(())
    }

    /// Append a comment to the tail of a post's comment sequence
    pub fn add_comment(&mut self, post_id: PostId, author: &Author, text: &str) -> Result<CommentId, FeedError> {
        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or(FeedError::UnknownPost(post_id))?;

        let id = post
            .comments
            .iter()
            .map(|comment| comment.id.0)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .map(CommentId)
            .ok_or(FeedError::CommentIdsExhausted(post_id))?;
        post.comments.push(Comment {
            id,
            author: author.name.clone(),
            avatar: author.avatar.clone(),
            text: text.to_string(),
            timestamp: JUST_NOW.to_string(),
        });
        log::info!("Feed: comment {} added to post {}", id, post_id);

        self.publish();
        Ok(id)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Receive a fresh snapshot after every mutation
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.snapshot_tx.subscribe()
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(FeedSnapshot {
            posts: Arc::new(self.posts.clone()),
        });
    }
}

impl Default for FeedStore {
    fn default() -> Self {
        Self::initial()
    }
}
