//! Gradient Feed - a terminal social feed
//!
//! This library holds the client-local state of a small social feed: a post
//! composer, the ordered list of posts, per-post like/comment interaction
//! state and the gradient palette posts whose colors can be copied to the
//! clipboard. The [`ui`] module renders all of it with Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`feed`] - The feed store and its snapshots
//! * [`composer`] - Draft text/image handling and post submission
//! * [`post_view`] - Ephemeral per-post interaction state
//! * [`ui`] - Terminal user interface components

/// Clipboard access for copying palette values
pub mod clipboard;

/// Time source used by expiring UI state
pub mod clock;

/// The post composer state machine
pub mod composer;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// The feed store
pub mod feed;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Image decoding for composer attachments
pub mod media;

/// Feed data model
pub mod models;

/// Per-post view state
pub mod post_view;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colors and labels
pub mod utils;

pub use models::{Author, Comment, CommentId, Gradient, Post, PostContent, PostId};
