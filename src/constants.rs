//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Local user identity
pub const LOCAL_USER_NAME: &str = "You";
pub const LOCAL_USER_AVATAR: &str = "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=150&h=150&fit=crop";

// Timestamps
pub const JUST_NOW: &str = "Just now";

// Composer
pub const COMPOSER_PLACEHOLDER: &str = "What's on your mind?";
pub const COMPOSER_TITLE: &str = "Create post";
pub const PHOTO_LABEL: &str = "Photo";
pub const FEELING_LABEL: &str = "Feeling";
pub const ATTACH_DIALOG_TITLE: &str = "Attach photo";
/// Default cap on attached image size (10 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

// Post interactions
pub const COMMENT_PLACEHOLDER: &str = "Write a comment...";
pub const COPIED_LABEL: &str = "Copied!";
/// Default lifetime of the "copied" indicator in milliseconds
pub const DEFAULT_COPIED_INDICATOR_MS: u64 = 2000;
/// Accepted range for `clipboard.copied_indicator_ms`
pub const COPIED_INDICATOR_MIN_MS: u64 = 100;
pub const COPIED_INDICATOR_MAX_MS: u64 = 60_000;

// Success Messages
pub const SUCCESS_POST_CREATED: &str = "✅ Post published";
pub const SUCCESS_IMAGE_ATTACHED: &str = "✅ Photo attached";

// Error Messages
pub const ERROR_IMAGE_ATTACH_FAILED: &str = "❌ Could not attach photo";
pub const ERROR_POST_FAILED: &str = "❌ Could not publish post";
pub const ERROR_CLIPBOARD_UNAVAILABLE: &str = "❌ Clipboard unavailable";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// Logging
/// Number of log lines kept in memory for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 500;
pub const LOG_FILE_NAME: &str = "gradient-feed.log";

// UI Layout Constants
/// Height of the composer panel while collapsed
pub const COMPOSER_COLLAPSED_HEIGHT: u16 = 4;
/// Height of the composer panel while expanded without an image
pub const COMPOSER_EXPANDED_HEIGHT: u16 = 8;
/// Extra composer height used to preview an attached image
pub const COMPOSER_IMAGE_PREVIEW_HEIGHT: u16 = 2;
/// How long a status bar message stays up
pub const STATUS_MESSAGE_MS: u64 = 3000;
