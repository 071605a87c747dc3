//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Post interaction icons
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub like: &'static str,
    pub liked: &'static str,
    pub comment: &'static str,
    pub share: &'static str,
}

/// Media and composer icons
#[derive(Debug, Clone)]
pub struct MediaIcons {
    pub photo: &'static str,
    pub feeling: &'static str,
    pub palette: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub feed_title: &'static str,
    pub composer_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub actions: ActionIcons,
    pub media: MediaIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            actions: ActionIcons {
                like: "👍",
                liked: "💙",
                comment: "💬",
                share: "🔗",
            },
            media: MediaIcons {
                photo: "🖼️",
                feeling: "😊",
                palette: "🎨",
                copy: "📋",
                copied: "✅",
            },
            ui: UiIcons {
                feed_title: "📰",
                composer_title: "✏️",
                error: "❌",
                info: "💡",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            actions: ActionIcons {
                like: "♡",
                liked: "♥",
                comment: "✉",
                share: "⇪",
            },
            media: MediaIcons {
                photo: "▣",
                feeling: "☺",
                palette: "◐",
                copy: "⧉",
                copied: "✓",
            },
            ui: UiIcons {
                feed_title: "▤",
                composer_title: "✎",
                error: "✗",
                info: "ⓘ",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            actions: ActionIcons {
                like: "+1",
                liked: "<3",
                comment: "#",
                share: "->",
            },
            media: MediaIcons {
                photo: "[img]",
                feeling: ":)",
                palette: "%",
                copy: "[c]",
                copied: "[ok]",
            },
            ui: UiIcons {
                feed_title: ">",
                composer_title: "*",
                error: "X",
                info: "i",
            },
        }
    }

    /// Like button icon for the given state
    #[must_use]
    pub fn like(&self, liked: bool) -> &'static str {
        let actions = self.icons().actions;
        if liked {
            actions.liked
        } else {
            actions.like
        }
    }

    #[must_use]
    pub fn comment(&self) -> &'static str {
        self.icons().actions.comment
    }

    #[must_use]
    pub fn share(&self) -> &'static str {
        self.icons().actions.share
    }

    #[must_use]
    pub fn photo(&self) -> &'static str {
        self.icons().media.photo
    }

    #[must_use]
    pub fn palette(&self) -> &'static str {
        self.icons().media.palette
    }

    /// Copy affordance icon for the given state
    #[must_use]
    pub fn copy(&self, copied: bool) -> &'static str {
        let media = self.icons().media;
        if copied {
            media.copied
        } else {
            media.copy
        }
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }
}
