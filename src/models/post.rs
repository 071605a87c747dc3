use super::comment::Comment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a post. Allocated by the feed store in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display identity of whoever wrote a post
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

impl Author {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }

    /// Character shown in place of the avatar image
    pub fn avatar_fallback(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// A named color palette rendered as a CSS gradient
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    /// CSS gradient expression, e.g. `linear-gradient(135deg, #667eea, #764ba2)`
    #[serde(rename = "gradient")]
    pub css: String,
    pub name: String,
    pub colors: Vec<String>,
}

impl Gradient {
    /// Build a palette whose CSS is a 135deg linear gradient over `colors`
    pub fn linear(name: impl Into<String>, colors: Vec<String>) -> Self {
        let css = format!("linear-gradient(135deg, {})", colors.join(", "));
        Self {
            css,
            name: name.into(),
            colors,
        }
    }
}

/// Media payload of a post. Exactly one kind is ever populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PostContent {
    Text,
    Image { image_url: String },
    Gradient(Gradient),
}

/// Discriminant of [`PostContent`], for display and filtering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PostKind {
    Text,
    Image,
    Gradient,
}

impl PostContent {
    pub fn kind(&self) -> PostKind {
        match self {
            Self::Text => PostKind::Text,
            Self::Image { .. } => PostKind::Image,
            Self::Gradient(_) => PostKind::Gradient,
        }
    }

    /// Whether the content carries media on its own, so an empty description is acceptable
    pub fn has_media(&self) -> bool {
        !matches!(self, Self::Text)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(flatten)]
    pub content: PostContent,
    #[serde(default)]
    pub description: String,
    pub author: Author,
    pub timestamp: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn kind(&self) -> PostKind {
        self.content.kind()
    }

    pub fn gradient(&self) -> Option<&Gradient> {
        match &self.content {
            PostContent::Gradient(gradient) => Some(gradient),
            _ => None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match &self.content {
            PostContent::Image { image_url } => Some(image_url),
            _ => None,
        }
    }
}
