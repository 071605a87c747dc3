use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a comment, unique within its parent post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub avatar: String,
    pub text: String,
    pub timestamp: String,
}

impl Comment {
    /// Character shown in place of the avatar image
    pub fn avatar_fallback(&self) -> char {
        self.author.chars().next().unwrap_or('?')
    }
}
