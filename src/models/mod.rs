//! Feed data model: posts, their content kinds and comments.

pub mod comment;
pub mod post;

pub use comment::{Comment, CommentId};
pub use post::{Author, Gradient, Post, PostContent, PostId, PostKind};
