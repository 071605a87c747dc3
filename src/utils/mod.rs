//! Utility modules for the Gradient Feed application.
//!
//! - [`color`] - Parsing CSS color strings into terminal colors
//! - [`text`] - Small label formatting helpers

pub mod color;
pub mod text;
