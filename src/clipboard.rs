//! Clipboard helpers for copying palette values
//!
//! [`SystemClipboard`] uses the `arboard` crate for cross-platform support
//! (Windows, macOS, Linux). The OS clipboard is opened fresh for each copy to
//! avoid holding resources. [`MemoryClipboard`] records copies in memory.

use arboard::Clipboard as OsClipboard;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard: {0}")]
    Unavailable(String),
    #[error("failed to set clipboard text: {0}")]
    Write(String),
    #[error("clipboard is disabled in the configuration")]
    Disabled,
}

/// Write-only "copy text" capability
pub trait Clipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = OsClipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        Ok(())
    }
}

/// Clipboard that refuses every write, used when `clipboard.enabled = false`
#[derive(Debug, Default)]
pub struct DisabledClipboard;

impl Clipboard for DisabledClipboard {
    fn copy_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Disabled)
    }
}

/// In-memory clipboard. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently copied text
    pub fn contents(&self) -> Option<String> {
        self.history.lock().ok().and_then(|history| history.last().cloned())
    }

    /// Every copy in order
    pub fn history(&self) -> Vec<String> {
        self.history.lock().map(|history| history.clone()).unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut history = self
            .history
            .lock()
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        history.push(text.to_string());
        Ok(())
    }
}
