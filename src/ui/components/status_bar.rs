//! Status bar component

use crate::ui::core::Focus;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// What the status bar reflects on this frame
pub struct StatusInfo<'a> {
    pub focus: Focus,
    pub commenting: bool,
    pub loading_image: bool,
    pub message: Option<&'a str>,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    pub fn text(info: &StatusInfo) -> String {
        if info.loading_image {
            return "⟳ Loading photo...".to_string();
        }
        if let Some(message) = info.message {
            return message.to_string();
        }

        match (info.focus, info.commenting) {
            (Focus::Composer, _) => "Enter: post • Ctrl+O: photo • Ctrl+X: remove photo • Esc: cancel".to_string(),
            (Focus::Feed, true) => "Enter: send comment • Esc: stop commenting".to_string(),
            (Focus::Feed, false) => "i: new post • j/k: move • l: like • c: comments • v: colors • ?: help • q: quit".to_string(),
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, info: &StatusInfo) {
        let status_color = if info.loading_image {
            Color::Yellow
        } else if info.message.is_some() {
            Color::Green
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(Self::text(info))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
