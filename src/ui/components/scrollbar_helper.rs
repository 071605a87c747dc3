//! Scrollbar shared by line-scrolled panes.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Tracks the scrollbar of a pane whose content is a list of lines
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Sync the thumb with `total_lines` of content scrolled to `offset`
    pub fn update_state(&mut self, total_lines: usize, offset: usize, viewport_height: usize) {
        self.state = self
            .state
            .content_length(total_lines.saturating_sub(viewport_height) + 1)
            .viewport_content_length(viewport_height)
            .position(offset);
    }

    pub fn needs_scrollbar(total_lines: usize, available_height: usize) -> bool {
        total_lines > available_height
    }

    /// Split a bordered `rect` into content and, when needed, a one column
    /// scrollbar inside the right border
    pub fn calculate_areas(rect: Rect, total_lines: usize) -> (Rect, Option<Rect>) {
        let available_height = rect.height.saturating_sub(2) as usize;
        if !Self::needs_scrollbar(total_lines, available_height) {
            return (rect, None);
        }

        let content_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        (content_area, Some(scrollbar_area))
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
