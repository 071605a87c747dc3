//! Layout management and calculations

use crate::composer::ComposerState;
use crate::constants::{COMPOSER_COLLAPSED_HEIGHT, COMPOSER_EXPANDED_HEIGHT, COMPOSER_IMAGE_PREVIEW_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

/// Areas of the main screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub composer: Rect,
    pub feed: Rect,
    pub status: Rect,
}

impl LayoutManager {
    /// Height the composer panel needs in its current state
    #[must_use]
    pub fn composer_height(state: ComposerState, has_image: bool) -> u16 {
        match state {
            ComposerState::Collapsed => COMPOSER_COLLAPSED_HEIGHT,
            ComposerState::Expanded if has_image => COMPOSER_EXPANDED_HEIGHT + COMPOSER_IMAGE_PREVIEW_HEIGHT,
            ComposerState::Expanded => COMPOSER_EXPANDED_HEIGHT,
        }
    }

    /// Split the screen into composer, feed and a one-line status bar.
    ///
    /// The feed column is capped at 100 columns and centered, like a phone-width timeline.
    #[must_use]
    pub fn main_layout(area: Rect, composer_height: u16) -> MainAreas {
        let column_width = area.width.min(100);
        let column = Rect::new(
            area.x + (area.width - column_width) / 2,
            area.y,
            column_width,
            area.height,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(composer_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(column);

        MainAreas {
            composer: chunks[0],
            feed: chunks[1],
            status: chunks[2],
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate help panel dimensions based on screen size
    #[must_use]
    pub fn help_panel_dimensions(screen_width: u16, screen_height: u16) -> (u16, u16) {
        let help_width = if screen_width < 80 { 70 } else { 60 };
        let help_height = if screen_height < 40 { 80 } else { 70 };
        (help_width, help_height)
    }
}
