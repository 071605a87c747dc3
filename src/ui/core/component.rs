use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A region of the screen that turns key presses into [`Action`]s.
///
/// Every dispatched action flows through each component's `update`. A
/// component that consumes an action returns [`Action::None`], otherwise it
/// hands the action on.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn update(&mut self, action: Action) -> Action {
        action
    }

    /// Expire time-based state. Returns `true` when a redraw is needed.
    fn tick(&mut self) -> bool {
        false
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
