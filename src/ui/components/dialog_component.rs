//! Modal dialog component.
//!
//! Hosts one dialog at a time: the attach-photo path prompt, the keyboard
//! reference, the log viewer, and info/error messages. While a dialog is
//! visible it receives every key press.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{attach_dialog, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};
use std::path::PathBuf;

const PAGE_SIZE: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub icons: IconService,
    pub logger: Logger,
    pub max_image_bytes: usize,
    // Scrolling support for long content dialogs
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl DialogComponent {
    pub fn new(icons: IconService, logger: Logger, max_image_bytes: usize) -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            icons,
            logger,
            max_image_bytes,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn submit_path(&mut self) -> Action {
        let path = self.input_buffer.trim();
        if path.is_empty() {
            return Action::None;
        }

        let action = Action::AttachImage(PathBuf::from(path));
        self.clear_dialog();
        action
    }

    // Render clamps the offset to the content height
    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
    }

    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(PAGE_SIZE as isize)),
            KeyCode::PageDown => self.scroll_by(PAGE_SIZE as isize),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::End => self.scroll_offset = usize::MAX,
            _ => {}
        }
        Action::None
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::AttachImage) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.submit_path(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                    Action::None
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input_buffer.clear();
                    Action::None
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::Error(_)) | Some(DialogType::Info(_)) => match key.code {
                KeyCode::Esc | KeyCode::Enter => Action::HideDialog,
                _ => self.handle_scroll_keys(key),
            },
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => self.handle_scroll_keys(key),
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => self.handle_scroll_keys(key),
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                Action::CycleIconTheme
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::AttachImage => {
                attach_dialog::render_attach_dialog(f, rect, &self.icons, &self.input_buffer, self.max_image_bytes)
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, &mut self.scroll_offset, &mut self.scrollbar_state),
            DialogType::Logs => {
                system_dialogs::render_logs_dialog(f, rect, &self.logger, &mut self.scroll_offset, &mut self.scrollbar_state)
            }
            DialogType::Info(message) => system_dialogs::render_info_dialog(
                f,
                rect,
                &self.icons,
                &message,
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            DialogType::Error(message) => system_dialogs::render_error_dialog(
                f,
                rect,
                &self.icons,
                &message,
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
            ),
        }
    }
}
