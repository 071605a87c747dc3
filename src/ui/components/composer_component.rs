//! The "create post" panel at the top of the feed.

use crate::composer::{Composer, ComposerState};
use crate::constants::{COMPOSER_PLACEHOLDER, COMPOSER_TITLE, FEELING_LABEL, PHOTO_LABEL};
use crate::icons::IconService;
use crate::ui::components::dialogs::common::{create_instructions_line, CURSOR};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::text::truncate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub struct ComposerComponent {
    pub composer: Composer,
    pub focused: bool,
    pub icons: IconService,
    show_avatars: bool,
}

impl ComposerComponent {
    pub fn new(composer: Composer, icons: IconService, show_avatars: bool) -> Self {
        Self {
            composer,
            focused: false,
            icons,
            show_avatars,
        }
    }

    fn avatar_prefix(&self) -> String {
        if self.show_avatars {
            format!("({}) ", self.composer.author().avatar_fallback())
        } else {
            String::new()
        }
    }

    fn render_collapsed(&self, f: &mut Frame, inner: Rect) {
        let prompt = Line::from(vec![
            Span::styled(self.avatar_prefix(), Style::default().fg(Color::Cyan)),
            Span::styled(COMPOSER_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ]);
        let affordances = Line::from(vec![
            Span::styled(
                format!("{} {}", self.icons.photo(), PHOTO_LABEL),
                Style::default().fg(Color::Green),
            ),
            Span::styled(" (p)", Style::default().fg(Color::DarkGray)),
            Span::raw("   "),
            Span::styled(
                format!("{} {}", self.icons.icons().media.feeling, FEELING_LABEL),
                Style::default().fg(Color::Yellow),
            ),
        ]);

        f.render_widget(Paragraph::new(vec![prompt, affordances]), inner);
    }

    fn render_expanded(&self, f: &mut Frame, inner: Rect) {
        let has_image = self.composer.image().is_some();
        let mut constraints = vec![Constraint::Min(1)];
        if has_image {
            constraints.push(Constraint::Length(2));
        }
        constraints.push(Constraint::Length(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let draft = self.composer.draft();
        let mut text = vec![Span::styled(self.avatar_prefix(), Style::default().fg(Color::Cyan))];
        if draft.is_empty() && !self.focused {
            text.push(Span::styled(COMPOSER_PLACEHOLDER, Style::default().fg(Color::DarkGray)));
        } else {
            text.push(Span::styled(draft.to_string(), Style::default().fg(Color::White)));
            if self.focused {
                text.push(Span::styled(CURSOR, Style::default().fg(Color::Gray)));
            }
        }
        f.render_widget(Paragraph::new(Line::from(text)).wrap(Wrap { trim: false }), chunks[0]);

        if let Some(image) = self.composer.image() {
            let name_width = chunks[1].width.saturating_sub(20) as usize;
            let preview = vec![
                Line::from(vec![
                    Span::styled(format!("{} ", self.icons.photo()), Style::default().fg(Color::Green)),
                    Span::styled(truncate(&image.file_name, name_width), Style::default().fg(Color::White)),
                    Span::styled(
                        format!("  {} · {} KiB", image.mime.essence_str(), image.byte_len.div_ceil(1024)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled("Ctrl+X removes the photo", Style::default().fg(Color::DarkGray))),
            ];
            f.render_widget(Paragraph::new(preview), chunks[1]);
        }

        let post_color = if self.composer.can_submit() {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let buttons = create_instructions_line(&[
            ("Ctrl+O", Color::Green, " Photo   "),
            ("Esc", Color::Red, " Cancel   "),
            ("Enter", post_color, " Post"),
        ]);
        f.render_widget(Paragraph::new(buttons), chunks[chunks.len() - 1]);
    }
}

impl Component for ComposerComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('o') => Action::ShowDialog(DialogType::AttachImage),
                KeyCode::Char('x') => Action::RemoveImage,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => Action::CancelDraft,
            KeyCode::Enter => Action::SubmitPost,
            KeyCode::Backspace => {
                self.composer.pop_char();
                Action::None
            }
            KeyCode::Char(c) => {
                self.composer.push_char(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::FocusComposer => {
                self.focused = true;
                self.composer.expand();
                action
            }
            Action::FocusFeed => {
                self.focused = false;
                action
            }
            Action::RemoveImage => {
                self.composer.remove_image();
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let title = format!(" {} {} ", self.icons.icons().ui.composer_title, COMPOSER_TITLE);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        match self.composer.state() {
            ComposerState::Collapsed => self.render_collapsed(f, inner),
            ComposerState::Expanded => self.render_expanded(f, inner),
        }
    }
}
