//! The scrollable list of posts.
//!
//! The feed renders the latest [`FeedSnapshot`] and keeps one [`PostView`]
//! per post for like, comment and palette state. Views are mounted the first
//! time a post appears and survive snapshot refreshes.

use crate::clipboard::Clipboard;
use crate::clock::Clock;
use crate::config::DisplayConfig;
use crate::feed::FeedSnapshot;
use crate::icons::IconService;
use crate::models::{Post, PostId};
use crate::post_view::{CopySlot, PostView};
use crate::ui::components::post_card::{post_card_lines, CardContext, MAX_COLOR_SLOTS};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub struct FeedComponent {
    snapshot: FeedSnapshot,
    views: HashMap<PostId, PostView>,
    selected: usize,
    commenting: Option<PostId>,
    clipboard: Box<dyn Clipboard>,
    clock: Arc<dyn Clock>,
    pub icons: IconService,
    display: DisplayConfig,
    copied_window: Duration,
    scroll_offset: usize,
    scrollbar: ScrollbarHelper,
}

impl FeedComponent {
    pub fn new(
        snapshot: FeedSnapshot,
        clipboard: Box<dyn Clipboard>,
        clock: Arc<dyn Clock>,
        icons: IconService,
        display: DisplayConfig,
        copied_window: Duration,
    ) -> Self {
        let mut feed = Self {
            snapshot: FeedSnapshot::default(),
            views: HashMap::new(),
            selected: 0,
            commenting: None,
            clipboard,
            clock,
            icons,
            display,
            copied_window,
            scroll_offset: 0,
            scrollbar: ScrollbarHelper::new(),
        };
        feed.set_snapshot(snapshot);
        feed
    }

    /// Show a newer snapshot, keeping the selection on the same post
    pub fn set_snapshot(&mut self, snapshot: FeedSnapshot) {
        let selected_id = self.selected_post_id();

        for post in snapshot.posts() {
            self.views
                .entry(post.id)
                .or_insert_with(|| PostView::new(post, self.copied_window));
        }
        self.snapshot = snapshot;

        self.selected = selected_id
            .and_then(|id| self.snapshot.posts().iter().position(|post| post.id == id))
            .unwrap_or(0)
            .min(self.snapshot.len().saturating_sub(1));
    }

    pub fn posts(&self) -> &[Post] {
        self.snapshot.posts()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.snapshot.posts().get(self.selected)
    }

    /// Move the selection to `id` if it is in the feed
    pub fn select_post(&mut self, id: PostId) {
        if let Some(index) = self.snapshot.posts().iter().position(|post| post.id == id) {
            self.selected = index;
        }
    }

    pub fn selected_post_id(&self) -> Option<PostId> {
        self.selected_post().map(|post| post.id)
    }

    /// First feed line shown, as of the last render
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn view(&self, id: PostId) -> Option<&PostView> {
        self.views.get(&id)
    }

    pub fn view_mut(&mut self, id: PostId) -> Option<&mut PostView> {
        self.views.get_mut(&id)
    }

    /// Post whose comment input has keyboard focus
    pub fn commenting(&self) -> Option<PostId> {
        self.commenting
    }

    /// Whether plain key presses are going into a text field
    pub fn is_capturing_text(&self) -> bool {
        self.commenting.is_some()
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.snapshot.len() {
            self.selected += 1;
        }
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn copy_slot(&mut self, post_id: PostId, slot: CopySlot) -> Action {
        let Some(value) = self.snapshot.get(post_id).and_then(|post| slot.value(post)) else {
            return Action::None;
        };
        let value = value.to_string();
        let now = self.clock.now();

        let Some(view) = self.views.get_mut(&post_id) else {
            return Action::None;
        };
        // Failures are logged by the view; the indicator simply stays off
        let _ = view.copy(slot, &value, self.clipboard.as_mut(), now);
        Action::None
    }

    fn handle_comment_keys(&mut self, post_id: PostId, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.commenting = None;
                Action::None
            }
            KeyCode::Enter => Action::SubmitComment(post_id),
            KeyCode::Backspace => {
                if let Some(view) = self.views.get_mut(&post_id) {
                    view.pop_comment_char();
                }
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(view) = self.views.get_mut(&post_id) {
                    view.push_comment_char(c);
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn colors_visible(&self, post_id: PostId) -> bool {
        self.views.get(&post_id).is_some_and(PostView::colors_visible)
    }

    /// Flatten every card into lines, returning the first line of each card too
    fn build_lines(&self, width: u16) -> (Vec<Line<'static>>, Vec<usize>) {
        let now = self.clock.now();
        let mut lines = Vec::new();
        let mut starts = Vec::with_capacity(self.snapshot.len());

        for (index, post) in self.snapshot.posts().iter().enumerate() {
            let Some(view) = self.views.get(&post.id) else {
                continue;
            };
            let selected = index == self.selected;
            let ctx = CardContext {
                icons: &self.icons,
                width: width.saturating_sub(2),
                show_avatars: self.display.show_avatars,
                show_timestamps: self.display.show_timestamps,
                selected,
                commenting: self.commenting == Some(post.id),
                now,
            };

            starts.push(lines.len());
            let marker = if selected {
                Span::styled("▌ ", Style::default().fg(Color::Cyan))
            } else {
                Span::raw("  ")
            };
            for line in post_card_lines(&ctx, post, view) {
                let mut spans = vec![marker.clone()];
                spans.extend(line.spans);
                lines.push(Line::from(spans));
            }
        }

        (lines, starts)
    }

    /// Scroll just enough to show the selected card, top first
    fn scroll_to_selection(&mut self, starts: &[usize], total_lines: usize, viewport: usize) {
        let Some(&start) = starts.get(self.selected) else {
            self.scroll_offset = 0;
            return;
        };
        let end = starts.get(self.selected + 1).copied().unwrap_or(total_lines);

        if start < self.scroll_offset {
            self.scroll_offset = start;
        } else if end > self.scroll_offset + viewport {
            self.scroll_offset = end.saturating_sub(viewport).min(start);
        }
        // Paragraph scrolling stops at u16::MAX
        self.scroll_offset = self
            .scroll_offset
            .min(total_lines.saturating_sub(viewport))
            .min(usize::from(u16::MAX));
    }
}

impl Component for FeedComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(post_id) = self.commenting {
            return self.handle_comment_keys(post_id, key);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::None;
        }
        let Some(post_id) = self.selected_post_id() else {
            return Action::None;
        };

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => Action::NextPost,
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousPost,
            KeyCode::Char('l') => Action::ToggleLike(post_id),
            KeyCode::Char('c') => Action::ToggleComments(post_id),
            KeyCode::Char('r') => Action::StartComment(post_id),
            KeyCode::Char('v') if self.selected_post().is_some_and(|post| post.gradient().is_some()) => {
                Action::ToggleColors(post_id)
            }
            KeyCode::Char('y') if self.colors_visible(post_id) => Action::CopySlot {
                post_id,
                slot: CopySlot::Css,
            },
            KeyCode::Char(c @ '1'..='9') if self.colors_visible(post_id) => {
                let index = (c as usize) - ('1' as usize);
                if index < MAX_COLOR_SLOTS {
                    Action::CopySlot {
                        post_id,
                        slot: CopySlot::Color(index),
                    }
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextPost => {
                self.select_next();
                Action::None
            }
            Action::PreviousPost => {
                self.select_previous();
                Action::None
            }
            Action::ToggleLike(post_id) => {
                if let Some(view) = self.views.get_mut(&post_id) {
                    view.toggle_like();
                }
                Action::None
            }
            Action::ToggleComments(post_id) => {
                if let Some(view) = self.views.get_mut(&post_id) {
                    view.toggle_comments();
                    if !view.comments_visible() && self.commenting == Some(post_id) {
                        self.commenting = None;
                    }
                }
                Action::None
            }
            Action::ToggleColors(post_id) => {
                if let Some(view) = self.views.get_mut(&post_id) {
                    view.toggle_colors();
                }
                Action::None
            }
            Action::StartComment(post_id) => {
                if let Some(view) = self.views.get_mut(&post_id) {
                    if !view.comments_visible() {
                        view.toggle_comments();
                    }
                    self.commenting = Some(post_id);
                }
                Action::None
            }
            Action::CopySlot { post_id, slot } => self.copy_slot(post_id, slot),
            Action::FocusComposer => {
                self.commenting = None;
                action
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                action
            }
            _ => action,
        }
    }

    /// Clear expired "copied" marks
    fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;
        for view in self.views.values_mut() {
            changed |= view.expire(now);
        }
        changed
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(
            " {} Feed · {} ",
            self.icons.icons().ui.feed_title,
            crate::utils::text::pluralize(self.snapshot.len(), "post")
        );
        let border_color = if self.commenting.is_some() { Color::Cyan } else { Color::Gray };
        let viewport = rect.height.saturating_sub(2) as usize;

        let (lines, starts) = self.build_lines(rect.width.saturating_sub(3));
        let total_lines = lines.len();
        self.scroll_to_selection(&starts, total_lines, viewport);

        let (content_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_lines);
        self.scrollbar.update_state(total_lines, self.scroll_offset, viewport);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(border_color));

        let body = if lines.is_empty() {
            vec![Line::from(Span::styled(
                "  Nothing here yet. Press i to write the first post.",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            lines
        };

        let paragraph = Paragraph::new(body)
            .block(block)
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));
        f.render_widget(paragraph, content_area);
        self.scrollbar.render(f, scrollbar_area);
    }
}
