use crate::clipboard::Clipboard;
use crate::clock::Clock;
use crate::composer::Composer;
use crate::config::Config;
use crate::constants::{
    ERROR_IMAGE_ATTACH_FAILED, ERROR_POST_FAILED, STATUS_MESSAGE_MS, SUCCESS_IMAGE_ATTACHED, SUCCESS_POST_CREATED,
};
use crate::feed::{FeedSnapshot, FeedStore};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::media;
use crate::models::Author;
use crate::ui::components::{ComposerComponent, DialogComponent, FeedComponent, StatusBar, StatusInfo};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};

/// Transient message shown in the status bar
struct StatusMessage {
    text: String,
    until: Instant,
}

pub struct AppComponent {
    // Component composition
    composer: ComposerComponent,
    feed: FeedComponent,
    dialog: DialogComponent,

    // Application state
    store: FeedStore,
    feed_rx: watch::Receiver<FeedSnapshot>,
    focus: Focus,
    author: Author,
    max_image_bytes: usize,
    status_message: Option<StatusMessage>,

    // Services
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    clock: Arc<dyn Clock>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(
        store: FeedStore,
        config: &Config,
        logger: Logger,
        clipboard: Box<dyn Clipboard>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let icons = IconService::new(config.display.icon_theme);
        let author = config.profile.author();
        let max_image_bytes = config.composer.max_image_bytes;
        let (task_manager, background_action_rx) = TaskManager::new();

        let feed_rx = store.subscribe();
        let feed = FeedComponent::new(
            store.snapshot(),
            clipboard,
            clock.clone(),
            icons.clone(),
            config.display.clone(),
            config.clipboard.copied_window(),
        );
        let composer = ComposerComponent::new(
            Composer::new(author.clone(), max_image_bytes),
            icons.clone(),
            config.display.show_avatars,
        );

        Self {
            composer,
            feed,
            dialog: DialogComponent::new(icons, logger, max_image_bytes),
            store,
            feed_rx,
            focus: Focus::Feed,
            author,
            max_image_bytes,
            status_message: None,
            task_manager,
            background_action_rx,
            clock,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn store(&self) -> &FeedStore {
        &self.store
    }

    pub fn composer(&self) -> &Composer {
        &self.composer.composer
    }

    pub fn feed(&self) -> &FeedComponent {
        &self.feed
    }

    pub fn dialog_type(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status_message.as_ref().map(|message| message.text.as_str())
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Route a key press to the component that owns it
    fn route_key(&mut self, key: KeyEvent) -> Action {
        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.focus {
            // The composer takes every key while focused
            Focus::Composer => self.composer.handle_key_events(key),
            Focus::Feed if self.feed.is_capturing_text() => self.feed.handle_key_events(key),
            Focus::Feed => {
                let feed_action = self.feed.handle_key_events(key);
                if !matches!(feed_action, Action::None) {
                    feed_action
                } else {
                    self.handle_global_key(key)
                }
            }
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('o') => Action::ShowDialog(DialogType::AttachImage),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('i') => Action::FocusComposer,
            KeyCode::Char('p') => Action::ShowDialog(DialogType::AttachImage),
            KeyCode::Char('T') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Process an action through the component hierarchy, then at app level
    pub fn dispatch(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.composer.update(action);
        let action = self.feed.update(action);

        let result = self.handle_app_action(action);
        self.refresh_feed();
        result
    }

    /// Handle what the components left over
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::FocusComposer => {
                self.focus = Focus::Composer;
                Action::None
            }
            Action::FocusFeed => {
                self.focus = Focus::Feed;
                Action::None
            }
            Action::SubmitPost => {
                match self.composer.composer.submit(&mut self.store) {
                    Ok(Some(post_id)) => {
                        self.refresh_feed();
                        self.feed.select_post(post_id);
                        self.leave_composer();
                        self.set_status(SUCCESS_POST_CREATED);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        log::error!("Could not publish post: {}", e);
                        self.show_error(format!("{}: {}", ERROR_POST_FAILED, e));
                    }
                }
                Action::None
            }
            Action::CancelDraft => {
                self.composer.composer.cancel();
                self.leave_composer();
                Action::None
            }
            Action::AttachImage(path) => {
                log::info!("Loading image {}", path.display());
                self.task_manager.spawn_image_load(path, self.max_image_bytes);
                Action::None
            }
            Action::ImageLoaded { path, bytes } => {
                let file_name = media::display_name(&path);
                match self.composer.composer.attach_image(&file_name, &bytes) {
                    Ok(()) => {
                        self.dispatch(Action::FocusComposer);
                        self.set_status(SUCCESS_IMAGE_ATTACHED);
                    }
                    Err(e) => {
                        log::warn!("Could not attach {}: {}", path.display(), e);
                        self.show_error(format!("{}: {}", ERROR_IMAGE_ATTACH_FAILED, e));
                    }
                }
                Action::None
            }
            Action::ImageLoadFailed { path, error } => {
                log::warn!("Could not read {}: {}", path.display(), error);
                self.show_error(format!("{}: {}", ERROR_IMAGE_ATTACH_FAILED, error));
                Action::None
            }
            Action::SubmitComment(post_id) => {
                if let Some(view) = self.feed.view_mut(post_id) {
                    view.submit_comment(&mut self.store, &self.author);
                }
                Action::None
            }
            Action::Quit => {
                log::info!("Quitting");
                self.should_quit = true;
                Action::Quit
            }
            _ => Action::None,
        }
    }

    fn leave_composer(&mut self) {
        if self.focus == Focus::Composer {
            self.dispatch(Action::FocusFeed);
        }
    }

    fn show_error(&mut self, message: String) {
        self.dialog.update(Action::ShowDialog(DialogType::Error(message)));
    }

    fn set_status(&mut self, text: &str) {
        self.status_message = Some(StatusMessage {
            text: text.to_string(),
            until: self.clock.now() + Duration::from_millis(STATUS_MESSAGE_MS),
        });
    }

    /// Pick up the latest feed snapshot if the store changed
    fn refresh_feed(&mut self) {
        if self.feed_rx.has_changed().unwrap_or(false) {
            let snapshot = self.feed_rx.borrow_and_update().clone();
            self.feed.set_snapshot(snapshot);
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received {}", describe(&action));
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", finished.len());
        }

        actions
    }

    /// Process an event through the component hierarchy.
    ///
    /// Returns `true` when the screen needs to be redrawn.
    pub fn handle_event(&mut self, event_type: EventType) -> bool {
        match event_type {
            EventType::Key(key) => {
                let action = self.route_key(key);
                self.dispatch(action);
                true
            }
            EventType::Resize(_, _) => true,
            EventType::Tick => {
                let background_actions = self.process_background_actions();
                let mut needs_render = !background_actions.is_empty();
                for action in background_actions {
                    self.dispatch(action);
                }
                needs_render |= self.tick();
                needs_render || self.task_manager.task_count() > 0
            }
            EventType::Other => false,
        }
    }
}

/// Log-friendly action name; image bytes are not worth printing
fn describe(action: &Action) -> String {
    match action {
        Action::ImageLoaded { path, bytes } => format!("ImageLoaded({}, {} bytes)", path.display(), bytes.len()),
        other => format!("{:?}", other),
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dispatch(action)
    }

    /// Expire the copied marks and the status message
    fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = self.feed.tick();
        if self.status_message.as_ref().is_some_and(|message| now >= message.until) {
            self.status_message = None;
            changed = true;
        }
        changed
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let composer = &self.composer.composer;
        let composer_height = LayoutManager::composer_height(composer.state(), composer.image().is_some());
        let areas = LayoutManager::main_layout(rect, composer_height);

        self.composer.render(f, areas.composer);
        self.feed.render(f, areas.feed);

        let info = StatusInfo {
            focus: self.focus,
            commenting: self.feed.is_capturing_text(),
            loading_image: self.task_manager.task_count() > 0,
            message: self.status_message.as_ref().map(|message| message.text.as_str()),
        };
        StatusBar::render(f, areas.status, &info);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
