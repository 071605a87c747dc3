use super::common::{create_dialog_block, create_instructions_line, shortcuts};
use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "FEED",
        &[
            ("j/k ↑↓", "Select next / previous post"),
            ("l", "Like or unlike the selected post"),
            ("c", "Show or hide comments"),
            ("r", "Write a comment (Enter sends, Esc leaves)"),
        ],
    ),
    (
        "GRADIENT PALETTES",
        &[
            ("v", "Show or hide the palette overlay"),
            ("1-9", "Copy a palette color"),
            ("y", "Copy the CSS gradient"),
        ],
    ),
    (
        "COMPOSER",
        &[
            ("i", "Start a post"),
            ("p / Ctrl+O", "Attach a photo"),
            ("Ctrl+X", "Remove the attached photo"),
            ("Enter", "Publish"),
            ("Esc", "Cancel the draft"),
        ],
    ),
    (
        "GENERAL",
        &[
            ("?", "Toggle this help"),
            ("G", "Show logs"),
            ("T", "Cycle icon theme"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

/// Vertical scrollbar shared by the scrollable dialogs
fn render_dialog_scrollbar(f: &mut Frame, area: Rect, scrollbar_state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐");
    f.render_stateful_widget(scrollbar, area, scrollbar_state);
}

/// Clamp `scroll_offset` to the content and sync the scrollbar.
///
/// Returns the offset actually used for drawing.
fn clamp_scroll(
    total_lines: usize,
    visible_lines: usize,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) -> u16 {
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let offset = (*scroll_offset).min(max_scroll).min(usize::from(u16::MAX));
    *scroll_offset = offset;
    *scrollbar_state = scrollbar_state
        .content_length(max_scroll + 1)
        .viewport_content_length(visible_lines)
        .position(offset);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Lines of the keyboard reference
pub fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, (title, keys)) in HELP_SECTIONS.iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            *title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for (key, description) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*description),
            ]));
        }
    }
    lines
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    let (width, height) = LayoutManager::help_panel_dimensions(area.width, area.height);
    let dialog_area = LayoutManager::centered_rect(width, height, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(" Keyboard shortcuts ".to_string(), Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lines = help_lines();
    let offset = clamp_scroll(lines.len(), chunks[0].height as usize, scroll_offset, scrollbar_state);

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .scroll((offset, 0));
    f.render_widget(paragraph, chunks[0]);
    render_dialog_scrollbar(f, chunks[0], scrollbar_state);

    let instructions = Paragraph::new(create_instructions_line(&[
        shortcuts::SCROLL,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CLOSE,
    ]))
    .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[1]);
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect(90, 80, area);
    f.render_widget(Clear, dialog_area);

    let logs = logger.get_logs();
    let lines: Vec<Line> = if logs.is_empty() {
        vec![Line::from(Span::styled("No log entries yet", Style::default().fg(Color::DarkGray)))]
    } else {
        logs.into_iter()
            .map(|entry| {
                let color = if entry.contains("ERROR") {
                    Color::Red
                } else if entry.contains("WARN") {
                    Color::Yellow
                } else if entry.contains("DEBUG") || entry.contains("TRACE") {
                    Color::DarkGray
                } else {
                    Color::White
                };
                Line::from(Span::styled(entry, Style::default().fg(color)))
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(DIALOG_TITLE_LOGS)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let offset = clamp_scroll(lines.len(), inner.height as usize, scroll_offset, scrollbar_state);
    let paragraph = Paragraph::new(lines).scroll((offset, 0));
    f.render_widget(paragraph, inner);
    render_dialog_scrollbar(f, inner, scrollbar_state);
}

/// Shared layout of the info and error dialogs
fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    color: Color,
    message: &str,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, color);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    // Long messages wrap; estimate the wrapped height to size the scrollbar
    let width = chunks[0].width.max(1) as usize;
    let total_lines: usize = message
        .lines()
        .map(|line| line.chars().count().max(1).div_ceil(width))
        .sum();
    let offset = clamp_scroll(total_lines, chunks[0].height as usize, scroll_offset, scrollbar_state);

    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .scroll((offset, 0));
    f.render_widget(paragraph, chunks[0]);
    if total_lines > chunks[0].height as usize {
        render_dialog_scrollbar(f, chunks[0], scrollbar_state);
    }

    let instructions = Paragraph::new(create_instructions_line(&[("Esc/Enter", Color::Green, " Close")]))
        .alignment(Alignment::Center);
    f.render_widget(instructions, chunks[1]);
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let title = format!(" {} Info ", icons.info());
    render_message_dialog(f, area, title, Color::Cyan, message, scroll_offset, scrollbar_state);
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let title = format!(" {} Error ", icons.error());
    render_message_dialog(f, area, title, Color::Red, message, scroll_offset, scrollbar_state);
}
