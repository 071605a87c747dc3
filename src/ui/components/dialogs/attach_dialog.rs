use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::constants::ATTACH_DIALOG_TITLE;
use crate::icons::IconService;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Prompt for the path of an image to attach to the draft
pub fn render_attach_dialog(f: &mut Frame, area: Rect, icons: &IconService, input_buffer: &str, max_image_bytes: usize) {
    let dialog_area = LayoutManager::centered_rect_lines(65, 10, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(format!("{} {}", icons.photo(), ATTACH_DIALOG_TITLE), Color::Green);
    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Path input (borders + content)
            Constraint::Length(1), // Hint
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let hint = Paragraph::new(format!(
        "PNG, JPEG, GIF, WebP or BMP up to {} KiB",
        max_image_bytes / 1024
    ))
    .style(Style::default().fg(Color::DarkGray));

    let instructions = create_instructions_paragraph(&[
        ("Enter", Color::Green, " Attach"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(main_block, dialog_area);
    f.render_widget(create_input_paragraph(input_buffer, "Image path"), chunks[0]);
    f.render_widget(hint, chunks[1]);
    f.render_widget(instructions, chunks[2]);
}
