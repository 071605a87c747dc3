use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block with a visual cursor
pub fn create_input_paragraph<'a>(input_buffer: &'a str, field_title: &str) -> Paragraph<'a> {
    let input_display = format!("{}{}", input_buffer, CURSOR);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Block cursor drawn after editable text
pub const CURSOR: &str = "█";

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Color-coded instruction shortcuts on one line
pub fn create_instructions_line(instructions: &[InstructionShortcut]) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, color, desc) in instructions {
        spans.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph(instructions: &[InstructionShortcut]) -> Paragraph<'static> {
    Paragraph::new(create_instructions_line(instructions)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
}
