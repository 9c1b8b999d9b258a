use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub const CURSOR: &str = "█";

/// Creates an input field block. The cursor is drawn only while focused and
/// `placeholder` stands in for an empty buffer.
pub fn create_input_paragraph<'a>(
    input_buffer: &'a str,
    field_title: &str,
    focused: bool,
    placeholder: &'a str,
) -> Paragraph<'a> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color));

    let line = if focused && input_buffer.is_empty() {
        Line::from(vec![
            Span::styled(CURSOR, Style::default().fg(Color::Cyan)),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        ])
    } else if focused {
        Line::from(vec![
            Span::styled(input_buffer, Style::default().fg(Color::White)),
            Span::styled(CURSOR, Style::default().fg(Color::Cyan)),
        ])
    } else if input_buffer.is_empty() {
        Line::from(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(input_buffer, Style::default().fg(Color::White)))
    };

    Paragraph::new(line).block(input_block)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Instruction shortcuts shown in the footer
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_ADD: InstructionShortcut = ("Enter", Color::Green, " Add");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const TAB_LIST: InstructionShortcut = ("Tab", Color::Cyan, " List");
    pub const TAB_NEW: InstructionShortcut = ("Tab", Color::Cyan, " New task");
    pub const SPACE_TOGGLE: InstructionShortcut = ("Space", Color::Green, " Toggle");
    pub const E_EDIT: InstructionShortcut = ("e", Color::Yellow, " Edit");
    pub const D_DELETE: InstructionShortcut = ("d", Color::Red, " Delete");
    pub const F_FILTER: InstructionShortcut = ("f/1-3", Color::Magenta, " Filter");
    pub const Q_QUIT: InstructionShortcut = ("q", Color::Gray, " Quit");
}
