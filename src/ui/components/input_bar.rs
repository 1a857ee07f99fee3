//! New-task input field

use crate::constants::INPUT_PLACEHOLDER;
use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Input bar component
pub struct InputBar;

impl InputBar {
    /// Render the input field; the cursor is only drawn while it has focus
    pub fn render(f: &mut Frame, area: Rect, text: &str, focused: bool, palette: &Palette) {
        let (content, text_style) = if focused {
            (format!("{}█", text), Style::default().fg(palette.foreground))
        } else if text.is_empty() {
            (INPUT_PLACEHOLDER.to_string(), Style::default().fg(palette.muted))
        } else {
            (text.to_string(), Style::default().fg(palette.foreground))
        };

        let border_color = if focused { palette.accent } else { palette.muted };
        let title = if focused {
            " New task (Enter: add • Esc: cancel) "
        } else {
            " New task (a) "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(palette.background));

        f.render_widget(Paragraph::new(content).style(text_style).block(block), area);
    }
}
