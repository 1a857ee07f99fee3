//! Title line with task counts and the theme toggle glyph

use crate::constants::APP_TITLE;
use crate::theme::Palette;
use crate::ui::state::TodoState;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Header component
pub struct Header;

impl Header {
    /// Render the header
    pub fn render(f: &mut Frame, area: Rect, state: &TodoState, palette: &Palette) {
        let (pending, completed) = state.counts();

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", APP_TITLE),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    " {} pending • {} completed • {} total ",
                    pending,
                    completed,
                    state.tasks.len()
                ),
                Style::default().fg(palette.muted),
            ),
            Span::raw(" "),
            Span::styled(state.theme.toggle_icon(), Style::default().fg(palette.foreground)),
        ]);

        let header = Paragraph::new(line).style(Style::default().bg(palette.background));
        f.render_widget(header, area);
    }
}
