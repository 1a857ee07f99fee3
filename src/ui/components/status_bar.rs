//! Status bar component

use crate::constants::{STATUS_HINTS, STATUS_LOADING};
use crate::theme::Palette;
use crate::ui::state::TodoState;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: loading beats the last error, which beats key hints
    pub fn render(f: &mut Frame, area: Rect, state: &TodoState, palette: &Palette) {
        let (status_text, status_color) = if state.loading {
            (STATUS_LOADING.to_string(), palette.accent)
        } else if let Some(error) = &state.error_message {
            (error.clone(), palette.error)
        } else {
            (STATUS_HINTS.to_string(), palette.muted)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color).bg(palette.background));

        f.render_widget(status_bar, area);
    }
}
