//! Filter selector

use crate::theme::Palette;
use crate::ui::state::Filter;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Filter bar component
pub struct FilterBar;

impl FilterBar {
    /// Render one tab per filter, highlighting the active one
    pub fn render(f: &mut Frame, area: Rect, active: Filter, palette: &Palette) {
        let mut spans = vec![Span::raw(" ")];
        for (index, filter) in Filter::ALL.iter().enumerate() {
            let label = format!(" {} {} ", index + 1, filter.label());
            let style = if *filter == active {
                Style::default()
                    .fg(palette.highlight_fg)
                    .bg(palette.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.background));
        f.render_widget(bar, area);
    }
}
