use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background))
}

/// Largest useful scroll offset for `total_lines` in a viewport of `visible_height`
pub fn max_scroll(total_lines: usize, visible_height: usize) -> usize {
    total_lines.saturating_sub(visible_height)
}

/// Renders a dialog whose body scrolls, with a one-line instruction footer.
///
/// `scroll_offset` is clamped in place so repeated scrolling past the end
/// does not accumulate.
#[allow(clippy::too_many_arguments)]
pub fn render_scrollable_dialog(
    f: &mut Frame,
    dialog_area: Rect,
    title: &str,
    lines: &[String],
    instructions: &str,
    palette: &Palette,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    f.render_widget(Clear, dialog_area);
    f.render_widget(create_dialog_block(title, palette), dialog_area);

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let total_lines = lines.len();
    let visible_height = content_area.height as usize;
    *scroll_offset = (*scroll_offset).min(max_scroll(total_lines, visible_height));

    let visible_text = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");

    let body = Paragraph::new(visible_text)
        .style(Style::default().fg(palette.foreground))
        .wrap(Wrap { trim: false });
    f.render_widget(body, content_area);

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(palette.muted))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(footer, instructions_area);

    if total_lines > visible_height {
        *scrollbar_state = scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(*scroll_offset);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(palette.muted))
            .thumb_style(Style::default().fg(palette.foreground));

        f.render_stateful_widget(scrollbar, content_area, scrollbar_state);
    }
}
