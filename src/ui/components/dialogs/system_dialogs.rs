use super::common::render_scrollable_dialog;
use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::theme::Palette;
use crate::ui::layout::LayoutManager;
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

const HELP_TEXT: &str = r"CHECKLIST - Terminal To-Do List

NAVIGATION
j/k, ↓/↑    Move selection
1 / 2 / 3   Show all / pending / completed tasks
f           Cycle filter

TASKS
a           Type a new task (Enter adds, Esc cancels)
Space       Toggle completed
e, Enter    Edit selected task (Enter saves, Esc cancels)
↑/↓         While editing: edit the previous/next task instead
d, Del      Delete selected task
C           Delete every completed task
r           Reload tasks from the server

GENERAL
t           Toggle light/dark theme
G           Show debug logs
?           Show this help
q, Ctrl+C   Quit";

pub fn help_lines() -> Vec<String> {
    HELP_TEXT.lines().map(str::to_string).collect()
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let (width, height) = LayoutManager::help_panel_dimensions(area.width, area.height);
    let dialog_area = LayoutManager::centered_rect(width, height, area);

    render_scrollable_dialog(
        f,
        dialog_area,
        " Help ",
        &help_lines(),
        "Esc/?: close • j/k: scroll",
        palette,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    palette: &Palette,
    logs: &[String],
    scroll_offset: &mut usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect(80, 80, area);
    let lines: Vec<String> = if logs.is_empty() {
        vec!["No log entries yet.".to_string()]
    } else {
        logs.to_vec()
    };

    render_scrollable_dialog(
        f,
        dialog_area,
        DIALOG_TITLE_DEBUG_LOGS,
        &lines,
        "j/k: scroll • Home/End: top/bottom",
        palette,
        scroll_offset,
        scrollbar_state,
    );
}
