//! Modal dialog component.
//!
//! Hosts the help and debug log dialogs. While a dialog is visible it takes
//! every key press; scrolling is handled here and closing emits
//! [`Action::HideDialog`].

use crate::theme::{Palette, Theme};
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

const PAGE_SIZE: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub logs: Vec<String>,
    pub palette: Palette,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            logs: Vec::new(),
            palette: Theme::default().palette(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
        }
    }

    pub fn update_data(&mut self, logs: Vec<String>, palette: Palette) {
        self.logs = logs;
        self.palette = palette;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let (is_help, is_logs) = match &self.dialog_type {
            Some(DialogType::Help) => (true, false),
            Some(DialogType::Logs) => (false, true),
            None => return Action::None,
        };

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Char('?') if is_help => Action::HideDialog,
            KeyCode::Char('G') if is_logs => Action::HideDialog,
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_by(1);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_by(-1);
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_by(PAGE_SIZE as isize);
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_by(-(PAGE_SIZE as isize));
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                self.scrollbar_state = self.scrollbar_state.position(0);
                Action::None
            }
            KeyCode::End => {
                // clamped on the next render
                self.scroll_offset = usize::MAX;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.reset_scroll();
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.reset_scroll();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.dialog_type {
            Some(DialogType::Help) => system_dialogs::render_help_dialog(
                f,
                rect,
                &self.palette,
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            Some(DialogType::Logs) => system_dialogs::render_logs_dialog(
                f,
                rect,
                &self.palette,
                &self.logs,
                &mut self.scroll_offset,
                &mut self.scrollbar_state,
            ),
            None => {}
        }
    }
}
