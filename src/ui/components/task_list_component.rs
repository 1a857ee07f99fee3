use crate::backend::{Task, TaskId};
use crate::theme::{Palette, Theme};
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const CHECKBOX_DONE: &str = "[x]";
const CHECKBOX_PENDING: &str = "[ ]";
const CURSOR: &str = "█";

/// The filtered task list, with inline editing of one row
pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub editing: Option<TaskId>,
    pub edit_buffer: String,
    pub empty_message: Option<&'static str>,
    pub palette: Palette,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            editing: None,
            edit_buffer: String::new(),
            empty_message: None,
            palette: Theme::default().palette(),
        }
    }

    pub fn update_data(
        &mut self,
        tasks: Vec<Task>,
        editing: Option<TaskId>,
        edit_buffer: String,
        empty_message: Option<&'static str>,
        palette: Palette,
    ) {
        self.tasks = tasks;
        self.editing = editing;
        self.edit_buffer = edit_buffer;
        self.empty_message = empty_message;
        self.palette = palette;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn select_next(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.tasks.len();
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_previous(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.tasks.len() - 1
            } else {
                self.selected_index - 1
            };
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn create_task_item<'a>(&'a self, task: &'a Task) -> ListItem<'a> {
        let palette = &self.palette;
        let (checkbox, checkbox_style) = if task.completed {
            (CHECKBOX_DONE, Style::default().fg(palette.completed))
        } else {
            (CHECKBOX_PENDING, Style::default().fg(palette.muted))
        };

        let body = if self.editing.as_ref() == Some(&task.id) {
            Span::styled(
                format!("{}{}", self.edit_buffer, CURSOR),
                Style::default().fg(palette.accent).add_modifier(Modifier::UNDERLINED),
            )
        } else if task.completed {
            Span::styled(
                task.title.as_str(),
                Style::default().fg(palette.muted).add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            Span::styled(task.title.as_str(), Style::default().fg(palette.foreground))
        };

        ListItem::new(Line::from(vec![
            Span::styled(checkbox, checkbox_style),
            Span::raw(" "),
            body,
        ]))
    }

    fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(" Tasks ")
            .border_style(Style::default().fg(self.palette.muted))
            .style(Style::default().bg(self.palette.background))
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTask,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTask,
            KeyCode::Char(' ') => match self.selected_task() {
                Some(task) => Action::ToggleTask(task.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('e') | KeyCode::Enter => match self.selected_task() {
                Some(task) => Action::StartEditing(task.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_task() {
                Some(task) => Action::DeleteTask(task.id.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                self.select_next();
                Action::None
            }
            Action::PreviousTask => {
                self.select_previous();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if let Some(message) = self.empty_message {
            let empty = Paragraph::new(message)
                .block(self.block())
                .style(Style::default().fg(self.palette.muted))
                .wrap(Wrap { trim: true });
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = self.tasks.iter().map(|task| self.create_task_item(task)).collect();

        let list = List::new(items).block(self.block()).highlight_style(
            Style::default()
                .fg(self.palette.highlight_fg)
                .bg(self.palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

        let mut list_state = self.list_state.clone();
        f.render_stateful_widget(list, rect, &mut list_state);
        self.list_state = list_state;
    }
}
