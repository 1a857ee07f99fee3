//! View-model for the to-do list.
//!
//! [`TodoState`] holds everything the screen shows. Remote calls never touch it
//! directly: they run in background tasks and their results are applied here
//! through the `apply_*` reducers, so the list always reflects the last
//! response received from the server.

use crate::backend::{Task, TaskId, UpdateTaskArgs};
use crate::constants::{
    EMPTY_ALL, EMPTY_COMPLETED, EMPTY_LOADING, EMPTY_PENDING, ERROR_EMPTY_TITLE, ERROR_NOTHING_TO_EDIT,
};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    /// Next filter in display order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Pending,
            Filter::Pending => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            Filter::All => EMPTY_ALL,
            Filter::Pending => EMPTY_PENDING,
            Filter::Completed => EMPTY_COMPLETED,
        }
    }
}

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct TodoState {
    pub tasks: Vec<Task>,
    pub new_task_input: String,
    pub editing: Option<TaskId>,
    pub edit_buffer: String,
    pub filter: Filter,
    pub theme: Theme,
    pub loading: bool,
    pub error_message: Option<String>,
}

impl TodoState {
    pub fn new(filter: Filter, theme: Theme) -> Self {
        Self {
            filter,
            theme,
            ..Default::default()
        }
    }

    /// Start of any user action: the previous error is dropped.
    pub fn begin_request(&mut self) {
        self.error_message = None;
        self.loading = true;
    }

    pub fn finish_request(&mut self) {
        self.loading = false;
    }

    /// Overwrite the single error slot
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Validate the new-task buffer. Blank input never reaches the server.
    pub fn prepare_new_task(&self) -> Result<String, &'static str> {
        if self.new_task_input.trim().is_empty() {
            Err(ERROR_EMPTY_TITLE)
        } else {
            Ok(self.new_task_input.clone())
        }
    }

    /// Replace the whole sequence with a fetch result
    pub fn apply_fetched(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        if let Some(id) = &self.editing {
            if !self.tasks.iter().any(|t| &t.id == id) {
                self.cancel_edit();
            }
        }
    }

    pub fn apply_created(&mut self, task: Task) {
        self.tasks.push(task);
        self.new_task_input.clear();
    }

    /// Replace the local copy with the server's version
    pub fn apply_updated(&mut self, task: Task) {
        if let Some(existing) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *existing = task;
        }
    }

    /// A saved edit also closes edit mode when it still targets that task
    pub fn apply_edit_saved(&mut self, task: Task) {
        let closes_edit = self.editing.as_ref() == Some(&task.id);
        self.apply_updated(task);
        if closes_edit {
            self.cancel_edit();
        }
    }

    pub fn apply_deleted(&mut self, id: &TaskId) {
        self.tasks.retain(|t| &t.id != id);
        if self.editing.as_ref() == Some(id) {
            self.cancel_edit();
        }
    }

    /// Remove exactly the given ids
    pub fn apply_cleared(&mut self, ids: &[TaskId]) {
        self.tasks.retain(|t| !ids.contains(&t.id));
        if let Some(id) = &self.editing {
            if ids.contains(id) {
                self.cancel_edit();
            }
        }
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Update body for toggling: current title unchanged, flag flipped
    pub fn toggle_args(&self, id: &TaskId) -> Option<UpdateTaskArgs> {
        self.find_task(id).map(|task| UpdateTaskArgs {
            title: Some(task.title.clone()),
            completed: Some(!task.completed),
        })
    }

    /// Enter edit mode for `id`. Any other edit in progress is discarded.
    pub fn start_editing(&mut self, id: &TaskId) -> bool {
        match self.find_task(id) {
            Some(task) => {
                self.edit_buffer = task.title.clone();
                self.editing = Some(id.clone());
                true
            }
            None => false,
        }
    }

    /// Validate the edit buffer for saving
    pub fn prepare_edit(&self) -> Result<(TaskId, String), &'static str> {
        let id = self.editing.clone().ok_or(ERROR_NOTHING_TO_EDIT)?;
        if self.edit_buffer.trim().is_empty() {
            return Err(ERROR_EMPTY_TITLE);
        }
        Ok((id, self.edit_buffer.clone()))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.edit_buffer.clear();
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.editing.as_ref() == Some(id)
    }

    /// Ids of every completed task, in list order
    pub fn completed_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().filter(|t| t.completed).map(|t| t.id.clone()).collect()
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.matches(t)).collect()
    }

    /// (pending, completed)
    pub fn counts(&self) -> (usize, usize) {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        (self.tasks.len() - completed, completed)
    }

    /// Text to show instead of the list, if any.
    ///
    /// Loading with nothing fetched yet takes priority over the filter's
    /// empty message.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.loading && self.tasks.is_empty() {
            return Some(EMPTY_LOADING);
        }
        if self.filtered_tasks().is_empty() {
            return Some(self.filter.empty_message());
        }
        None
    }
}
