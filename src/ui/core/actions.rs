use crate::backend::{Task, TaskId};
use crate::ui::state::Filter;

/// Where typed characters go when no task is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    NewTask,
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    FocusNewTask,
    FocusList,

    // Text input, routed to the edit buffer or the new-task buffer
    InputChar(char),
    InputBackspace,

    // Task operations
    AddTask,
    ToggleTask(TaskId),
    DeleteTask(TaskId),
    StartEditing(TaskId),
    SaveEdit,
    CancelEdit,
    ClearCompleted,
    Refresh,

    // Results of background operations
    TasksFetched(Vec<Task>),
    TaskCreated(Task),
    TaskUpdated(Task),
    EditSaved(Task),
    TaskDeleted(TaskId),
    CompletedCleared(Vec<TaskId>),
    OperationFailed(String),

    // View operations
    SetFilter(Filter),
    CycleFilter,
    ToggleTheme,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

impl Action {
    /// Actions that issue a remote call
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Action::AddTask
                | Action::ToggleTask(_)
                | Action::DeleteTask(_)
                | Action::SaveEdit
                | Action::ClearCompleted
                | Action::Refresh
        )
    }
}

#[derive(Debug, Clone)]
pub enum DialogType {
    Help,
    Logs,
}
