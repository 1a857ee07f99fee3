use crate::backend::Backend;
use crate::logger::Logger;
use crate::theme::ThemeStore;
use crate::ui::components::{DialogComponent, FilterBar, Header, InputBar, StatusBar, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::ui::state::{Filter, TodoState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    state: TodoState,
    focus: Focus,

    // Services
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    theme_store: Option<ThemeStore>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(backend: Arc<dyn Backend>, state: TodoState, theme_store: Option<ThemeStore>, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new(backend);

        let mut app = Self {
            task_list: TaskListComponent::new(),
            dialog: DialogComponent::new(),
            state,
            focus: Focus::default(),
            task_manager,
            background_action_rx,
            logger,
            theme_store,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Get the number of active background operations
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Fetch the task list on startup
    pub fn trigger_initial_fetch(&mut self) {
        self.logger.log("AppComponent: Starting initial fetch".to_string());
        self.dispatch(Action::Refresh);
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let palette = self.state.theme.palette();

        self.task_list.update_data(
            self.state.filtered_tasks().into_iter().cloned().collect(),
            self.state.editing.clone(),
            self.state.edit_buffer.clone(),
            self.state.empty_message(),
            palette,
        );

        let logs = if matches!(self.dialog.dialog_type, Some(DialogType::Logs)) {
            self.logger.get_logs()
        } else {
            Vec::new()
        };
        self.dialog.update_data(logs, palette);
    }

    /// Keys while a task title is being edited. Up/Down move to the
    /// neighbouring row and edit it instead, dropping the current buffer.
    fn handle_edit_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SaveEdit,
            KeyCode::Esc => Action::CancelEdit,
            KeyCode::Up | KeyCode::Down => {
                let step = if key.code == KeyCode::Up {
                    Action::PreviousTask
                } else {
                    Action::NextTask
                };
                self.task_list.update(step);
                match self.task_list.selected_task() {
                    Some(task) if !self.state.is_editing(&task.id) => Action::StartEditing(task.id.clone()),
                    _ => Action::None,
                }
            }
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputChar(c),
            _ => Action::None,
        }
    }

    /// Keys while the new-task field has focus
    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::AddTask,
            KeyCode::Esc => Action::FocusList,
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Action::InputChar(c),
            _ => Action::None,
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('a') | KeyCode::Char('i') => Action::FocusNewTask,
            KeyCode::Char('f') => Action::CycleFilter,
            KeyCode::Char('1') => Action::SetFilter(Filter::All),
            KeyCode::Char('2') => Action::SetFilter(Filter::Pending),
            KeyCode::Char('3') => Action::SetFilter(Filter::Completed),
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('C') => Action::ClearCompleted,
            KeyCode::Char('r') => {
                self.logger.log("Global key: 'r' - reloading tasks".to_string());
                Action::Refresh
            }
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    /// Apply an action to the view-model, spawning remote work where needed
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        if self.state.loading && action.is_remote() {
            self.logger.log(format!("Ignoring {:?} while a request is in flight", action));
            return Action::None;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                self.task_manager.cancel_all_tasks();
                Action::None
            }
            Action::FocusNewTask => {
                self.focus = Focus::NewTask;
                Action::None
            }
            Action::FocusList => {
                self.focus = Focus::List;
                Action::None
            }
            Action::InputChar(c) => {
                if self.state.editing.is_some() {
                    self.state.edit_buffer.push(c);
                } else if self.focus == Focus::NewTask {
                    self.state.new_task_input.push(c);
                }
                Action::None
            }
            Action::InputBackspace => {
                if self.state.editing.is_some() {
                    self.state.edit_buffer.pop();
                } else if self.focus == Focus::NewTask {
                    self.state.new_task_input.pop();
                }
                Action::None
            }

            // Task operations with background execution
            Action::AddTask => {
                match self.state.prepare_new_task() {
                    Ok(title) => {
                        self.logger.log(format!("Task: Creating task '{}'", title));
                        self.state.begin_request();
                        self.task_manager.spawn_create(title);
                    }
                    Err(message) => {
                        self.logger.log("Task: Refusing to create a task with an empty title".to_string());
                        self.state.set_error(message);
                    }
                }
                Action::None
            }
            Action::ToggleTask(id) => {
                match self.state.toggle_args(&id) {
                    Some(args) => {
                        self.logger.log(format!("Task: Toggling task {} to {:?}", id, args.completed));
                        self.state.begin_request();
                        self.task_manager.spawn_toggle(id, args);
                    }
                    None => self.logger.log(format!("Task: Cannot toggle - task {} not found", id)),
                }
                Action::None
            }
            Action::DeleteTask(id) => {
                self.logger.log(format!("Task: Deleting task {}", id));
                self.state.begin_request();
                self.task_manager.spawn_delete(id);
                Action::None
            }
            Action::StartEditing(id) => {
                if let Some(previous) = self.state.editing.clone() {
                    if previous != id {
                        self.logger.log(format!("Task: Discarding unsaved edit of task {}", previous));
                    }
                }
                if self.state.start_editing(&id) {
                    self.logger.log(format!("Task: Editing task {}", id));
                }
                Action::None
            }
            Action::SaveEdit => {
                match self.state.prepare_edit() {
                    Ok((id, title)) => {
                        self.logger.log(format!("Task: Renaming task {} to '{}'", id, title));
                        self.state.begin_request();
                        self.task_manager.spawn_rename(id, title);
                    }
                    Err(message) => self.state.set_error(message),
                }
                Action::None
            }
            Action::CancelEdit => {
                self.state.cancel_edit();
                Action::None
            }
            Action::ClearCompleted => {
                let ids = self.state.completed_ids();
                if ids.is_empty() {
                    self.logger.log("Task: No completed tasks to clear".to_string());
                } else {
                    self.logger.log(format!("Task: Clearing {} completed tasks", ids.len()));
                    self.state.begin_request();
                    self.task_manager.spawn_clear(ids);
                }
                Action::None
            }
            Action::Refresh => {
                self.state.begin_request();
                self.task_manager.spawn_fetch();
                Action::None
            }

            // Results from background operations
            Action::TasksFetched(tasks) => {
                self.logger.log(format!("Fetch: Received {} tasks", tasks.len()));
                self.state.finish_request();
                self.state.apply_fetched(tasks);
                Action::None
            }
            Action::TaskCreated(task) => {
                self.logger.log(format!("Task: Created task {} '{}'", task.id, task.title));
                self.state.finish_request();
                self.state.apply_created(task);
                Action::None
            }
            Action::TaskUpdated(task) => {
                self.state.finish_request();
                self.state.apply_updated(task);
                Action::None
            }
            Action::EditSaved(task) => {
                self.state.finish_request();
                self.state.apply_edit_saved(task);
                Action::None
            }
            Action::TaskDeleted(id) => {
                self.logger.log(format!("Task: Deleted task {}", id));
                self.state.finish_request();
                self.state.apply_deleted(&id);
                Action::None
            }
            Action::CompletedCleared(ids) => {
                self.logger.log(format!("Task: Cleared {} completed tasks", ids.len()));
                self.state.finish_request();
                self.state.apply_cleared(&ids);
                Action::None
            }
            Action::OperationFailed(message) => {
                self.logger.log(format!("Operation failed: {}", message));
                self.state.finish_request();
                self.state.set_error(message);
                Action::None
            }

            // View operations
            Action::SetFilter(filter) => {
                self.state.set_filter(filter);
                Action::None
            }
            Action::CycleFilter => {
                self.state.cycle_filter();
                Action::None
            }
            Action::ToggleTheme => {
                let theme = self.state.toggle_theme();
                self.logger.log(format!("Theme: Switched to {}", theme.as_str()));
                if let Some(store) = &self.theme_store {
                    if let Err(e) = store.save(theme) {
                        self.logger.log(format!("Theme: Failed to save preference: {:#}", e));
                    }
                }
                Action::None
            }
            other => other,
        }
    }

    /// Run an action through the component hierarchy and then the app
    pub fn dispatch(&mut self, action: Action) {
        let action = self.dialog.update(action);
        let action = self.task_list.update(action);
        let _final_action = self.handle_app_action(action);
        self.sync_component_data();
    }

    /// Drain results sent by background operations
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        for job in self.task_manager.cleanup_finished_tasks() {
            self.logger.log(format!(
                "Background: Job {} finished in {}ms ({})",
                job.id,
                job.elapsed.as_millis(),
                job.description
            ));
        }

        actions
    }

    /// Wait for the next background result. For headless drivers that are
    /// not driven by the tick loop; the TUI uses
    /// [`process_background_actions`](Self::process_background_actions).
    pub async fn next_background_action(&mut self) -> Option<Action> {
        self.background_action_rx.recv().await
    }

    /// Apply background results until `count` have arrived, returning them.
    ///
    /// Headless drivers use this to run an action to completion without a
    /// terminal or tick loop.
    pub async fn settle(&mut self, count: usize) -> Vec<Action> {
        let mut received = Vec::with_capacity(count);
        while received.len() < count {
            match self.next_background_action().await {
                Some(action) => {
                    self.dispatch(action.clone());
                    received.push(action);
                }
                None => break,
            }
        }
        received
    }

    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };
        self.dispatch(action);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        // Dialog has priority when visible
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        if self.state.editing.is_some() {
            return self.handle_edit_key(key);
        }
        if self.focus == Focus::NewTask {
            return self.handle_input_key(key);
        }

        let task_list_action = self.task_list.handle_key_events(key);
        if !matches!(task_list_action, Action::None) {
            task_list_action
        } else {
            self.handle_global_key(key)
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let palette = self.state.theme.palette();
        f.render_widget(Block::default().style(Style::default().bg(palette.background)), rect);

        let areas = LayoutManager::main_layout(rect);
        Header::render(f, areas.header, &self.state, &palette);
        InputBar::render(
            f,
            areas.input,
            &self.state.new_task_input,
            self.focus == Focus::NewTask && self.state.editing.is_none(),
            &palette,
        );
        FilterBar::render(f, areas.filters, self.state.filter, &palette);
        self.task_list.render(f, areas.tasks);
        StatusBar::render(f, areas.status, &self.state, &palette);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
