use crate::common::{sample_tasks, FakeBackend};
use checklist::backend::Backend;
use checklist::backend::TaskId;
use checklist::constants::{APP_TITLE, EMPTY_LOADING};
use checklist::logger::Logger;
use checklist::ui::core::{Action, Component, DialogType};
use checklist::ui::{AppComponent, TodoState};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;

fn app() -> AppComponent {
    let backend = Arc::new(FakeBackend::new(sample_tasks())) as Arc<dyn Backend>;
    AppComponent::new(backend, TodoState::default(), None, Logger::new())
}

fn screen(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_renders_tasks_with_checkboxes() {
    let mut app = app();
    app.dispatch(Action::Refresh);
    app.settle(1).await;

    let text = screen(&mut app);
    assert!(text.contains(APP_TITLE));
    assert!(text.contains("[x] Write report"));
    assert!(text.contains("[ ] Buy milk"));
    assert!(text.contains("Pending"));
}

#[tokio::test]
async fn test_renders_loading_state() {
    let mut app = app();
    app.dispatch(Action::Refresh);

    let text = screen(&mut app);
    assert!(text.contains(EMPTY_LOADING));
    assert!(text.contains("Loading..."));
}

#[tokio::test]
async fn test_renders_error_in_status_bar() {
    let mut app = app();
    app.dispatch(Action::AddTask);

    let text = screen(&mut app);
    assert!(text.contains("Task title cannot be empty"));
}

#[tokio::test]
async fn test_renders_edit_buffer_with_cursor() {
    let mut app = app();
    app.dispatch(Action::Refresh);
    app.settle(1).await;
    app.dispatch(Action::StartEditing(TaskId::Number(2)));
    app.dispatch(Action::InputChar('!'));

    let text = screen(&mut app);
    assert!(text.contains("Buy milk!█"));
}

#[tokio::test]
async fn test_renders_help_dialog_on_top() {
    let mut app = app();
    app.dispatch(Action::ShowDialog(DialogType::Help));

    let text = screen(&mut app);
    assert!(text.contains("NAVIGATION"));
}
