use crate::common::sample_tasks;
use checklist::backend::TaskId;
use checklist::theme::Theme;
use checklist::ui::components::TaskListComponent;
use checklist::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn loaded_list() -> TaskListComponent {
    let mut list = TaskListComponent::new();
    list.update_data(sample_tasks(), None, String::new(), None, Theme::Light.palette());
    list
}

#[test]
fn test_selection_wraps_both_ways() {
    let mut list = loaded_list();
    assert_eq!(list.selected_index, 0);

    let action = list.handle_key_events(key(KeyCode::Char('k')));
    assert!(matches!(list.update(action), Action::None));
    assert_eq!(list.selected_index, 2);

    let action = list.handle_key_events(key(KeyCode::Down));
    list.update(action);
    assert_eq!(list.selected_index, 0);
}

#[test]
fn test_task_keys_target_selected_task() {
    let mut list = loaded_list();
    list.update(Action::NextTask);

    assert!(matches!(
        list.handle_key_events(key(KeyCode::Char(' '))),
        Action::ToggleTask(TaskId::Number(2))
    ));
    assert!(matches!(
        list.handle_key_events(key(KeyCode::Char('e'))),
        Action::StartEditing(TaskId::Number(2))
    ));
    assert!(matches!(
        list.handle_key_events(key(KeyCode::Delete)),
        Action::DeleteTask(TaskId::Number(2))
    ));
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('z'))), Action::None));
}

#[test]
fn test_empty_list_emits_nothing() {
    let mut list = TaskListComponent::new();
    assert!(list.selected_task().is_none());
    assert!(matches!(list.handle_key_events(key(KeyCode::Char(' '))), Action::None));
    assert!(matches!(list.handle_key_events(key(KeyCode::Char('d'))), Action::None));
}

#[test]
fn test_selection_clamped_when_list_shrinks() {
    let mut list = loaded_list();
    list.update(Action::PreviousTask);
    assert_eq!(list.selected_index, 2);

    list.update_data(sample_tasks()[..1].to_vec(), None, String::new(), None, Theme::Dark.palette());
    assert_eq!(list.selected_index, 0);
    assert_eq!(list.list_state.selected(), Some(0));

    list.update_data(Vec::new(), None, String::new(), Some("empty"), Theme::Dark.palette());
    assert_eq!(list.list_state.selected(), None);
}

#[test]
fn test_other_actions_pass_through() {
    let mut list = loaded_list();
    assert!(matches!(list.update(Action::Refresh), Action::Refresh));
}
