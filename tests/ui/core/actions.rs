use checklist::backend::TaskId;
use checklist::ui::core::{Action, DialogType};
use checklist::ui::Filter;

#[test]
fn test_remote_actions() {
    let remote = [
        Action::AddTask,
        Action::ToggleTask(TaskId::Number(1)),
        Action::DeleteTask(TaskId::Number(1)),
        Action::SaveEdit,
        Action::ClearCompleted,
        Action::Refresh,
    ];
    for action in remote {
        assert!(action.is_remote(), "{:?} should be remote", action);
    }
}

#[test]
fn test_local_actions() {
    let local = [
        Action::NextTask,
        Action::InputChar('x'),
        Action::StartEditing(TaskId::Number(1)),
        Action::CancelEdit,
        Action::SetFilter(Filter::Pending),
        Action::ToggleTheme,
        Action::ShowDialog(DialogType::Help),
        Action::OperationFailed("boom".to_string()),
        Action::Quit,
    ];
    for action in local {
        assert!(!action.is_remote(), "{:?} should be local", action);
    }
}
