use checklist::ui::components::dialogs::common::max_scroll;
use checklist::ui::components::dialogs::system_dialogs::help_lines;
use checklist::ui::components::DialogComponent;
use checklist::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_show_and_hide() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());

    assert!(matches!(dialog.update(Action::ShowDialog(DialogType::Help)), Action::None));
    assert!(dialog.is_visible());

    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());
}

#[test]
fn test_close_keys_per_dialog() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::None));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));

    dialog.update(Action::ShowDialog(DialogType::Logs));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::HideDialog));
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('q'))), Action::HideDialog));
}

#[test]
fn test_scrolling_and_reset_on_show() {
    let mut dialog = DialogComponent::new();
    dialog.update(Action::ShowDialog(DialogType::Logs));

    dialog.handle_key_events(key(KeyCode::Char('j')));
    dialog.handle_key_events(key(KeyCode::PageDown));
    assert_eq!(dialog.scroll_offset, 11);

    dialog.handle_key_events(key(KeyCode::Up));
    assert_eq!(dialog.scroll_offset, 10);

    dialog.handle_key_events(key(KeyCode::Home));
    dialog.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(dialog.scroll_offset, 0);

    dialog.handle_key_events(key(KeyCode::End));
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert_eq!(dialog.scroll_offset, 0);
}

#[test]
fn test_hidden_dialog_ignores_keys() {
    let mut dialog = DialogComponent::new();
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None));
}

#[test]
fn test_max_scroll() {
    assert_eq!(max_scroll(5, 10), 0);
    assert_eq!(max_scroll(25, 10), 15);
}

#[test]
fn test_help_mentions_every_binding() {
    let help = help_lines().join("\n");
    for needle in ["Space", "Toggle completed", "Delete every completed task", "theme", "Quit"] {
        assert!(help.contains(needle), "help text is missing {:?}", needle);
    }
}
