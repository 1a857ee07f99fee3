//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Remote defaults
/// Collection endpoint used when no configuration overrides it
pub const DEFAULT_API_URL: &str = "https://todo-fullstack-wvsi.onrender.com/api/tasks/";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Maximum accepted request timeout in seconds
pub const MAX_TIMEOUT_SECS: u64 = 300;

// Error Messages
pub const ERROR_FETCH_FAILED: &str = "❌ Failed to fetch tasks";
pub const ERROR_ADD_FAILED: &str = "❌ Failed to add task";
pub const ERROR_DELETE_FAILED: &str = "❌ Failed to delete task";
pub const ERROR_UPDATE_FAILED: &str = "❌ Failed to update task";
pub const ERROR_TOGGLE_FAILED: &str = "❌ Failed to toggle task";
pub const ERROR_CLEAR_FAILED: &str = "❌ Failed to clear completed tasks";

// Validation Error Messages
pub const ERROR_EMPTY_TITLE: &str = "❌ Task title cannot be empty";
pub const ERROR_NOTHING_TO_EDIT: &str = "❌ No task is being edited";

// Empty states
pub const EMPTY_LOADING: &str = "Loading tasks...";
pub const EMPTY_ALL: &str = "No tasks yet. Press 'a' to add one.";
pub const EMPTY_PENDING: &str = "No pending tasks.";
pub const EMPTY_COMPLETED: &str = "No completed tasks.";

// UI Messages
pub const APP_TITLE: &str = "To-Do List";
pub const INPUT_PLACEHOLDER: &str = "Add a new task...";
pub const STATUS_LOADING: &str = "🔄 Loading...";
pub const STATUS_HINTS: &str = "a: add • Space: toggle • e: edit • d: delete • C: clear done • f: filter • t: theme • ?: help • q: quit";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";

// Theme glyphs, shown as the action the toggle will take
pub const THEME_ICON_DARK: &str = "☀️";
pub const THEME_ICON_LIGHT: &str = "🌙";

// UI Timing Constants
/// Minimum event loop tick in milliseconds
pub const TICK_RATE_MIN_MS: u64 = 10;
/// Maximum event loop tick in milliseconds
pub const TICK_RATE_MAX_MS: u64 = 1000;
/// Default event loop tick in milliseconds
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
