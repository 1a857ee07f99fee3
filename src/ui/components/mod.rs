//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod filter_bar;
pub mod header;
pub mod input_bar;
pub mod status_bar;
pub mod task_list_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use filter_bar::FilterBar;
pub use header::Header;
pub use input_bar::InputBar;
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;
