//! Modal dialog renderers

pub mod common;
pub mod system_dialogs;
