//! Core UI functionality for the Checklist application.
//!
//! This module contains the building blocks the screen is made of: the actions
//! that describe every state transition, the component trait, terminal event
//! polling and the background task manager that performs remote calls.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard and resize input polling
//! - [`task_manager`] - Background remote operations
//!
//! Remote calls never block the event loop. Each one runs as its own tokio
//! task and reports back with an [`Action`] on a channel that the loop drains
//! on every tick.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{FinishedJob, JobId, TaskManager};
