//! Remote task collection abstraction.
//!
//! This module defines the interface the UI uses to talk to the task server,
//! along with the task record and argument types that travel over it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod rest;

/// Error types for remote operations.
///
/// The UI collapses all of these into one message per operation; the variants
/// only matter for the log.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Server-assigned task identifier.
///
/// Servers hand out either integers or strings; the value is kept as received
/// and written back unchanged into item URLs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        TaskId::Number(value)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        TaskId::Text(value.to_string())
    }
}

/// A task record as returned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Body of a create request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateTaskArgs {
    pub title: String,
    pub completed: bool,
}

impl CreateTaskArgs {
    /// New tasks always start out pending.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }
}

/// Body of an update request. Absent fields are left out of the JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UpdateTaskArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// Interface to the remote task collection.
///
/// Every method is a single round-trip; nothing is retried or cached.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns the backend type identifier (e.g., "rest").
    fn backend_type(&self) -> &str;

    async fn list_tasks(&self) -> Result<Vec<Task>, BackendError>;
    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError>;
    async fn update_task(&self, id: &TaskId, args: UpdateTaskArgs) -> Result<Task, BackendError>;
    async fn delete_task(&self, id: &TaskId) -> Result<(), BackendError>;
}
