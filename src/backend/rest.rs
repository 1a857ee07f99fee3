//! REST backend implementation.

use super::{Backend, BackendError, CreateTaskArgs, Task, TaskId, UpdateTaskArgs};
use crate::config::ApiConfig;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Backend for a plain JSON collection resource (`GET`/`POST` on the
/// collection, `PUT`/`DELETE` on `{collection}{id}/`).
pub struct RestBackend {
    client: Client,
    base_url: String,
}

impl RestBackend {
    /// Create a new REST backend for the given collection URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    /// Create a backend from the `[api]` configuration section.
    pub fn from_config(config: &ApiConfig) -> Result<Self, BackendError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the item sub-resource for a task.
    pub fn item_url(&self, id: &TaskId) -> String {
        item_url(&self.base_url, id)
    }

    // Helper: turn non-2xx responses into a status error carrying the body
    async fn check_status(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            status: status.as_u16(),
            body,
        })
    }

    // Helper: decode a successful JSON response
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::InvalidData(e.to_string()))
    }
}

/// Collection URLs are used as a prefix for item URLs, so they must end in `/`.
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// Build `{base}{id}/` from an already normalized base URL.
pub fn item_url(base_url: &str, id: &TaskId) -> String {
    format!("{}{}/", base_url, id)
}

#[async_trait]
impl Backend for RestBackend {
    fn backend_type(&self) -> &str {
        "rest"
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, BackendError> {
        log::debug!("GET {}", self.base_url);
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn create_task(&self, args: CreateTaskArgs) -> Result<Task, BackendError> {
        log::debug!("POST {} title='{}'", self.base_url, args.title);
        let response = self
            .client
            .post(&self.base_url)
            .json(&args)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn update_task(&self, id: &TaskId, args: UpdateTaskArgs) -> Result<Task, BackendError> {
        let url = self.item_url(id);
        log::debug!("PUT {} {:?}", url, args);
        let response = self
            .client
            .put(&url)
            .json(&args)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), BackendError> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        Self::check_status(response).await.map(|_| ())
    }
}
