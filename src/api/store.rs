use std::fmt;

use async_trait::async_trait;
use chrono::Utc;

use super::types::TaskPayload;
use crate::core::action::Mutation;
use crate::core::task::Task;

/// Errors that can occur while talking to the task API.
#[derive(Debug)]
pub enum ApiError {
    /// Client misconfigured (bad URL). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error status or a non-null `errorMessage`.
    Api { status: u16, message: String },
    /// Failed to decode the response envelope.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Remote task storage.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    async fn create_task(&self, payload: &TaskPayload) -> Result<(), ApiError>;

    async fn update_task(&self, id: &str, payload: &TaskPayload) -> Result<(), ApiError>;

    async fn delete_task(&self, id: &str) -> Result<(), ApiError>;
}

/// Send a reducer-produced mutation to the store.
pub async fn apply(store: &dyn TaskStore, mutation: &Mutation) -> Result<(), ApiError> {
    match mutation {
        Mutation::Create { content } => {
            store.create_task(&TaskPayload::content(content.trim())).await
        }
        Mutation::Edit { id, content } => {
            store.update_task(id, &TaskPayload::content(content.trim())).await
        }
        Mutation::Complete { id } => {
            let now = Utc::now().timestamp_millis();
            store.update_task(id, &TaskPayload::completed(now)).await
        }
        Mutation::Delete { id } => store.delete_task(id).await,
    }
}
