//! reqwest-backed implementation of [`TaskStore`].
//!
//! One request per call, no retries. Every request carries the `X-API-KEY`
//! header and every response is decoded through the `{ data, errorMessage }`
//! envelope.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use super::store::{ApiError, TaskStore};
use super::types::{ApiResponse, TaskPayload};
use crate::core::task::Task;

const TASKS_PATH: &str = "tasks";

pub struct TaskClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl TaskClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, TASKS_PATH, id),
            None => format!("{}/{}", self.base_url, TASKS_PATH),
        }
    }

    /// Sends the request and unwraps the response envelope.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<Option<T>, ApiError> {
        let response = request
            .header("X-API-KEY", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    ApiError::Config(e.to_string())
                } else {
                    ApiError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        debug!("HTTP {} ({} bytes)", status, body.len());

        if body.trim().is_empty() {
            return if status.is_success() {
                Ok(None)
            } else {
                Err(ApiError::Api {
                    status: status.as_u16(),
                    message: status.canonical_reason().unwrap_or("error").to_string(),
                })
            };
        }

        let envelope: ApiResponse<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(e) if status.is_success() => return Err(ApiError::Parse(e.to_string())),
            Err(_) => {
                return Err(ApiError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }
        };

        if let Some(message) = envelope.error_message {
            warn!("API reported error: {}", message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("error").to_string(),
            });
        }

        Ok(envelope.data)
    }
}

#[async_trait]
impl TaskStore for TaskClient {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let request = self.client.get(self.url(None));
        let tasks: Vec<Task> = self.send(request).await?.unwrap_or_default();
        info!("Fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn create_task(&self, payload: &TaskPayload) -> Result<(), ApiError> {
        let request = self.client.post(self.url(None)).json(payload);
        self.send::<serde_json::Value>(request).await?;
        info!("Created task");
        Ok(())
    }

    async fn update_task(&self, id: &str, payload: &TaskPayload) -> Result<(), ApiError> {
        let request = self.client.put(self.url(Some(id))).json(payload);
        self.send::<serde_json::Value>(request).await?;
        info!("Updated task {}", id);
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let request = self.client.delete(self.url(Some(id)));
        self.send::<serde_json::Value>(request).await?;
        info!("Deleted task {}", id);
        Ok(())
    }
}
