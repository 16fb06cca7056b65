use serde::{Deserialize, Serialize};

use crate::core::task::TaskStatus;

/// Every response from the task API is wrapped in this envelope.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error_message: Option<String>,
}

/// Request body for create and update. Unset fields are left out entirely
/// so an update only touches what it names.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_on: Option<i64>,
}

impl TaskPayload {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn completed(at_millis: i64) -> Self {
        Self {
            task_status: Some(TaskStatus::Completed),
            completed_on: Some(at_millis),
            ..Default::default()
        }
    }
}
