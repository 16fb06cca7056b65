//! # Tasks
//!
//! The task record as the remote API returns it, plus the ordering the
//! menu displays it in.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a task. Anything the server sends that we don't know
/// about lands in `Unknown` instead of failing the whole list.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    Completed,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Older API revisions send `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub task_status: TaskStatus,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub created_on: i64,
    #[serde(default)]
    pub completed_on: i64,
}

impl Task {
    /// Stand-in row shown when the list is empty. Never sent to the API.
    pub fn placeholder() -> Self {
        Self {
            id: "0".to_string(),
            content: "No tasks found".to_string(),
            task_status: TaskStatus::Unknown,
            created_on: 0,
            completed_on: 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.task_status == TaskStatus::Completed
    }

    /// One-line detail shown under the highlighted task.
    pub fn description(&self) -> String {
        if self.is_completed() {
            format!("Completed on {}", format_millis(self.completed_on))
        } else {
            format!("Created on {}", format_millis(self.created_on))
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// Format a millisecond timestamp in the local timezone, e.g. "Mar 04 2025, 14:07".
pub fn format_millis(ms: i64) -> String {
    let dt: DateTime<Local> = DateTime::<Utc>::from_timestamp_millis(ms)
        .unwrap_or_default()
        .with_timezone(&Local);
    dt.format("%b %d %Y, %H:%M").to_string()
}

impl TaskStatus {
    /// Display group: pending, then completed, then anything else.
    fn rank(self) -> u8 {
        match self {
            TaskStatus::Pending => 0,
            TaskStatus::Completed => 1,
            TaskStatus::Unknown => 2,
        }
    }
}

/// Sort for display: pending first (newest created first), then completed
/// (most recently completed first), then unknown statuses. Ties keep their
/// server order.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        a.task_status
            .rank()
            .cmp(&b.task_status.rank())
            .then_with(|| match a.task_status {
                TaskStatus::Pending => b.created_on.cmp(&a.created_on),
                TaskStatus::Completed => b.completed_on.cmp(&a.completed_on),
                TaskStatus::Unknown => Ordering::Equal,
            })
    });
}
