//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use async_trait::async_trait;

use crate::api::{ApiError, TaskPayload, TaskStore};
use crate::core::task::{Task, TaskStatus};

pub fn pending_task(id: &str, content: &str, created_on: i64) -> Task {
    Task {
        id: id.to_string(),
        content: content.to_string(),
        task_status: TaskStatus::Pending,
        created_on,
        completed_on: 0,
    }
}

pub fn completed_task(id: &str, content: &str, created_on: i64, completed_on: i64) -> Task {
    Task {
        id: id.to_string(),
        content: content.to_string(),
        task_status: TaskStatus::Completed,
        created_on,
        completed_on,
    }
}

/// An in-memory store for tests that don't need real API calls.
pub struct MemoryStore {
    tasks: Mutex<Vec<Task>>,
    next_id: Mutex<u32>,
    /// When set, `list_tasks` fails with a network error.
    pub fail_list: bool,
}

impl MemoryStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            next_id: Mutex::new(100),
            fail_list: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_list: true,
            ..Self::new(vec![])
        }
    }

    fn not_found(id: &str) -> ApiError {
        ApiError::Api {
            status: 404,
            message: format!("task {id} not found"),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        if self.fail_list {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn create_task(&self, payload: &TaskPayload) -> Result<(), ApiError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let mut task = pending_task(&next_id.to_string(), "", i64::from(*next_id));
        task.content = payload.content.clone().unwrap_or_default();
        self.tasks.lock().unwrap().push(task);
        Ok(())
    }

    async fn update_task(&self, id: &str, payload: &TaskPayload) -> Result<(), ApiError> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        if let Some(content) = &payload.content {
            task.content = content.clone();
        }
        if let Some(status) = payload.task_status {
            task.task_status = status;
        }
        if let Some(at) = payload.completed_on {
            task.completed_on = at;
        }
        Ok(())
    }

    async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
