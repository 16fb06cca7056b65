//! # Application State
//!
//! Core business state for stufftodo. Domain logic only, no TUI types.
//!
//! ```text
//! App
//! ├── tasks: Vec<Task>              // sorted, as last fetched
//! ├── error: Option<String>         // last fetch failure
//! ├── status_message: String        // title bar text
//! └── last_selected: Option<String> // id of the task the cursor was on
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::menu::MenuPolicy;
use crate::core::task::Task;

#[derive(Debug, Default)]
pub struct App {
    pub tasks: Vec<Task>,
    pub error: Option<String>,
    pub status_message: String,
    pub last_selected: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Snapshot of the flags the letter gating reads.
    pub fn policy(&self) -> MenuPolicy {
        MenuPolicy {
            error: self.error.is_some(),
            has_tasks: self.has_tasks(),
        }
    }

    /// The task the cursor should start on when the menu is shown again.
    pub fn default_task(&self) -> Option<&Task> {
        let id = self.last_selected.as_deref()?;
        self.tasks.iter().find(|task| task.id == id)
    }
}
