//! # Actions
//!
//! Everything that can happen in stufftodo becomes an `Action`.
//! User presses `M` on a task? That's `Action::Chosen { action: MarkDone, .. }`.
//! API answers? That's `Action::TasksLoaded(tasks)` or `Action::MutationDone(..)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state and returns the `Effect` the adapter should perform next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::menu::MenuAction;
use crate::core::state::App;
use crate::core::task::{Task, sort_tasks};

const LOADING: &str = "Loading...";

/// A change to send to the task API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create { content: String },
    Edit { id: String, content: String },
    Complete { id: String },
    Delete { id: String },
}

impl Mutation {
    fn done_message(&self) -> &'static str {
        match self {
            Mutation::Create { .. } => "Task created",
            Mutation::Edit { .. } => "Task updated",
            Mutation::Complete { .. } => "Task marked done",
            Mutation::Delete { .. } => "Task deleted",
        }
    }
}

#[derive(Debug)]
pub enum Action {
    Refresh,
    TasksLoaded(Vec<Task>),
    LoadFailed(String),
    /// A letter was committed on the task list with `task` highlighted.
    Chosen { action: MenuAction, task: Task },
    /// The text prompt produced a create/edit.
    TextEntered(Mutation),
    TextCancelled,
    MutationDone(Mutation),
    MutationFailed(String),
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    FetchTasks,
    ShowMenu,
    PromptNewTask,
    PromptEdit(Task),
    Send(Mutation),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Refresh => {
            app.status_message = LOADING.to_string();
            Effect::FetchTasks
        }
        Action::TasksLoaded(mut tasks) => {
            sort_tasks(&mut tasks);
            info!("Loaded {} tasks", tasks.len());
            app.tasks = tasks;
            app.error = None;
            // keep "Task created" etc. from the mutation that triggered the reload
            if app.status_message == LOADING {
                app.status_message.clear();
            }
            Effect::ShowMenu
        }
        Action::LoadFailed(message) => {
            app.tasks.clear();
            app.error = Some(message);
            app.status_message = "something went wrong".to_string();
            Effect::ShowMenu
        }
        Action::Chosen { action, task } => choose(app, action, task),
        Action::TextEntered(mutation) => {
            let empty = match &mutation {
                Mutation::Create { content } | Mutation::Edit { content, .. } => {
                    content.trim().is_empty()
                }
                _ => false,
            };
            if empty {
                app.status_message = "Nothing to save".to_string();
                return Effect::ShowMenu;
            }
            Effect::Send(mutation)
        }
        Action::TextCancelled => {
            app.status_message.clear();
            Effect::ShowMenu
        }
        Action::MutationDone(mutation) => {
            app.status_message = mutation.done_message().to_string();
            if let Mutation::Delete { id } = &mutation
                && app.last_selected.as_deref() == Some(id.as_str())
            {
                app.last_selected = None;
            }
            Effect::FetchTasks
        }
        Action::MutationFailed(_) => {
            app.status_message = "something went wrong".to_string();
            Effect::ShowMenu
        }
        Action::Quit => Effect::Quit,
    }
}

fn choose(app: &mut App, action: MenuAction, task: Task) -> Effect {
    if action == MenuAction::Quit {
        return Effect::Quit;
    }
    if action == MenuAction::Create {
        return Effect::PromptNewTask;
    }

    // The remaining actions operate on a real task.
    if !app.has_tasks() || app.error.is_some() {
        return Effect::ShowMenu;
    }
    app.last_selected = Some(task.id.clone());

    match action {
        MenuAction::Delete => Effect::Send(Mutation::Delete { id: task.id }),
        MenuAction::Edit if !task.is_completed() => Effect::PromptEdit(task),
        MenuAction::MarkDone if !task.is_completed() => {
            Effect::Send(Mutation::Complete { id: task.id })
        }
        _ => Effect::ShowMenu,
    }
}
