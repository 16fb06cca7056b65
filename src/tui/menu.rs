//! Builds the task-list prompt from application state.

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::task::Task;
use crate::tui::components::select::{Choice, Entry, LetterResolver, SelectConfig};

pub const MENU_MESSAGE: &str = "Tasks";

/// One choice per task: label is the content, completed tasks are disabled.
/// An empty list yields a single disabled placeholder row.
pub fn menu_choices(tasks: &[Task]) -> Vec<Entry<Task>> {
    if tasks.is_empty() {
        return vec![Entry::from(
            Choice::new(Task::placeholder()).disabled(true),
        )];
    }

    tasks
        .iter()
        .map(|task| {
            Entry::from(
                Choice::new(task.clone())
                    .name(task.content.clone())
                    .description(task.description())
                    .disabled(task.is_completed()),
            )
        })
        .collect()
}

/// Letter gating for this display of the menu. The policy flags are
/// captured now; the active row is supplied by the prompt on each key.
pub fn letter_resolver(app: &App) -> LetterResolver<Task> {
    let policy = app.policy();
    Box::new(move |choice| policy.allowed_letters(choice.is_disabled()))
}

pub fn menu_config(app: &App, config: &ResolvedConfig) -> SelectConfig<Task> {
    let mut select = SelectConfig::new(MENU_MESSAGE, menu_choices(&app.tasks), letter_resolver(app));
    select.page_size = config.page_size;
    select.loop_nav = config.loop_navigation;
    select.help_mode = config.help_mode;
    select.default = app.default_task().cloned();
    select
}
