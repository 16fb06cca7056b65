//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! A reader thread blocks on crossterm and pushes translated `TuiEvent`s into
//! an unbounded channel. The workflow awaits that channel, so waiting for a
//! key is a suspension point rather than a blocking call. Each event is
//! handled to completion (component update, redraw) before the next one is
//! received.
//!
//! ```text
//! reader thread ──TuiEvent──▶ drive(component) ──Event──▶ update(app, action) ──▶ Effect
//!                                  ▲                                              │
//!                                  └──────────── next component ◀─────────────────┘
//! ```

pub mod component;
pub mod components;
pub mod event;
pub mod menu;
mod ui;

use log::{info, warn};
use std::io::{Write, stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::api::{self, TaskStore};
use crate::core::action::{Action, Effect, Mutation, update};
use crate::core::config::ResolvedConfig;
use crate::core::menu::MenuAction;
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{PromptError, SelectPrompt, TextInput, TextInputEvent};
use crate::tui::event::TuiEvent;

struct TerminalModeGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalModeGuard<W> {
    fn new(mut out: W) -> std::io::Result<Self> {
        execute!(out, Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self { out })
    }
}

impl<W: Write> Drop for TerminalModeGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show);
    }
}

/// Hide the cursor for the lifetime of the guard. Failure is logged, not fatal.
fn hide_cursor<W: Write>(out: W) -> Option<TerminalModeGuard<W>> {
    match TerminalModeGuard::new(out) {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to hide cursor: {}", e);
            None
        }
    }
}

fn draw<B: Backend, C: Component + ?Sized>(
    terminal: &mut Terminal<B>,
    app: &App,
    body: &mut C,
) -> Result<(), PromptError> {
    terminal
        .draw(|f| ui::draw_ui(f, app, body))
        .map(|_| ())
        .map_err(|e| PromptError::Terminal(e.to_string()))
}

/// Run one component until it emits its event.
///
/// Draws, then waits for the next key, hands it to the component and redraws,
/// strictly one key at a time. The frame after the finishing key is drawn too,
/// so a committed select prompt shows its answer line. Ctrl+C or a closed
/// input channel cancels.
pub async fn drive<B, C>(
    terminal: &mut Terminal<B>,
    events: &mut UnboundedReceiver<TuiEvent>,
    app: &App,
    component: &mut C,
) -> Result<C::Event, PromptError>
where
    B: Backend,
    C: Component + EventHandler,
{
    draw(terminal, app, component)?;
    loop {
        let Some(event) = events.recv().await else {
            return Err(PromptError::Cancelled);
        };
        if event == TuiEvent::ForceQuit {
            info!("Prompt cancelled by Ctrl+C");
            return Err(PromptError::Cancelled);
        }

        let outcome = component.handle_event(&event);
        draw(terminal, app, component)?;
        if let Some(outcome) = outcome {
            return Ok(outcome);
        }
    }
}

/// Execute effects until the user quits. Cancelling any prompt quits too.
pub async fn workflow<B: Backend>(
    terminal: &mut Terminal<B>,
    events: &mut UnboundedReceiver<TuiEvent>,
    config: &ResolvedConfig,
    store: &dyn TaskStore,
    app: &mut App,
) -> Result<(), PromptError> {
    let mut effect = update(app, Action::Refresh);
    loop {
        effect = match effect {
            Effect::FetchTasks => {
                draw(terminal, app, &mut ui::Blank)?;
                match store.list_tasks().await {
                    Ok(tasks) => update(app, Action::TasksLoaded(tasks)),
                    Err(e) => {
                        warn!("Failed to fetch tasks: {}", e);
                        update(app, Action::LoadFailed(e.to_string()))
                    }
                }
            }
            Effect::ShowMenu => {
                let mut prompt = SelectPrompt::new(menu::menu_config(app, config))?;
                match drive(terminal, events, app, &mut prompt).await {
                    Ok(answer) => match MenuAction::from_letter(answer.letter) {
                        Some(action) => update(
                            app,
                            Action::Chosen {
                                action,
                                task: answer.value,
                            },
                        ),
                        None => Effect::ShowMenu,
                    },
                    Err(PromptError::Cancelled) => update(app, Action::Quit),
                    Err(e) => return Err(e),
                }
            }
            Effect::PromptNewTask => {
                let mut input = TextInput::new("New task:");
                match drive(terminal, events, app, &mut input).await {
                    Ok(TextInputEvent::Submit(content)) => {
                        update(app, Action::TextEntered(Mutation::Create { content }))
                    }
                    Ok(TextInputEvent::Cancel) => update(app, Action::TextCancelled),
                    Err(PromptError::Cancelled) => update(app, Action::Quit),
                    Err(e) => return Err(e),
                }
            }
            Effect::PromptEdit(task) => {
                let mut input = TextInput::with_initial("Edit task:", &task.content);
                match drive(terminal, events, app, &mut input).await {
                    Ok(TextInputEvent::Submit(content)) => update(
                        app,
                        Action::TextEntered(Mutation::Edit {
                            id: task.id,
                            content,
                        }),
                    ),
                    Ok(TextInputEvent::Cancel) => update(app, Action::TextCancelled),
                    Err(PromptError::Cancelled) => update(app, Action::Quit),
                    Err(e) => return Err(e),
                }
            }
            Effect::Send(mutation) => {
                app.status_message = "Saving...".to_string();
                draw(terminal, app, &mut ui::Blank)?;
                match api::apply(store, &mutation).await {
                    Ok(()) => update(app, Action::MutationDone(mutation)),
                    Err(e) => {
                        warn!("Failed to apply {:?}: {}", mutation, e);
                        update(app, Action::MutationFailed(e.to_string()))
                    }
                }
            }
            Effect::Quit => {
                info!("Quitting");
                return Ok(());
            }
        };
    }
}

pub async fn run(config: ResolvedConfig, store: Box<dyn TaskStore>) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let terminal_mode_guard = hide_cursor(stdout());

    let (tx, mut rx) = mpsc::unbounded_channel();
    event::spawn_reader(tx);

    let mut app = App::new();
    let result = workflow(&mut terminal, &mut rx, &config, store.as_ref(), &mut app).await;

    drop(terminal_mode_guard);
    ratatui::restore();

    result.map_err(std::io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CliOverrides, TodoConfig, resolve};
    use crate::core::task::TaskStatus;
    use crate::test_support::{MemoryStore, completed_task, pending_task};
    use crate::tui::components::SelectConfig;
    use crate::tui::components::select::{Answer, Entry, LetterResolver};
    use crate::core::menu::LetterSet;
    use ratatui::backend::TestBackend;

    fn test_config() -> ResolvedConfig {
        let mut config = TodoConfig::default();
        config.api.api_key = Some("test".to_string());
        resolve(&config, &CliOverrides::default()).unwrap()
    }

    fn keys(events: Vec<TuiEvent>) -> UnboundedReceiver<TuiEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        for event in events {
            tx.send(event).unwrap();
        }
        rx
    }

    fn typed(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    struct BrokenTerminal;

    impl Write for BrokenTerminal {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("terminal gone"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("terminal gone"))
        }
    }

    #[test]
    fn test_hide_cursor_failure_is_not_fatal() {
        assert!(hide_cursor(BrokenTerminal).is_none());
    }

    #[test]
    fn test_hide_cursor_guard_restores_on_drop() {
        let guard = hide_cursor(Vec::new()).unwrap();
        assert_eq!(guard.out, b"\x1b[?25l");
        let mut out = Vec::new();
        {
            let _guard = hide_cursor(&mut out).unwrap();
        }
        assert_eq!(out, b"\x1b[?25l\x1b[?25h");
    }

    #[tokio::test]
    async fn test_drive_resolves_on_letter_and_draws_answer() {
        let resolver: LetterResolver<String> = Box::new(|_| LetterSet::from_letters("QCDEM"));
        let choices: Vec<Entry<String>> = vec!["Alpha".into(), "Beta".into(), "Gamma".into()];
        let mut prompt = SelectPrompt::new(SelectConfig::new("Tasks", choices, resolver)).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let mut rx = keys(vec![TuiEvent::CursorDown, TuiEvent::Submit, TuiEvent::InputChar('e')]);
        let app = App::new();

        let answer = drive(&mut terminal, &mut rx, &app, &mut prompt).await.unwrap();
        assert_eq!(answer, Answer { value: "Beta".to_string(), letter: 'E' });
        assert!(screen(&terminal).contains("✔ Tasks Beta"));
    }

    #[tokio::test]
    async fn test_drive_cancels_on_ctrl_c_and_closed_input() {
        let resolver: LetterResolver<String> = Box::new(|_| LetterSet::from_letters("Q"));
        let mut prompt =
            SelectPrompt::new(SelectConfig::new("Tasks", vec!["a".into()], resolver)).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        let app = App::new();

        let mut rx = keys(vec![TuiEvent::ForceQuit, TuiEvent::InputChar('q')]);
        let result = drive(&mut terminal, &mut rx, &app, &mut prompt).await;
        assert!(matches!(result, Err(PromptError::Cancelled)));

        let mut rx = keys(vec![TuiEvent::CursorDown]);
        let result = drive(&mut terminal, &mut rx, &app, &mut prompt).await;
        assert!(matches!(result, Err(PromptError::Cancelled)));
    }

    #[tokio::test]
    async fn test_workflow_marks_task_done_then_quits() {
        let store = MemoryStore::new(vec![pending_task("1", "Walk dog", 5)]);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut rx = keys(vec![TuiEvent::InputChar('m'), TuiEvent::InputChar('q')]);
        let mut app = App::new();

        workflow(&mut terminal, &mut rx, &test_config(), &store, &mut app)
            .await
            .unwrap();

        let tasks = store.list_tasks().await.unwrap();
        assert_eq!(tasks[0].task_status, TaskStatus::Completed);
        assert_eq!(app.status_message, "Task marked done");
    }

    #[tokio::test]
    async fn test_workflow_creates_task() {
        let store = MemoryStore::new(vec![]);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut events = vec![TuiEvent::InputChar('c')];
        events.extend(typed("Buy milk"));
        events.push(TuiEvent::Submit);
        events.push(TuiEvent::InputChar('q'));
        let mut rx = keys(events);
        let mut app = App::new();

        workflow(&mut terminal, &mut rx, &test_config(), &store, &mut app)
            .await
            .unwrap();

        let tasks = store.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].content, "Buy milk");
        assert_eq!(app.tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_workflow_edit_is_blocked_on_completed_row() {
        let store = MemoryStore::new(vec![
            pending_task("1", "Open", 5),
            completed_task("2", "Closed", 1, 9),
        ]);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        // move onto the completed row, try to edit, then delete it
        let mut rx = keys(vec![
            TuiEvent::CursorDown,
            TuiEvent::InputChar('e'),
            TuiEvent::InputChar('d'),
            TuiEvent::InputChar('q'),
        ]);
        let mut app = App::new();

        workflow(&mut terminal, &mut rx, &test_config(), &store, &mut app)
            .await
            .unwrap();

        let tasks = store.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "1");
    }

    #[tokio::test]
    async fn test_workflow_fetch_error_only_allows_quit() {
        let store = MemoryStore::failing();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        // 'c' is gated; if it slipped through, the text prompt would swallow 'q'
        let mut rx = keys(vec![TuiEvent::InputChar('c'), TuiEvent::InputChar('q')]);
        let mut app = App::new();

        workflow(&mut terminal, &mut rx, &test_config(), &store, &mut app)
            .await
            .unwrap();

        assert!(app.error.is_some());
        assert!(screen(&terminal).contains("something went wrong"));
        assert!(screen(&terminal).contains("✔ Tasks No tasks found"));
    }

    #[tokio::test]
    async fn test_workflow_quits_when_input_closes() {
        let store = MemoryStore::new(vec![pending_task("1", "a", 1)]);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut rx = keys(vec![]);
        let mut app = App::new();

        let result = workflow(&mut terminal, &mut rx, &test_config(), &store, &mut app).await;
        assert!(result.is_ok());
    }
}
