//! # Select Prompt Component
//!
//! A single-choice list prompt driven by letter keys.
//!
//! ```text
//! entries ─▶ normalize ─▶ bounds + initial active
//!                               │
//!            ┌──────────────────┘
//!            ▼
//!   render ─▶ draw ─▶ key ─▶ interpret(key, status, allowed letters)
//!     ▲                          │
//!     └──── Navigate / JumpTo ───┤
//!                                └─▶ Commit ─▶ Answer { value, letter }
//! ```
//!
//! The allowed letters are recomputed from the active item before every key,
//! through the resolver in [`SelectConfig::allowed_letters`]. Navigation
//! skips separators only; disabled rows can be highlighted and are gated at
//! commit time by the resolver.
//!
//! Status goes `Idle → Done` exactly once. After that the prompt ignores all
//! input and renders only its answer line.

pub mod choice;
pub mod keys;
pub mod pager;
pub mod render;
pub mod selection;

use std::fmt;

use log::debug;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::config::{DEFAULT_LOOP, DEFAULT_PAGE_SIZE, HelpMode};
use crate::core::menu::LetterSet;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub use choice::{Choice, Disabled, Entry, Item, NormalizedChoice, Separator};
use keys::{KeyAction, interpret};
use render::{PromptView, render_lines};
use selection::{Bounds, compute_bounds, jump_to_numeric, move_active, resolve_initial_active};

#[derive(Debug)]
pub enum PromptError {
    /// The choice list has nothing but separators (or nothing at all).
    NoSelectableChoices,
    /// Input ended or Ctrl+C arrived before a commit.
    Cancelled,
    /// Drawing to the terminal failed.
    Terminal(String),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::NoSelectableChoices => {
                write!(f, "[select prompt] No selectable choices.")
            }
            PromptError::Cancelled => write!(f, "prompt cancelled"),
            PromptError::Terminal(msg) => write!(f, "terminal error: {msg}"),
        }
    }
}

impl std::error::Error for PromptError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Done,
}

/// What a commit resolves with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer<T> {
    pub value: T,
    /// The uppercase letter that committed.
    pub letter: char,
}

pub type LetterResolver<T> = Box<dyn Fn(&NormalizedChoice<T>) -> LetterSet + Send>;

pub struct SelectConfig<T> {
    pub message: String,
    pub choices: Vec<Entry<T>>,
    pub page_size: usize,
    pub loop_nav: bool,
    pub default: Option<T>,
    pub help_mode: HelpMode,
    /// Called with the active item before each keypress.
    pub allowed_letters: LetterResolver<T>,
}

impl<T> SelectConfig<T> {
    pub fn new(message: impl Into<String>, choices: Vec<Entry<T>>, allowed_letters: LetterResolver<T>) -> Self {
        Self {
            message: message.into(),
            choices,
            page_size: DEFAULT_PAGE_SIZE,
            loop_nav: DEFAULT_LOOP,
            default: None,
            help_mode: HelpMode::default(),
            allowed_letters,
        }
    }
}

pub struct SelectPrompt<T> {
    message: String,
    items: Vec<Item<T>>,
    bounds: Bounds,
    active: usize,
    status: Status,
    page_size: usize,
    loop_nav: bool,
    help_mode: HelpMode,
    first_render: bool,
    allowed_letters: LetterResolver<T>,
}

impl<T: fmt::Display + PartialEq + Clone> SelectPrompt<T> {
    /// Fails before anything is drawn when no entry is selectable.
    pub fn new(config: SelectConfig<T>) -> Result<Self, PromptError> {
        let items = choice::normalize(config.choices);
        let bounds = compute_bounds(&items)?;
        let active = resolve_initial_active(&items, config.default.as_ref(), bounds);

        Ok(Self {
            message: config.message,
            items,
            bounds,
            active,
            status: Status::Idle,
            page_size: config.page_size.max(1),
            loop_nav: config.loop_nav,
            help_mode: config.help_mode,
            first_render: true,
            allowed_letters: config.allowed_letters,
        })
    }
}

impl<T> SelectPrompt<T> {
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    fn selected_choice(&self) -> &NormalizedChoice<T> {
        match &self.items[self.active] {
            Item::Choice(choice) => choice,
            Item::Separator(_) => unreachable!("active index always points at a choice"),
        }
    }

    /// The letters a keypress could commit with right now.
    pub fn allowed_letters(&self) -> LetterSet {
        (self.allowed_letters)(self.selected_choice())
    }

    /// Lines for the next frame. Consumes the one-time help hint.
    pub fn lines(&mut self) -> Vec<Line<'static>> {
        let show_help = self.help_mode.shows(self.first_render);
        self.first_render = false;
        render_lines(&PromptView {
            message: &self.message,
            items: &self.items,
            active: self.active,
            status: self.status,
            page_size: self.page_size,
            loop_nav: self.loop_nav,
            show_help,
        })
    }
}

impl<T> Component for SelectPrompt<T> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}

impl<T: Clone> EventHandler for SelectPrompt<T> {
    type Event = Answer<T>;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let allowed = self.allowed_letters();
        match interpret(event, self.status, &allowed) {
            KeyAction::Commit(letter) => {
                self.status = Status::Done;
                debug!("select: commit {} on item {}", letter, self.active);
                Some(Answer {
                    value: self.selected_choice().value.clone(),
                    letter,
                })
            }
            KeyAction::Navigate(direction) => {
                self.active =
                    move_active(&self.items, self.active, direction, self.bounds, self.loop_nav);
                None
            }
            KeyAction::JumpTo(position) => {
                if let Some(index) = jump_to_numeric(&self.items, position) {
                    self.active = index;
                }
                None
            }
            KeyAction::NoOp => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::MenuPolicy;

    fn fixed(letters: &'static str) -> LetterResolver<String> {
        Box::new(move |_| LetterSet::from_letters(letters))
    }

    fn prompt(choices: Vec<Entry<String>>, letters: &'static str) -> SelectPrompt<String> {
        SelectPrompt::new(SelectConfig::new("Pick", choices, fixed(letters))).unwrap()
    }

    fn key(prompt: &mut SelectPrompt<String>, event: TuiEvent) -> Option<Answer<String>> {
        prompt.handle_event(&event)
    }

    #[test]
    fn test_arrow_scenario_wraps_to_start() {
        let mut p = prompt(vec!["Alpha".into(), "Beta".into(), "Gamma".into()], "Q");
        assert_eq!(p.active(), 0);
        key(&mut p, TuiEvent::CursorDown);
        key(&mut p, TuiEvent::CursorDown);
        assert_eq!(p.active(), 2);
        key(&mut p, TuiEvent::CursorDown);
        assert_eq!(p.active(), 0);
    }

    #[test]
    fn test_commit_resolves_value_and_letter() {
        let mut p = prompt(vec!["Alpha".into(), "Beta".into()], "QCDEM");
        key(&mut p, TuiEvent::CursorDown);
        assert_eq!(key(&mut p, TuiEvent::Submit), None);
        let answer = key(&mut p, TuiEvent::InputChar('e')).unwrap();
        assert_eq!(answer, Answer { value: "Beta".to_string(), letter: 'E' });
        assert_eq!(p.status(), Status::Done);

        // terminal: nothing else is processed
        assert_eq!(key(&mut p, TuiEvent::InputChar('q')), None);
        key(&mut p, TuiEvent::CursorUp);
        assert_eq!(p.active(), 1);
    }

    #[test]
    fn test_disallowed_letter_is_ignored() {
        let mut p = prompt(vec!["Alpha".into()], "QC");
        assert_eq!(key(&mut p, TuiEvent::InputChar('m')), None);
        assert_eq!(p.status(), Status::Idle);
    }

    #[test]
    fn test_no_selectable_choices_fails_before_render() {
        let result = SelectPrompt::new(SelectConfig::new(
            "Pick",
            vec![Entry::<String>::from(Separator::default())],
            fixed("Q"),
        ));
        assert!(matches!(result, Err(PromptError::NoSelectableChoices)));
    }

    #[test]
    fn test_default_value_selects_initial_row() {
        let mut config = SelectConfig::new("Pick", vec!["a".into(), "b".into(), "c".into()], fixed("Q"));
        config.default = Some("c".to_string());
        let p = SelectPrompt::new(config).unwrap();
        assert_eq!(p.active(), 2);
    }

    #[test]
    fn test_numeric_jump_ignores_separators_and_range() {
        let mut p = prompt(
            vec!["a".into(), Entry::from(Separator::default()), "b".into()],
            "Q",
        );
        key(&mut p, TuiEvent::InputChar('3'));
        assert_eq!(p.active(), 2);
        key(&mut p, TuiEvent::InputChar('2'));
        assert_eq!(p.active(), 2);
        key(&mut p, TuiEvent::InputChar('9'));
        assert_eq!(p.active(), 2);
        key(&mut p, TuiEvent::InputChar('1'));
        assert_eq!(p.active(), 0);
    }

    #[test]
    fn test_gating_follows_the_active_item() {
        let policy = MenuPolicy { error: false, has_tasks: true };
        let resolver: LetterResolver<String> =
            Box::new(move |choice| policy.allowed_letters(choice.is_disabled()));
        let choices = vec![
            Entry::from(Separator::default()),
            Entry::from(Choice::new("Done task".to_string()).disabled(true)),
            Entry::from("Open task"),
        ];
        let mut p = SelectPrompt::new(SelectConfig::new("Tasks", choices, resolver)).unwrap();
        assert_eq!(p.active(), 1);
        assert!(!p.allowed_letters().contains('E'));
        assert_eq!(key(&mut p, TuiEvent::InputChar('e')), None);
        assert_eq!(key(&mut p, TuiEvent::InputChar('m')), None);

        key(&mut p, TuiEvent::CursorDown);
        assert!(p.allowed_letters().contains('E'));
        let answer = key(&mut p, TuiEvent::InputChar('m')).unwrap();
        assert_eq!(answer.value, "Open task");
        assert_eq!(answer.letter, 'M');
    }

    #[test]
    fn test_help_hint_only_on_first_frame() {
        let mut p = prompt(vec!["a".into(), "b".into()], "Q");
        assert_eq!(p.lines()[0].to_string(), "? Pick (Use arrow keys)");
        assert_eq!(p.lines()[0].to_string(), "? Pick");
    }

    #[test]
    fn test_render_collapses_after_commit() {
        use ratatui::{Terminal, backend::TestBackend};

        let mut p = prompt(vec!["Alpha".into(), "Beta".into()], "Q");
        key(&mut p, TuiEvent::InputChar('q'));

        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal.draw(|f| p.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("✔ Pick Alpha"));
        assert!(!text.contains("Beta"));
    }
}
