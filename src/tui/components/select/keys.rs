//! Keypress interpretation for the select prompt.
//!
//! Enter does nothing here. The list is a menu: a row is committed by
//! pressing one of the currently allowed action letters while it is
//! highlighted.

use super::selection::Direction;
use super::Status;
use crate::core::menu::LetterSet;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Navigate(Direction),
    /// 1-based position as typed.
    JumpTo(usize),
    /// Commit the active item with this (uppercase) letter.
    Commit(char),
    NoOp,
}

/// First match wins: Enter, allowed letter, arrows, digit, anything else.
pub fn interpret(event: &TuiEvent, status: Status, allowed: &LetterSet) -> KeyAction {
    if status == Status::Done {
        return KeyAction::NoOp;
    }

    match event {
        TuiEvent::Submit => KeyAction::NoOp,
        TuiEvent::InputChar(c) if allowed.contains(*c) => {
            KeyAction::Commit(c.to_ascii_uppercase())
        }
        TuiEvent::CursorUp => KeyAction::Navigate(Direction::Prev),
        TuiEvent::CursorDown => KeyAction::Navigate(Direction::Next),
        TuiEvent::InputChar(c) => match c.to_digit(10) {
            Some(digit) => KeyAction::JumpTo(digit as usize),
            None => KeyAction::NoOp,
        },
        _ => KeyAction::NoOp,
    }
}
