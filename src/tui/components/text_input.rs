//! # TextInput Component
//!
//! Single-line question used for creating and editing tasks.
//!
//! Enter submits the buffer, Esc cancels. Left/Right move the cursor,
//! Backspace deletes before it. The cursor position is a byte offset that
//! always sits on a char boundary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    Submit(String),
    Cancel,
}

pub struct TextInput {
    message: String,
    pub buffer: String,
    /// Byte offset into `buffer`.
    pos: usize,
}

impl TextInput {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            buffer: String::new(),
            pos: 0,
        }
    }

    /// Start with `initial` in the buffer and the cursor at its end.
    pub fn with_initial(message: impl Into<String>, initial: &str) -> Self {
        Self {
            message: message.into(),
            buffer: initial.to_string(),
            pos: initial.len(),
        }
    }

    fn prompt_prefix(&self) -> String {
        format!("? {} ", self.message)
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> usize {
    s[..pos].char_indices().next_back().map_or(0, |(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |c| pos + c.len_utf8())
}

impl Component for TextInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prefix = self.prompt_prefix();
        let line = Line::from(vec![
            Span::styled("?", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" {} ", self.message),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(self.buffer.clone()),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        let column = prefix.width() + self.buffer[..self.pos].width();
        let max_x = area.width.saturating_sub(1);
        let x = area.x + (column as u16).min(max_x);
        frame.set_cursor_position((x, area.y));
    }
}

impl EventHandler for TextInput {
    type Event = TextInputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.pos, *c);
                self.pos += c.len_utf8();
                None
            }
            TuiEvent::Backspace => {
                if self.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.pos);
                    self.buffer.drain(prev..self.pos);
                    self.pos = prev;
                }
                None
            }
            TuiEvent::CursorLeft => {
                self.pos = prev_char_boundary(&self.buffer, self.pos);
                None
            }
            TuiEvent::CursorRight => {
                self.pos = next_char_boundary(&self.buffer, self.pos);
                None
            }
            TuiEvent::Submit => Some(TextInputEvent::Submit(self.buffer.clone())),
            TuiEvent::Escape => Some(TextInputEvent::Cancel),
            _ => None,
        }
    }
}
