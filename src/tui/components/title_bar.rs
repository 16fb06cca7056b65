//! # TitleBar Component
//!
//! Top status bar: app name, how many tasks are pending, and the current
//! status message ("Loading...", "Task created", errors).
//!
//! Stateless. It receives all data as props and renders a single line:
//!
//! 1. **Status message**: `"stufftodo (3 pending) | Loading..."`
//! 2. **Default**: `"stufftodo (3 pending)"`
//!
//! When `error` is set the whole line turns red, since the menu then only
//! accepts `Q`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub pending: usize,
    pub status_message: String,
    pub error: bool,
}

impl TitleBar {
    pub fn new(pending: usize, status_message: String, error: bool) -> Self {
        Self {
            pending,
            status_message,
            error,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!("stufftodo ({} pending)", self.pending)
        } else {
            format!("stufftodo ({} pending) | {}", self.pending, self.status_message)
        };

        let style = if self.error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Span::styled(title_text, style), area);
    }
}
