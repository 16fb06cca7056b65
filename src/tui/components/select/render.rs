//! Frame rendering for the select prompt. Pure: everything it draws comes in
//! through [`PromptView`].

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::Status;
use super::choice::Item;
use super::pager::visible_window;

pub const CURSOR: &str = "❯";
const PREFIX_IDLE: &str = "?";
const PREFIX_DONE: &str = "✔";
const HELP_TOP: &str = "(Use arrow keys)";
const HELP_BOTTOM: &str = "(Use arrow keys to reveal more choices)";

/// Everything one frame depends on.
pub struct PromptView<'a, T> {
    pub message: &'a str,
    pub items: &'a [Item<T>],
    pub active: usize,
    pub status: Status,
    pub page_size: usize,
    pub loop_nav: bool,
    pub show_help: bool,
}

fn highlight() -> Style {
    Style::default().fg(Color::Cyan)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn header<'a>(prefix: Span<'a>, message: &str) -> Vec<Span<'a>> {
    vec![
        prefix,
        Span::raw(" "),
        Span::styled(message.to_string(), Style::default().add_modifier(Modifier::BOLD)),
    ]
}

pub fn render_lines<T>(view: &PromptView<'_, T>) -> Vec<Line<'static>> {
    let active = view.items.get(view.active).and_then(Item::as_choice);

    if view.status == Status::Done {
        let mut spans = header(
            Span::styled(PREFIX_DONE, Style::default().fg(Color::Green)),
            view.message,
        );
        if let Some(choice) = active {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(choice.short.clone(), highlight()));
        }
        return vec![Line::from(spans)];
    }

    // separators don't count against the page, same as the pager
    let selectable = view.items.iter().filter(|item| item.is_selectable()).count();
    let overflows = selectable > view.page_size;
    let mut spans = header(
        Span::styled(
            PREFIX_IDLE,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        view.message,
    );
    if view.show_help && !overflows {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(HELP_TOP, dim()));
    }

    let mut lines = vec![Line::from(spans)];
    for index in visible_window(view.items, view.active, view.page_size, view.loop_nav) {
        lines.push(render_item(&view.items[index], index == view.active));
    }

    if view.show_help && overflows {
        lines.push(Line::styled(HELP_BOTTOM, dim()));
    }
    if let Some(description) = active.and_then(|c| c.description.as_deref()) {
        lines.push(Line::styled(description.to_string(), highlight()));
    }
    lines
}

fn render_item<T>(item: &Item<T>, is_active: bool) -> Line<'static> {
    match item {
        Item::Separator(separator) => Line::styled(format!(" {}", separator.text), dim()),
        Item::Choice(choice) => {
            let cursor = if is_active { CURSOR } else { " " };
            let mut text = format!("{cursor} {}", choice.name);
            if let Some(label) = choice.disabled.label() {
                text.push(' ');
                text.push_str(&label);
            }
            let style = if is_active { highlight() } else { Style::default() };
            Line::styled(text, style)
        }
    }
}
