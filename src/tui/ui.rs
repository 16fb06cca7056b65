use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::menu::MenuAction;
use crate::core::state::App;
use crate::core::task::TaskStatus;
use crate::tui::component::Component;
use crate::tui::components::TitleBar;

/// Title bar on top, the active component in the middle, key legend at the bottom.
pub fn draw_ui<C: Component + ?Sized>(frame: &mut Frame, app: &App, body: &mut C) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, _gap, body_area, legend_area] = layout.areas(frame.area());

    let pending = app
        .tasks
        .iter()
        .filter(|t| t.task_status == TaskStatus::Pending)
        .count();
    let mut title_bar = TitleBar::new(pending, app.status_message.clone(), app.error.is_some());
    title_bar.render(frame, title_area);

    body.render(frame, body_area);

    frame.render_widget(legend(), legend_area);
}

/// Body used while waiting on the API: only the title bar has something to say.
pub struct Blank;

impl Component for Blank {
    fn render(&mut self, _frame: &mut Frame, _area: ratatui::layout::Rect) {}
}

fn legend() -> Line<'static> {
    let text = MenuAction::ALL
        .iter()
        .map(|action| format!("{} {}", action.letter(), action.label()))
        .collect::<Vec<_>>()
        .join("  ");
    Line::styled(text, Style::default().fg(Color::DarkGray))
}
