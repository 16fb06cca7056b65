use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use tokio::sync::mpsc::UnboundedSender;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C. Cancels whatever prompt is waiting.
    ForceQuit,
    InputChar(char),
    Submit,
    Backspace,
    Escape,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Resize,
}

/// Map a raw crossterm event to a `TuiEvent`. Key releases and repeats are dropped.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (m, KeyCode::Char(_)) if m.contains(KeyModifiers::CONTROL) => None,
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Spawn the blocking terminal reader. Events are pushed into `sender` one at a
/// time; the thread exits when the receiver is dropped or the terminal errors.
pub fn spawn_reader(sender: UnboundedSender<TuiEvent>) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(raw) => {
                    if let Some(event) = translate(raw)
                        && sender.send(event).is_err()
                    {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Terminal read failed: {}", e);
                    break;
                }
            }
        }
    })
}
