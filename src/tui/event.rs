use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, PartialEq, Eq)]
pub enum TuiEvent {
    /// A printable character for the search query.
    InputChar(char),
    Backspace,
    CursorUp,
    CursorDown,
    /// Left or Right arrow: flip selection at the cursor.
    Toggle,
    /// Enter: commit the selection.
    Submit,
    /// Esc or Ctrl+C: leave without copying.
    Quit,
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => map_key(key_event),
            Event::Resize(..) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Translate a crossterm key event. Kept separate from polling so the
/// mapping is testable without a terminal.
fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Windows terminals deliver both press and release.
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Left) | (_, KeyCode::Right) => Some(TuiEvent::Toggle),
        (_, KeyCode::Backspace) | (_, KeyCode::Delete) => Some(TuiEvent::Backspace),
        // Plain or shifted characters feed the query; anything with
        // Ctrl/Alt held is not printable input.
        (mods, KeyCode::Char(c)) if mods.is_empty() || mods == KeyModifiers::SHIFT => {
            Some(TuiEvent::InputChar(c))
        }
        _ => None,
    }
}
