//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Session lifecycle
//!
//! One synchronous loop: draw, poll (250ms timeout), decode, reduce,
//! then run whatever `Effect` the reducer asked for. Listing and
//! serialization block the loop; that is fine, the session has nothing
//! else to do. A failed listing, serialization, or copy tears the whole
//! session down with the error; a partial listing or a partial
//! clipboard payload is never shown as success.
//!
//! On a successful commit the final frame (with the success status) is
//! drawn once, the process lingers briefly so the clipboard write can
//! flush, and the loop exits.

mod components;
mod event;
mod ui;

use std::env;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use log::info;

use crate::clip::{CopySink, SinkError, SystemClipboard};
use crate::core::action::{Action, Effect, update};
use crate::core::entries::{ListError, list_dir};
use crate::core::serialize::{SerializeError, serialize};
use crate::core::state::{App, EXCLUDED_NAMES};
use crate::tui::components::EntryListState;
use crate::tui::event::{TuiEvent, poll_event};

/// How long the final frame lingers after a successful copy, so the
/// clipboard write can flush before the process exits.
const EXIT_DELAY: Duration = Duration::from_millis(100);

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub entry_list: EntryListState,
}

/// Any failure that ends the session. All of them are fatal: nothing in
/// here retries, and none of them may masquerade as a successful copy.
#[derive(Debug)]
pub enum SessionError {
    Io(io::Error),
    List(ListError),
    Serialize(SerializeError),
    Sink(SinkError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(e) => write!(f, "terminal error: {e}"),
            SessionError::List(e) => write!(f, "listing failed: {e}"),
            SessionError::Serialize(e) => write!(f, "serialization failed: {e}"),
            SessionError::Sink(e) => write!(f, "copy failed: {e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        SessionError::Io(e)
    }
}

impl From<ListError> for SessionError {
    fn from(e: ListError) -> Self {
        SessionError::List(e)
    }
}

impl From<SerializeError> for SessionError {
    fn from(e: SerializeError) -> Self {
        SessionError::Serialize(e)
    }
}

impl From<SinkError> for SessionError {
    fn from(e: SinkError) -> Self {
        SessionError::Sink(e)
    }
}

/// Run a picker session over the current working directory, copying to
/// the system clipboard on commit.
pub fn run() -> Result<(), SessionError> {
    let root = env::current_dir()?;
    run_in(root, &mut SystemClipboard)
}

/// Run a picker session over `root` with the given sink.
pub fn run_in(root: PathBuf, sink: &mut dyn CopySink) -> Result<(), SessionError> {
    let mut app = App::new(root);
    // The initial listing happens before the terminal is touched, so a
    // broken working directory fails with a plain error message.
    app.entries = list_dir(&app.root, EXCLUDED_NAMES, &app.query)?;
    info!("session started in {} ({} entries)", app.root.display(), app.entries.len());

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, sink);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    sink: &mut dyn CopySink,
) -> Result<(), SessionError> {
    let mut tui = TuiState {
        entry_list: EntryListState::new(),
    };

    loop {
        terminal.draw(|f| ui::draw_ui(f, app, &mut tui))?;

        let Some(tui_event) = poll_event(POLL_TIMEOUT) else {
            continue;
        };
        let action = match tui_event {
            TuiEvent::Resize => continue,
            TuiEvent::InputChar(c) => Action::TypeChar(c),
            TuiEvent::Backspace => Action::DeleteChar,
            TuiEvent::CursorUp => Action::MoveUp,
            TuiEvent::CursorDown => Action::MoveDown,
            TuiEvent::Toggle => Action::ToggleSelect,
            TuiEvent::Submit => Action::Commit,
            TuiEvent::Quit => Action::Quit,
        };

        match update(app, action) {
            Effect::None => {}
            Effect::Refresh => {
                let entries = list_dir(&app.root, EXCLUDED_NAMES, &app.query)?;
                update(app, Action::ViewLoaded(entries));
            }
            Effect::Commit => {
                let document = serialize(&app.entries, &app.selected, EXCLUDED_NAMES)?;
                sink.copy(&document.text)?;
                info!("commit: {} file(s) copied", document.file_count);
                app.status_message = success_message(document.file_count);
                // One last frame so the user sees the confirmation.
                terminal.draw(|f| ui::draw_ui(f, app, &mut tui))?;
                std::thread::sleep(EXIT_DELAY);
                return Ok(());
            }
            Effect::Quit => {
                info!("session quit without copying");
                return Ok(());
            }
        }
    }
}

fn success_message(file_count: usize) -> String {
    let plural = if file_count == 1 { "" } else { "s" };
    format!("✨ {file_count} file{plural} added to your clipboard ✨")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message_pluralizes() {
        assert_eq!(success_message(1), "✨ 1 file added to your clipboard ✨");
        assert_eq!(success_message(0), "✨ 0 files added to your clipboard ✨");
        assert_eq!(success_message(3), "✨ 3 files added to your clipboard ✨");
    }
}
