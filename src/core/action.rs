//! # Actions
//!
//! Everything that can happen in grabbit becomes an `Action`.
//! User presses Enter? That's `Action::Commit`.
//! A fresh listing arrives? That's `Action::ViewLoaded(entries)`.
//!
//! The `update()` function takes the current state and an action,
//! then returns an `Effect` telling the event loop what I/O to run
//! next. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  mutated State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state.
//! The match below is the whole keyboard dispatch table, in priority
//! order: query editing, commit, navigation, selection.

use log::debug;

use crate::core::entries::Entry;
use crate::core::state::{App, MAX_QUERY_LEN};

#[derive(Debug)]
pub enum Action {
    /// A printable character that is not a recognized navigation key.
    TypeChar(char),
    /// Backspace/Delete: drop the last query character.
    DeleteChar,
    MoveUp,
    MoveDown,
    /// Left or Right arrow: flip selection at the cursor.
    ToggleSelect,
    /// Enter: serialize the selection and hand it to the sink.
    Commit,
    /// Esc or Ctrl+C: leave without copying.
    Quit,
    /// A freshly listed view replacing the current one.
    ViewLoaded(Vec<Entry>),
}

/// What the event loop must do after a state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The query changed: re-list the directory and send `ViewLoaded`.
    Refresh,
    /// Serialize the selection, copy it, and wind the session down.
    Commit,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::DeleteChar => {
            if app.query.pop().is_some() {
                Effect::Refresh
            } else {
                Effect::None
            }
        }
        Action::TypeChar(c) => {
            if app.query.chars().count() < MAX_QUERY_LEN {
                app.query.push(c);
                Effect::Refresh
            } else {
                // Query is at capacity; the keystroke is dropped.
                Effect::None
            }
        }
        Action::Commit => Effect::Commit,
        Action::MoveUp => {
            if !app.entries.is_empty() {
                app.cursor = if app.cursor > 0 {
                    app.cursor - 1
                } else {
                    app.entries.len() - 1
                };
            }
            Effect::None
        }
        Action::MoveDown => {
            if !app.entries.is_empty() {
                app.cursor = if app.cursor + 1 < app.entries.len() {
                    app.cursor + 1
                } else {
                    0
                };
            }
            Effect::None
        }
        Action::ToggleSelect => {
            if let Some(entry) = app.current_entry() {
                let path = entry.path.clone();
                if !app.selected.remove(&path) {
                    app.selected.insert(path);
                }
            }
            Effect::None
        }
        Action::ViewLoaded(entries) => {
            app.entries = entries;
            // Selection is keyed by path and needs no fixup; the cursor is
            // positional and must be clamped into the new view.
            app.cursor = if app.entries.is_empty() {
                0
            } else {
                app.cursor.min(app.entries.len() - 1)
            };
            debug!("view reloaded: {} entries, cursor {}", app.entries.len(), app.cursor);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entries::EntryKind;
    use std::path::PathBuf;

    fn file(name: &str) -> Entry {
        Entry {
            name: name.to_string(),
            path: PathBuf::from("/tmp").join(name),
            kind: EntryKind::File,
        }
    }

    fn app_with(names: &[&str]) -> App {
        let mut app = App::new(PathBuf::from("/tmp"));
        app.entries = names.iter().map(|n| file(n)).collect();
        app
    }

    #[test]
    fn test_move_up_wraps_to_end() {
        let mut app = app_with(&["a", "b", "c"]);
        assert_eq!(update(&mut app, Action::MoveUp), Effect::None);
        assert_eq!(app.cursor, 2);
        update(&mut app, Action::MoveUp);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_move_down_wraps_to_start() {
        let mut app = app_with(&["a", "b", "c"]);
        app.cursor = 2;
        update(&mut app, Action::MoveDown);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_movement_is_a_noop_on_empty_view() {
        let mut app = app_with(&[]);
        update(&mut app, Action::MoveUp);
        assert_eq!(app.cursor, 0);
        update(&mut app, Action::MoveDown);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut app = app_with(&["a", "b"]);
        app.cursor = 1;
        update(&mut app, Action::ToggleSelect);
        assert!(app.selected.contains(&PathBuf::from("/tmp/b")));
        update(&mut app, Action::ToggleSelect);
        assert!(app.selected.is_empty());
    }

    #[test]
    fn test_toggle_is_a_noop_on_empty_view() {
        let mut app = app_with(&[]);
        update(&mut app, Action::ToggleSelect);
        assert!(app.selected.is_empty());
    }

    #[test]
    fn test_typing_grows_query_and_requests_refresh() {
        let mut app = app_with(&[]);
        assert_eq!(update(&mut app, Action::TypeChar('r')), Effect::Refresh);
        assert_eq!(update(&mut app, Action::TypeChar('s')), Effect::Refresh);
        assert_eq!(app.query, "rs");
    }

    #[test]
    fn test_query_stops_accepting_at_fifty_chars() {
        let mut app = app_with(&[]);
        for _ in 0..MAX_QUERY_LEN {
            assert_eq!(update(&mut app, Action::TypeChar('x')), Effect::Refresh);
        }
        assert_eq!(update(&mut app, Action::TypeChar('y')), Effect::None);
        assert_eq!(app.query.chars().count(), MAX_QUERY_LEN);
        assert!(!app.query.contains('y'));
    }

    #[test]
    fn test_delete_pops_last_char_and_is_noop_when_empty() {
        let mut app = app_with(&[]);
        update(&mut app, Action::TypeChar('a'));
        assert_eq!(update(&mut app, Action::DeleteChar), Effect::Refresh);
        assert!(app.query.is_empty());
        assert_eq!(update(&mut app, Action::DeleteChar), Effect::None);
    }

    #[test]
    fn test_view_loaded_clamps_cursor() {
        let mut app = app_with(&["a", "b", "c"]);
        app.cursor = 2;
        update(&mut app, Action::ViewLoaded(vec![file("a")]));
        assert_eq!(app.cursor, 0);
        update(&mut app, Action::ViewLoaded(Vec::new()));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_view_loaded_keeps_path_keyed_selection() {
        let mut app = app_with(&["a", "b"]);
        update(&mut app, Action::ToggleSelect); // selects "a"
        update(&mut app, Action::ViewLoaded(vec![file("b")]));
        // "a" is filtered out but stays selected; it reappears selected
        // once the filter relaxes.
        assert!(app.selected.contains(&PathBuf::from("/tmp/a")));
    }

    #[test]
    fn test_commit_and_quit_surface_as_effects() {
        let mut app = app_with(&[]);
        assert_eq!(update(&mut app, Action::Commit), Effect::Commit);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
