//! # Application State
//!
//! Core session state for grabbit. This module contains domain data only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── root: PathBuf                 // directory being picked from
//! ├── entries: Vec<Entry>           // current ordered view
//! ├── query: String                 // search filter, max 50 chars
//! ├── cursor: usize                 // position in entries
//! ├── selected: HashSet<PathBuf>    // multi-select, keyed by path
//! └── status_message: String        // set once, at a successful commit
//! ```
//!
//! Selection is keyed by path rather than by list position, so a view
//! recompute (every query edit) can never make a held selection point at
//! the wrong entry. The cursor is clamped into the new view on every
//! recompute for the same reason.
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::core::entries::Entry;

/// Maximum number of characters the search query accepts; further
/// keystrokes are ignored.
pub const MAX_QUERY_LEN: usize = 50;

/// Names hidden from the listing and skipped at every depth of the
/// serialization walk.
pub const EXCLUDED_NAMES: &[&str] = &[".git", "node_modules"];

pub struct App {
    pub root: PathBuf,
    pub entries: Vec<Entry>,
    pub query: String,
    pub cursor: usize,
    pub selected: HashSet<PathBuf>,
    pub status_message: String,
}

impl App {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            entries: Vec::new(),
            query: String::new(),
            cursor: 0,
            selected: HashSet::new(),
            status_message: String::new(),
        }
    }

    /// The entry under the cursor, if the view is non-empty.
    pub fn current_entry(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new(PathBuf::from("/tmp"));
        assert!(app.entries.is_empty());
        assert!(app.query.is_empty());
        assert_eq!(app.cursor, 0);
        assert!(app.selected.is_empty());
        assert!(app.status_message.is_empty());
        assert!(app.current_entry().is_none());
    }
}
