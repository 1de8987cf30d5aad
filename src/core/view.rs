//! # View Model
//!
//! Pure projection of `(entries, cursor, selected)` into display rows.
//! No state of its own; the TUI renders a sentinel line when the row
//! list is empty.

use crate::core::state::App;

/// One renderable listing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub is_current: bool,
    pub is_selected: bool,
}

pub fn rows(app: &App) -> Vec<Row> {
    app.entries
        .iter()
        .enumerate()
        .map(|(i, entry)| Row {
            name: entry.name.clone(),
            is_current: i == app.cursor,
            is_selected: app.selected.contains(&entry.path),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entries::{Entry, EntryKind};
    use std::path::PathBuf;

    #[test]
    fn test_rows_mark_cursor_and_selection() {
        let mut app = App::new(PathBuf::from("/tmp"));
        app.entries = vec![
            Entry {
                name: "src".to_string(),
                path: PathBuf::from("/tmp/src"),
                kind: EntryKind::Directory,
            },
            Entry {
                name: "main.rs".to_string(),
                path: PathBuf::from("/tmp/main.rs"),
                kind: EntryKind::File,
            },
        ];
        app.cursor = 1;
        app.selected.insert(PathBuf::from("/tmp/src"));

        let rows = rows(&app);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].is_selected && !rows[0].is_current);
        assert!(!rows[1].is_selected && rows[1].is_current);
        assert_eq!(rows[1].name, "main.rs");
    }

    #[test]
    fn test_empty_view_projects_no_rows() {
        let app = App::new(PathBuf::from("/tmp"));
        assert!(rows(&app).is_empty());
    }
}
