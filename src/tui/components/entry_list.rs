//! # Entry List Component
//!
//! The selectable listing. Renders one line per view-model row with a
//! checkbox marker, highlights the cursor line, and shows a sentinel
//! when nothing matches the search.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EntryListState` lives in `TuiState` (owns the scroll offset)
//! - `EntryList` is created each frame with borrowed rows

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::core::view::Row;

/// Persistent state for the listing: keeps the scroll offset stable
/// across frames.
pub struct EntryListState {
    pub list_state: ListState,
}

impl EntryListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }
}

impl Default for EntryListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the listing.
pub struct EntryList<'a> {
    rows: &'a [Row],
    cursor: usize,
    state: &'a mut EntryListState,
}

impl<'a> EntryList<'a> {
    pub fn new(rows: &'a [Row], cursor: usize, state: &'a mut EntryListState) -> Self {
        Self { rows, cursor, state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.rows.is_empty() {
            let sentinel = Paragraph::new("No directories/files matching search.").style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
            frame.render_widget(sentinel, area);
            return;
        }

        let items: Vec<ListItem> = self.rows.iter().map(render_row).collect();
        self.state.list_state.select(Some(self.cursor));

        let list = List::new(items);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn render_row(row: &Row) -> ListItem<'_> {
    let marker = if row.is_selected { "[✔] " } else { "[ ] " };
    let style = if row.is_current {
        Style::default().fg(Color::Green)
    } else if row.is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    ListItem::new(format!("{marker}{}", row.name)).style(style)
}
