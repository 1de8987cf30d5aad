//! # TUI Components
//!
//! Components follow the persistent state + transient wrapper pattern:
//! any state that must outlive a frame (here, the list scroll offset)
//! lives in a `*State` struct owned by `TuiState`, and a short-lived
//! wrapper is created each frame with borrowed props to render it.
//!
//! Dependencies are explicit: components receive view-model rows as
//! props, never the whole `App`.

pub mod entry_list;
pub use entry_list::{EntryList, EntryListState};
