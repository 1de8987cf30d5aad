//! # Core Application Logic
//!
//! This module contains grabbit's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (session state)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • listing + serialize  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct - all session state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`entries`]: Directory listing, exclusion, filtering, ordering
//! - [`serialize`]: Selection → tagged text document
//! - [`view`]: Pure projection of state into display rows

pub mod action;
pub mod entries;
pub mod serialize;
pub mod state;
pub mod view;
