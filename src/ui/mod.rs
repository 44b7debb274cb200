//! Drawing layer (deep wrapper over `ratatui`).
//!
//! Widgets and the grid only ever talk in terms of `PaintCmd`s; backends turn those into
//! terminal cells, so nothing outside `backend` mentions `ratatui`.

pub mod backend;
pub mod core;
