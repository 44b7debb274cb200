//! dashgrid - terminal dashboards on a 12-unit responsive grid.
//!
//! Modules:
//! - layout: widget buffer, columns, rows and the grid body
//! - widgets: text boxes, titles, bar charts, stacked bar charts, tables
//! - session: `TermUi`, the build/render/clean cycle and the event loop
//! - renderer: terminal (ratatui + crossterm) and headless renderers
//! - tui: raw-mode guard, key names, event loop
//! - ui: paint commands and backends

pub mod config;
pub mod error;
pub mod layout;
pub mod renderer;
pub mod session;
pub mod tui;
pub mod ui;
pub mod widgets;

pub use config::DashboardConfig;
pub use error::{DashError, Result};
pub use session::TermUi;
