//! Terminal integration layer (crossterm): raw-mode lifecycle, key names and the event loop.

pub mod event;
pub mod event_loop;
pub mod terminal_guard;
