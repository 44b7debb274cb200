//! The drawing collaborator behind a dashboard session.

mod headless;
mod terminal;

pub use headless::HeadlessRenderer;
pub use terminal::TerminalRenderer;

use std::io;

use crate::layout::Grid;
use crate::tui::event_loop::LoopHandle;

pub trait Renderer {
    /// Current screen width in cells.
    fn width(&self) -> u16;

    fn draw(&mut self, grid: &Grid) -> io::Result<()>;

    /// The screen changed size; the next draw must repaint everything.
    fn resize(&mut self, _width: u16, _height: u16) -> io::Result<()> {
        Ok(())
    }

    /// Start forwarding input events to the loop behind `handle`.
    fn start_input(&mut self, handle: LoopHandle) -> io::Result<()>;

    /// Give the screen back. Called at most once per session.
    fn close(&mut self) -> io::Result<()>;
}
