use std::io;

use super::Renderer;
use crate::layout::Grid;
use crate::tui::event_loop::LoopHandle;
use crate::ui::backend::test::{TestBackend, TestBuffer};
use crate::ui::backend::Backend;
use crate::ui::core::painter::Painter;

/// In-memory renderer: frames land in a `TestBuffer`, input arrives through the loop handle.
#[derive(Debug)]
pub struct HeadlessRenderer {
    backend: TestBackend,
    frames: usize,
    closed: bool,
    input: Option<LoopHandle>,
}

impl HeadlessRenderer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            backend: TestBackend::new(width, height),
            frames: 0,
            closed: false,
            input: None,
        }
    }

    pub fn buffer(&self) -> &TestBuffer {
        self.backend.buffer()
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Handle passed to `start_input`, if the loop has been started.
    pub fn input(&self) -> Option<&LoopHandle> {
        self.input.as_ref()
    }
}

impl Renderer for HeadlessRenderer {
    fn width(&self) -> u16 {
        self.backend.area().w
    }

    fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        if self.closed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "renderer closed"));
        }
        let mut painter = Painter::new();
        grid.paint(&mut painter);
        self.backend.present(painter.cmds())?;
        self.frames += 1;
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.backend.resize(width, height);
        Ok(())
    }

    fn start_input(&mut self, handle: LoopHandle) -> io::Result<()> {
        self.input = Some(handle);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/renderer/headless.rs"]
mod tests;
