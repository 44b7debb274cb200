use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use super::Renderer;
use crate::layout::Grid;
use crate::tui::event::InputEvent;
use crate::tui::event_loop::LoopHandle;
use crate::tui::terminal_guard::{install_termination_signals, TerminalGuard};
use crate::ui::backend::terminal::RatatuiTerminal;
use crate::ui::backend::Backend;
use crate::ui::core::painter::Painter;

const INPUT_POLL: Duration = Duration::from_millis(100);

/// Real terminal: ratatui over crossterm, holding raw mode for its whole lifetime.
pub struct TerminalRenderer {
    terminal: RatatuiTerminal,
    width: u16,
    input: Option<InputReader>,
    // Dropped last so the screen is restored after the reader thread is gone.
    guard: TerminalGuard,
}

struct InputReader {
    stop: Arc<AtomicBool>,
    thread: JoinHandle<()>,
}

impl TerminalRenderer {
    /// Enter raw mode and the alternate screen.
    pub fn init() -> io::Result<Self> {
        let guard = TerminalGuard::new()?;
        let terminal = RatatuiTerminal::stdout()?;
        let (width, height) = crossterm::terminal::size()?;
        tracing::info!(width, height, "terminal initialized");
        Ok(Self {
            terminal,
            width,
            input: None,
            guard,
        })
    }

    fn stop_input(&mut self) {
        if let Some(reader) = self.input.take() {
            reader.stop.store(true, Ordering::SeqCst);
            if reader.thread.join().is_err() {
                tracing::warn!("input reader thread panicked");
            }
        }
    }
}

impl Renderer for TerminalRenderer {
    fn width(&self) -> u16 {
        self.width
    }

    fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        let mut painter = Painter::new();
        grid.paint(&mut painter);
        self.terminal.present(painter.cmds())
    }

    fn resize(&mut self, width: u16, _height: u16) -> io::Result<()> {
        self.width = width;
        self.terminal.invalidate()
    }

    fn start_input(&mut self, handle: LoopHandle) -> io::Result<()> {
        if self.input.is_some() {
            return Ok(());
        }
        install_termination_signals(self.guard.restore_handle(), handle.clone())?;

        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();
        let thread = std::thread::Builder::new()
            .name("dashgrid-input".into())
            .spawn(move || read_input(handle, flag))?;
        self.input = Some(InputReader { stop, thread });
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.stop_input();
        self.guard.restore_handle().restore()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        self.stop_input();
    }
}

fn read_input(handle: LoopHandle, stop: Arc<AtomicBool>) {
    while !stop.load(Ordering::SeqCst) {
        match crossterm::event::poll(INPUT_POLL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => {
                tracing::error!(error = %err, "polling terminal input failed");
                handle.stop();
                return;
            }
        }
        let event = match crossterm::event::read() {
            Ok(event) => InputEvent::from(event),
            Err(err) => {
                tracing::error!(error = %err, "reading terminal input failed");
                handle.stop();
                return;
            }
        };
        if event == InputEvent::Other {
            continue;
        }
        if !handle.send(event) {
            return;
        }
    }
}
