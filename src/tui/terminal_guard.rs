//! Ownership of the terminal's raw/alternate-screen mode.
//!
//! The guard enters the mode on construction and leaves it on drop. Any clone of its
//! [`Restore`] handle (the signal thread holds one) can leave it early; only the first
//! request touches the terminal.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::tui::event_loop::LoopHandle;

/// How long a signalled loop gets to shut down on its own before the process exits.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

pub trait ScreenMode: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen, hidden cursor.
#[derive(Debug, Default)]
pub struct RawAltScreen;

impl ScreenMode for RawAltScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, crossterm::cursor::Hide).map_err(
            |err| {
                let _ = disable_raw_mode();
                err
            },
        )
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        let steps: [fn() -> io::Result<()>; 2] = [disable_raw_mode, || {
            crossterm::execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show)
        }];
        // Every step runs; the first failure is reported.
        steps.iter().map(|step| step()).fold(Ok(()), Result::and)
    }
}

/// Cloneable request to leave the screen mode.
#[derive(Clone)]
pub struct Restore {
    done: Arc<AtomicBool>,
    mode: Arc<dyn ScreenMode>,
}

impl Restore {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        tracing::debug!("leaving dashboard screen");
        self.mode.leave()
    }

    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restore: Restore,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_mode(Arc::new(RawAltScreen))
    }

    pub fn with_mode(mode: Arc<dyn ScreenMode>) -> io::Result<Self> {
        mode.enter()?;
        let restore = Restore {
            done: Arc::new(AtomicBool::new(false)),
            mode,
        };
        Ok(Self { restore })
    }

    pub fn restore_handle(&self) -> Restore {
        self.restore.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

/// Shell convention for a process killed by `signal`.
pub fn signal_exit_code(signal: i32) -> i32 {
    128 + signal
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalReaction {
    /// A session is live: it was asked to stop and gets the grace period to do so.
    StopRequested,
    /// No session holds the screen any more; the signal takes its default effect.
    Terminate,
}

/// First response to SIGINT/SIGTERM.
pub fn react_to_signal(restore: &Restore, handle: &LoopHandle) -> SignalReaction {
    if restore.is_done() {
        return SignalReaction::Terminate;
    }
    handle.stop();
    SignalReaction::StopRequested
}

/// Forward SIGINT/SIGTERM to the loop as a stop request. A loop that has not released the
/// screen within [`SHUTDOWN_GRACE`] is cut short: the screen is restored and the process exits.
/// Signals arriving after the screen was released terminate the process as if unhandled.
#[cfg(unix)]
pub fn install_termination_signals(restore: Restore, handle: LoopHandle) -> io::Result<()> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("dashgrid-signals".into())
        .spawn(move || {
            for signal in signals.forever() {
                tracing::info!(signal, "termination signal received");
                if react_to_signal(&restore, &handle) == SignalReaction::Terminate {
                    let _ = signal_hook::low_level::emulate_default_handler(signal);
                    std::process::exit(signal_exit_code(signal));
                }

                std::thread::sleep(SHUTDOWN_GRACE);
                if restore.is_done() {
                    continue;
                }
                let _ = restore.restore();
                std::process::exit(signal_exit_code(signal));
            }
        })?;
    Ok(())
}

#[cfg(not(unix))]
pub fn install_termination_signals(_restore: Restore, _handle: LoopHandle) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
