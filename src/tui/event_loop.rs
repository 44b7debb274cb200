//! Cooperative, single-threaded event loop.
//!
//! Producers (the terminal input reader, signal handlers, tests) push `LoopEvent`s into a
//! channel through a cloneable `LoopHandle`; the loop drains that channel, dispatches bound
//! keys, and emits a `Tick` whenever the tick interval elapses with nothing else to do.

use std::collections::HashMap;
use std::fmt;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use super::event::{InputEvent, Key};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopEvent {
    Input(InputEvent),
    Tick,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Sending side of the loop. Safe to clone and hand to other threads.
#[derive(Clone)]
pub struct LoopHandle {
    tx: Sender<LoopEvent>,
}

impl LoopHandle {
    /// Ask the loop to return. Returns `false` once the loop is gone.
    pub fn stop(&self) -> bool {
        self.tx.send(LoopEvent::Stop).is_ok()
    }

    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(LoopEvent::Input(event)).is_ok()
    }
}

impl fmt::Debug for LoopHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoopHandle").finish_non_exhaustive()
    }
}

type KeyHandler = Box<dyn FnMut() -> Flow>;

pub struct EventLoop {
    tx: Sender<LoopEvent>,
    rx: Receiver<LoopEvent>,
    bindings: HashMap<Key, KeyHandler>,
    tick: Option<Duration>,
    next_tick: Option<Instant>,
}

impl EventLoop {
    pub fn new(tick: Option<Duration>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            bindings: HashMap::new(),
            tick: tick.filter(|t| !t.is_zero()),
            next_tick: None,
        }
    }

    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            tx: self.tx.clone(),
        }
    }

    /// Run `handler` whenever `key` is pressed; a later binding for the same key wins.
    pub fn bind(&mut self, key: Key, handler: impl FnMut() -> Flow + 'static) {
        self.bindings.insert(key, Box::new(handler));
    }

    pub fn bind_quit(&mut self, key: Key) {
        self.bind(key, || Flow::Stop);
    }

    pub fn is_bound(&self, key: &Key) -> bool {
        self.bindings.contains_key(key)
    }

    /// Block until the next event worth surfacing.
    ///
    /// Bound keys are dispatched here; `None` means a stop was requested and the caller must
    /// leave its loop.
    pub fn next_event(&mut self) -> Option<LoopEvent> {
        let event = self.recv()?;
        match event {
            LoopEvent::Stop => {
                tracing::debug!("event loop stop requested");
                None
            }
            LoopEvent::Input(InputEvent::Key(key)) => {
                let flow = self
                    .bindings
                    .get_mut(&Key::from(key))
                    .map(|handler| handler())
                    .unwrap_or(Flow::Continue);
                match flow {
                    Flow::Stop => {
                        tracing::debug!(code = ?key.code, "quit key pressed");
                        None
                    }
                    Flow::Continue => Some(LoopEvent::Input(InputEvent::Key(key))),
                }
            }
            other => Some(other),
        }
    }

    fn recv(&mut self) -> Option<LoopEvent> {
        let Some(tick) = self.tick else {
            // We hold a sender ourselves, so this only fails if the channel is torn down.
            return self.rx.recv().ok();
        };

        let now = Instant::now();
        let deadline = *self.next_tick.get_or_insert(now + tick);
        match self.rx.recv_timeout(deadline.saturating_duration_since(now)) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) => {
                // Missed intervals are dropped, not replayed.
                self.next_tick = Some((deadline + tick).max(Instant::now() + tick));
                Some(LoopEvent::Tick)
            }
            Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/event_loop.rs"]
mod tests;
