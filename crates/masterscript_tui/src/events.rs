//! Terminal input.
//!
//! Crossterm reads block, so a dedicated thread polls the terminal and
//! forwards events into a tokio channel the event loop can `select!` on.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use masterscript_error::{TuiError, TuiErrorKind, TuiResult};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, error};

/// Event types for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// No input within the tick rate
    Tick,
    /// Key press event
    Key(KeyEvent),
    /// Terminal was resized
    Resize,
}

/// Receives terminal events from a background reader thread.
#[derive(Debug)]
pub struct EventHandler {
    receiver: UnboundedReceiver<TuiResult<Event>>,
}

impl EventHandler {
    /// Spawn the reader thread with the given tick rate in milliseconds.
    ///
    /// The thread exits once the handler is dropped or reading fails.
    pub fn spawn(tick_rate_ms: u64) -> Self {
        let (sender, receiver) = unbounded_channel();
        let tick_rate = Duration::from_millis(tick_rate_ms.max(1));
        if let Err(e) = thread::Builder::new()
            .name("masterscript-input".to_string())
            .spawn(move || read_loop(sender, tick_rate))
        {
            // the receiver sees a closed channel and the loop ends
            error!(error = %e, "Failed to spawn input thread");
        }
        Self { receiver }
    }

    /// Next terminal event; `None` once the reader thread has stopped.
    pub async fn next(&mut self) -> Option<TuiResult<Event>> {
        self.receiver.recv().await
    }
}

fn read_loop(sender: UnboundedSender<TuiResult<Event>>, tick_rate: Duration) {
    loop {
        let event = match poll_once(tick_rate) {
            Ok(Some(event)) => Ok(event),
            Ok(None) => continue,
            Err(e) => Err(e),
        };
        let failed = event.is_err();
        if sender.send(event).is_err() || failed {
            debug!("Input thread stopping");
            return;
        }
    }
}

fn poll_once(tick_rate: Duration) -> TuiResult<Option<Event>> {
    let ready = event::poll(tick_rate)
        .map_err(|e| TuiError::new(TuiErrorKind::EventRead(e.to_string())))?;
    if !ready {
        return Ok(Some(Event::Tick));
    }
    match event::read().map_err(|e| TuiError::new(TuiErrorKind::EventRead(e.to_string())))? {
        // Windows also reports key releases
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(Event::Key(key))),
        CrosstermEvent::Resize(_, _) => Ok(Some(Event::Resize)),
        _ => Ok(None),
    }
}
