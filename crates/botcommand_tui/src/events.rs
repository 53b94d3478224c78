//! Event handling for the dashboard.

use botcommand_error::{TuiError, TuiErrorKind, TuiResult};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Event types for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Tick event for periodic updates
    Tick,
    /// Key press event
    Key(KeyEvent),
}

/// Event handler that polls for terminal events.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with specified tick rate in milliseconds.
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Get the next event, blocking until an event is available or timeout.
    ///
    /// Key releases and non-key events yield `None`.
    #[tracing::instrument(skip(self))]
    pub fn next(&self) -> TuiResult<Option<Event>> {
        if event::poll(self.tick_rate)
            .map_err(|e| TuiError::new(TuiErrorKind::EventPoll(e.to_string())))?
        {
            match event::read().map_err(|e| TuiError::new(TuiErrorKind::EventRead(e.to_string())))? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    Ok(Some(Event::Key(key)))
                }
                _ => Ok(None),
            }
        } else {
            Ok(Some(Event::Tick))
        }
    }
}
