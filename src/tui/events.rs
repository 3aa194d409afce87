//! Event handling for the TUI.
//!
//! Processes keyboard and terminal events using crossterm.

use crate::error::{Result, RqlensError};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;

/// Application events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// A periodic tick (drives the graph layout animation).
    Tick,
}

/// Handles terminal events.
pub struct EventHandler {
    /// Timeout for polling events; doubles as the tick interval.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new event handler with the default tick rate.
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
        }
    }

    /// Polls for the next event without blocking the async runtime.
    ///
    /// Returns `Event::Tick` if nothing arrives within the tick rate.
    pub async fn next(&self) -> Result<Event> {
        let tick_rate = self.tick_rate;
        let event = tokio::task::spawn_blocking(move || -> Result<Option<CrosstermEvent>> {
            if event::poll(tick_rate)
                .map_err(|e| RqlensError::internal(format!("Failed to poll events: {e}")))?
            {
                let event = event::read()
                    .map_err(|e| RqlensError::internal(format!("Failed to read event: {e}")))?;
                Ok(Some(event))
            } else {
                Ok(None)
            }
        })
        .await
        .map_err(|e| RqlensError::internal(format!("Event task failed: {e}")))??;

        Ok(match event {
            Some(CrosstermEvent::Key(key)) => Event::Key(key),
            Some(CrosstermEvent::Resize(width, height)) => Event::Resize(width, height),
            _ => Event::Tick,
        })
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_handler_default_tick_rate() {
        let handler = EventHandler::new();
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
    }
}
