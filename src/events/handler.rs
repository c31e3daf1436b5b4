//! Terminal event polling.
//!
//! Polls crossterm and converts terminal events into application events.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};

use super::Event;
use crate::error::{AppError, Result};

/// Default poll interval in milliseconds.
const TICK_RATE_MS: u64 = 50;

/// Polls the terminal for input.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a handler with the default tick rate.
    pub fn new() -> Self {
        Self::with_tick_rate(TICK_RATE_MS)
    }

    /// Create a handler with a custom tick rate.
    pub fn with_tick_rate(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait for the next event.
    ///
    /// Blocks for at most one tick. Key releases and events the panel has no
    /// use for come back as `Event::Tick`.
    pub fn next(&self) -> Result<Event> {
        if !event::poll(self.tick_rate).map_err(|e| AppError::terminal(format!("poll: {}", e)))? {
            return Ok(Event::Tick);
        }

        let event = event::read().map_err(|e| AppError::terminal(format!("read: {}", e)))?;
        Ok(match event {
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Event::Key(key),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            _ => Event::Tick,
        })
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
