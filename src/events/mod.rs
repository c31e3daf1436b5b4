//! Event handling for the application.
//!
//! This module turns terminal input into discrete input events and delivers
//! them to registered listeners.

mod handler;
mod input;
mod keys;
mod source;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use input::{ElementKind, EventDefault, FocusTarget, InputEvent, SuppressDefault};
pub use keys::key_token;
pub use source::{EventSource, InputListener, ListenerSet};

/// Events produced by the terminal event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input arrived within the tick rate.
    Tick,
}
