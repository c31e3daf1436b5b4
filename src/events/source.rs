//! Input sources and listeners.

use super::{InputEvent, SuppressDefault};

/// Receives every input event delivered by a source.
pub trait InputListener {
    /// Handle one event. Listeners never fail; they may suppress the default.
    fn on_event(&mut self, event: &InputEvent, default: &mut dyn SuppressDefault);
}

/// A platform event-delivery mechanism listeners can register with.
pub trait EventSource {
    /// Register a listener for all subsequent events.
    fn add_listener(&mut self, listener: Box<dyn InputListener>);
}

/// A single-threaded event source that delivers events synchronously.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Box<dyn InputListener>>,
}

impl ListenerSet {
    /// Create an empty listener set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener, in registration order.
    pub fn emit(&mut self, event: &InputEvent, default: &mut dyn SuppressDefault) {
        for listener in &mut self.listeners {
            listener.on_event(event, default);
        }
    }
}

impl EventSource for ListenerSet {
    fn add_listener(&mut self, listener: Box<dyn InputListener>) {
        self.listeners.push(listener);
    }
}
