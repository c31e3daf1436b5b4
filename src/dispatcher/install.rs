//! One-shot listener installation.
//!
//! Installation moves from `Uninstalled` to `Installed` once and stays
//! there for the lifetime of the guard. The process-wide guard backs
//! [`install`], so running start-up code twice never registers a second
//! listener.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use super::Dispatcher;
use crate::commands::TargetLookup;
use crate::events::{EventSource, InputListener};

/// Lifecycle of an installation guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    /// No listener has been registered yet.
    Uninstalled,
    /// A listener has been registered. Terminal.
    Installed,
}

/// Ensures a listener is registered at most once.
#[derive(Debug)]
pub struct InstallGuard {
    installed: AtomicBool,
}

impl InstallGuard {
    /// A guard in the `Uninstalled` state.
    pub const fn new() -> Self {
        Self {
            installed: AtomicBool::new(false),
        }
    }

    /// Current state of the guard.
    pub fn state(&self) -> InstallState {
        if self.installed.load(Ordering::Acquire) {
            InstallState::Installed
        } else {
            InstallState::Uninstalled
        }
    }

    /// Register the listener built by `make_listener` with `source`, unless
    /// this guard already installed one.
    ///
    /// `make_listener` only runs on the first call. Returns whether a
    /// listener was registered.
    pub fn install<S, F>(&self, source: &mut S, make_listener: F) -> bool
    where
        S: EventSource + ?Sized,
        F: FnOnce() -> Box<dyn InputListener>,
    {
        if self.installed.swap(true, Ordering::AcqRel) {
            debug!("Key listener already installed, skipping");
            return false;
        }

        source.add_listener(make_listener());
        info!("Key listener installed");
        true
    }
}

impl Default for InstallGuard {
    fn default() -> Self {
        Self::new()
    }
}

static PROCESS_GUARD: InstallGuard = InstallGuard::new();

/// Register `dispatcher` with `source` exactly once per process.
///
/// Later calls are no-ops and drop the dispatcher they were given.
pub fn install<S, L>(source: &mut S, dispatcher: Dispatcher<L>)
where
    S: EventSource + ?Sized,
    L: TargetLookup + 'static,
{
    PROCESS_GUARD.install(source, move || {
        Box::new(dispatcher) as Box<dyn InputListener>
    });
}

/// The process-wide installation state.
pub fn install_state() -> InstallState {
    PROCESS_GUARD.state()
}
