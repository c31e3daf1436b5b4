//! Keyboard-to-command dispatch.
//!
//! A `Dispatcher` resolves raw key tokens through an immutable
//! `BindingTable` and activates at most one command target per event.
//! `install` registers the dispatcher with an event source once per process.

mod bindings;
mod dispatch;
mod install;

pub use bindings::{BindingError, BindingTable};
pub use dispatch::{Dispatcher, Outcome};
pub use install::{install, install_state, InstallGuard, InstallState};
