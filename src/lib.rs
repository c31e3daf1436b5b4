//! traykeys - keyboard shortcuts for the Robotray jog panel.
//!
//! Key presses are resolved through a binding table to jog commands and
//! delivered to the panel button for that command, unless the user is
//! typing into a text field or the button is disabled.

pub mod app;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod events;
pub mod logging;
pub mod terminal;
pub mod tray;
pub mod ui;
