//! Terminal mode handling for the interactive panel.
//!
//! `TerminalSession` switches the terminal into raw mode and the alternate
//! screen and puts both back when dropped, including while unwinding from a
//! panic. If entering the alternate screen fails, raw mode is switched off
//! again before the error is returned.

use std::io::stdout;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use tracing::warn;

use crate::error::{AppError, Result};

/// Low-level terminal mode switches.
pub trait TerminalControl {
    fn enable_raw_mode(&mut self) -> std::io::Result<()>;
    fn disable_raw_mode(&mut self) -> std::io::Result<()>;
    fn enter_alternate_screen(&mut self) -> std::io::Result<()>;
    fn leave_alternate_screen(&mut self) -> std::io::Result<()>;
}

/// The process's real terminal, driven through crossterm.
#[derive(Debug, Default)]
pub struct Crossterm;

impl TerminalControl for Crossterm {
    fn enable_raw_mode(&mut self) -> std::io::Result<()> {
        enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> std::io::Result<()> {
        disable_raw_mode()
    }

    fn enter_alternate_screen(&mut self) -> std::io::Result<()> {
        let mut out = stdout();
        execute!(out, EnterAlternateScreen)
    }

    fn leave_alternate_screen(&mut self) -> std::io::Result<()> {
        let mut out = stdout();
        execute!(out, LeaveAlternateScreen)
    }
}

/// Raw mode plus alternate screen, restored on drop.
pub struct TerminalSession<C: TerminalControl> {
    control: C,
    active: bool,
}

impl TerminalSession<Crossterm> {
    /// Take over the process's terminal.
    pub fn start() -> Result<Self> {
        Self::start_with(Crossterm)
    }
}

impl<C: TerminalControl> TerminalSession<C> {
    /// Take over the terminal behind `control`.
    pub fn start_with(mut control: C) -> Result<Self> {
        control
            .enable_raw_mode()
            .map_err(|e| AppError::terminal(format!("enable raw mode: {}", e)))?;

        if let Err(e) = control.enter_alternate_screen() {
            if let Err(restore) = control.disable_raw_mode() {
                warn!(error = %restore, "Failed to disable raw mode");
            }
            return Err(AppError::terminal(format!("enter alternate screen: {}", e)));
        }

        Ok(Self {
            control,
            active: true,
        })
    }

    /// Restore the terminal, reporting the first failure.
    ///
    /// Both steps are attempted even if the first one fails.
    pub fn finish(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let left = self
            .control
            .leave_alternate_screen()
            .map_err(|e| AppError::terminal(format!("leave alternate screen: {}", e)));
        let raw = self
            .control
            .disable_raw_mode()
            .map_err(|e| AppError::terminal(format!("disable raw mode: {}", e)));
        left.and(raw)
    }
}

impl<C: TerminalControl> Drop for TerminalSession<C> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}
