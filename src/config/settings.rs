//! Application settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::commands::CommandId;
use crate::dispatcher::BindingTable;
use crate::tray::{
    usable_step, JogSettings, DEFAULT_FEED_RATE, DEFAULT_STEP_MM, MAX_STEP_MM, MIN_STEP_MM,
};

/// User settings, read from `config.toml`.
///
/// Every field has a default, so any subset may be written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Jog distance in millimetres.
    pub step_mm: f64,
    /// Jog feed rate in mm/min.
    pub feed_rate: u32,
    /// Whether the panel starts in edit mode with its buttons enabled.
    pub start_in_edit_mode: bool,
    /// Key token to command bindings. Replaces the built-in table when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BTreeMap<String, CommandId>>,
}

impl Settings {
    /// Check that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` for a step outside
    /// `MIN_STEP_MM..=MAX_STEP_MM` or a zero feed rate, and `ConfigError::Binding` for
    /// an invalid binding table.
    pub fn validate(&self) -> Result<()> {
        if usable_step(self.step_mm).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "step_mm must be between {} and {} mm, got {}",
                MIN_STEP_MM, MAX_STEP_MM, self.step_mm
            )));
        }

        if self.feed_rate == 0 {
            return Err(ConfigError::ValidationError(
                "feed_rate cannot be zero".to_string(),
            ));
        }

        self.binding_table()?;
        Ok(())
    }

    /// The binding table to dispatch with.
    pub fn binding_table(&self) -> Result<BindingTable> {
        match &self.bindings {
            Some(bindings) => Ok(BindingTable::new(
                bindings.iter().map(|(token, id)| (token.clone(), *id)),
            )?),
            None => Ok(BindingTable::robotray()),
        }
    }

    /// Jog parameters for the panel.
    pub fn jog_settings(&self) -> JogSettings {
        JogSettings {
            step_mm: self.step_mm,
            feed_rate: self.feed_rate,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step_mm: DEFAULT_STEP_MM,
            feed_rate: DEFAULT_FEED_RATE,
            start_in_edit_mode: false,
            bindings: None,
        }
    }
}
