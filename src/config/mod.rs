//! Configuration management for traykeys.
//!
//! Settings live in a TOML file in the platform config directory. A missing
//! file means defaults.

mod settings;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::dispatcher::BindingError;

pub use settings::Settings;

/// Name of the configuration file.
const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The configuration directory could not be created.
    #[error("failed to create configuration directory: {0}")]
    CreateDirError(#[source] std::io::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    ReadError(#[source] std::io::Error),

    /// The configuration file could not be written.
    #[error("failed to write configuration file: {0}")]
    WriteError(#[source] std::io::Error),

    /// The configuration file is not valid TOML for `Settings`.
    #[error("failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Settings could not be serialized.
    #[error("failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// A setting has an unusable value.
    #[error("invalid configuration: {0}")]
    ValidationError(String),

    /// The configured key bindings are invalid.
    #[error("invalid key bindings: {0}")]
    Binding(#[from] BindingError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Loaded configuration and where it came from.
#[derive(Debug, Clone)]
pub struct Config {
    /// The settings in effect.
    pub settings: Settings,
    path: PathBuf,
}

impl Config {
    /// The default configuration file path: `<config dir>/traykeys/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("traykeys").join(CONFIG_FILE))
    }

    /// Load from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path()?)
    }

    /// Load from `path`. A missing file yields default settings.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read, parsed or validated.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let settings = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(ConfigError::ReadError)?;
            let settings: Settings = toml::from_str(&content)?;
            settings.validate()?;
            info!(path = %path.display(), "Loaded configuration");
            settings
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Settings::default()
        };

        Ok(Self { settings, path })
    }

    /// Write the settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.settings.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }

        let content = toml::to_string_pretty(&self.settings)?;
        std::fs::write(path, content).map_err(ConfigError::WriteError)?;
        debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Write the settings back to the file they were loaded from.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.path)
    }

    /// The file this configuration belongs to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
