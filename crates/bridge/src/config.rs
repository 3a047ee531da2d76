//! Configuration system for the co-simulation bridge.
//!
//! This module defines the structures used to parameterize a `Bridge` and the
//! DPI shim around it. It provides:
//! 1. **Defaults:** Baseline values (boot address, log filter).
//! 2. **Structures:** General lifecycle settings and logging settings.
//! 3. **Loading:** JSON from a string, a file, or the `M6502_COSIM_CONFIG` variable.
//!
//! Every field is optional in JSON; an empty object yields `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{BOOT_ADDRESS, CONFIG_ENV_VAR};
use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// Program counter forced by reset.
    pub const BOOT_ADDRESS: u16 = super::BOOT_ADDRESS;

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub const LOG_FILTER: &str = "info";
}

/// Root configuration for the bridge.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Lifecycle settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Log output settings (used by the DPI shim).
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `text` - JSON object; missing fields take their defaults.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or `ConfigError::Parse`.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file.
    ///
    /// # Returns
    ///
    /// The parsed configuration, `ConfigError::Io` if the file cannot be read,
    /// or `ConfigError::Parse` if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Loads the file named by `M6502_COSIM_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

/// Lifecycle settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Program counter forced by reset (defaults to `$0400`).
    #[serde(default = "GeneralConfig::default_boot_address")]
    pub boot_address: u16,

    /// Log every post-tick snapshot at debug level.
    #[serde(default)]
    pub trace_ticks: bool,
}

impl GeneralConfig {
    fn default_boot_address() -> u16 {
        defaults::BOOT_ADDRESS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            boot_address: defaults::BOOT_ADDRESS,
            trace_ticks: false,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG` when set.
    #[serde(default = "LoggingConfig::default_filter")]
    pub filter: String,

    /// Emit ANSI colour codes. Simulator transcripts are usually files, so off by default.
    #[serde(default)]
    pub ansi: bool,
}

impl LoggingConfig {
    fn default_filter() -> String {
        defaults::LOG_FILTER.to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: defaults::LOG_FILTER.to_string(),
            ansi: false,
        }
    }
}
