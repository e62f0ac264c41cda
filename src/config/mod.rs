//! Configuration for deskctl.
//!
//! Settings live in a YAML file (default:
//! `$XDG_CONFIG_HOME/deskctl/config.yaml`) and cover the external program
//! names, their default argument strings, default numeric values, and the
//! capture output directory. A missing file means built-in defaults.
//! Unknown fields are preserved for forward compatibility.

mod model;

#[cfg(test)]
mod tests;

pub use model::{
    CaptureConfig, Config, LockerConfig, MixerConfig, PdfConfig, TransparencyConfig,
};

use crate::error::{DeskError, Result};
use std::path::{Path, PathBuf};

/// Default config file path: `$XDG_CONFIG_HOME/deskctl/config.yaml`.
///
/// Returns `None` when no config directory can be determined for the
/// current user.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("deskctl").join("config.yaml"))
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    /// Returns `Err` if the file exists but cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            DeskError::ConfigError(format!(
                "failed to read config '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content)?;
        Ok(Some(config))
    }

    /// Parse config from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DeskError::ConfigError(format!("failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| DeskError::ConfigError(format!("failed to serialize config: {}", e)))
    }

    /// Resolve the effective config: explicit path, default location, or
    /// built-in defaults when no file exists.
    ///
    /// An explicit path that does not exist is an error; a missing file at
    /// the default location is not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path)?.ok_or_else(|| {
                DeskError::ConfigError(format!("config file '{}' does not exist", path.display()))
            }),
            None => match default_path() {
                Some(path) => Ok(Self::load(path)?.unwrap_or_default()),
                None => Ok(Self::default()),
            },
        }
    }
}
