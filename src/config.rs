//! Config file loading.
//!
//! Gear parameters resolve in three layers: built-in defaults, then the
//! TOML config file, then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::constants;
use crate::error::GearError;
use crate::gear::GearParams;

/// Optional overrides read from `config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub module: Option<f64>,
    pub teeth1: Option<u32>,
    pub teeth2: Option<u32>,
    pub pressure_angle: Option<f64>,
    pub backlash: Option<f64>,
    pub clearance: Option<f64>,
    pub frame_count: Option<u32>,
}

impl FileConfig {
    /// Parses TOML content; `path` is only used for error messages.
    ///
    /// # Errors
    ///
    /// Returns [`GearError::Config`] on malformed TOML or unknown keys.
    pub fn parse(content: &str, path: &Path) -> Result<Self, GearError> {
        toml::from_str(content).map_err(|e| GearError::Config {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    /// Writes every value present in the file over `params`.
    pub fn apply(&self, params: &mut GearParams) {
        if let Some(v) = self.module {
            params.module = v;
        }
        if let Some(v) = self.teeth1 {
            params.teeth1 = v;
        }
        if let Some(v) = self.teeth2 {
            params.teeth2 = v;
        }
        if let Some(v) = self.pressure_angle {
            params.pressure_angle = v;
        }
        if let Some(v) = self.backlash {
            params.backlash = v;
        }
        if let Some(v) = self.clearance {
            params.clearance = v;
        }
        if let Some(v) = self.frame_count {
            params.frame_count = v;
        }
    }
}

/// Default config location: `<config dir>/gearview/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

/// Loads the config file.
///
/// An explicit path must exist. The default path is optional; when it is
/// missing the built-in defaults apply.
///
/// # Errors
///
/// Returns [`GearError::Config`] if an explicit file is missing or any file
/// cannot be read or parsed.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, GearError> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => {
                debug!("no platform config directory, using defaults");
                return Ok(FileConfig::default());
            }
        },
    };

    if !path.is_file() {
        if required {
            return Err(GearError::Config {
                path,
                reason: "file not found".to_string(),
            });
        }
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| GearError::Config {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let config = FileConfig::parse(&content, &path)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}
