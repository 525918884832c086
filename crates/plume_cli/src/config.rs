//! Plume configuration file handling
//!
//! `plume.toml` in the working directory (or the file given with
//! `--config`) supplies default icon options:
//!
//! ```toml
//! [icon]
//! size = 24
//! fill = "#00AFF8"
//! ```

use anyhow::{Context, Result};
use plume_icons::IconOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// File looked up in the working directory when `--config` is not given
pub const CONFIG_FILE: &str = "plume.toml";

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PlumeConfig {
    /// Defaults for `plume icon`
    #[serde(default)]
    pub icon: IconOptions,
}

impl PlumeConfig {
    /// Load an explicit config file, or `plume.toml` from `dir` when present
    ///
    /// An explicit file must exist; a missing `plume.toml` yields defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let default_path = dir.join(CONFIG_FILE);
        if default_path.exists() {
            return Self::load_from_file(&default_path);
        }

        debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
        Ok(Self::default())
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
