//! Chronicle configuration.
//!
//! Loaded from `~/.chronicle/config.toml`. Every key is optional and a
//! missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::chronology::parse_era_config;
use crate::model::{EraConfig, UnmarkedEra};

/// Chronicle configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Era string used when neither `--eras` nor the timeline provides one.
    #[serde(default)]
    pub default_eras: Option<String>,

    /// Which era an era-less date belongs to.
    #[serde(default)]
    pub unmarked_era: UnmarkedEra,
}

impl Config {
    /// Load config from `~/.chronicle/config.toml`.
    pub fn load() -> Result<Self, String> {
        let path = Self::path().ok_or("could not determine home directory")?;
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.chronicle/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".chronicle").join("config.toml"))
    }

    /// Resolve the era configuration for a read.
    ///
    /// The first non-blank source wins: `explicit`, then the timeline's own
    /// era string, then `default-eras`.
    pub fn eras(&self, explicit: Option<&str>, timeline: Option<&str>) -> EraConfig {
        let raw = [explicit, timeline, self.default_eras.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty());
        parse_era_config(raw).with_unmarked(self.unmarked_era)
    }
}
