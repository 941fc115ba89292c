//! Application settings stored as TOML in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration as StdDuration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::countdown::RefreshConfig;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const MIN_TICK_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tick_interval_ms: u64,
    pub include_days: bool,
    pub stop_when_elapsed: bool,
    /// Page the link builder and edit mode point at.
    pub base_url: String,
    pub share_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            include_days: true,
            stop_when_elapsed: false,
            base_url: "countdown.html".to_string(),
            share_url: "share.html".to_string(),
        }
    }
}

impl AppConfig {
    /// `<config dir>/config.toml`, or `None` when no home directory exists.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "Ken24T", "CountdownPage")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from an explicit path, or from the default location if it resolves.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => {
                    log::warn!("Unable to resolve project directory; using default config");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(path, data)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn refresh_config(&self) -> RefreshConfig {
        RefreshConfig {
            tick_interval: StdDuration::from_millis(self.tick_interval_ms.max(MIN_TICK_INTERVAL_MS)),
            include_days: self.include_days,
            stop_when_elapsed: self.stop_when_elapsed,
        }
    }
}
