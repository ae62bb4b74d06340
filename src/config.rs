//! Configuration file handling
//!
//! Settings live in `<config dir>/lottie-scrub/config.toml`. A missing file
//! means defaults; missing fields in an existing file also fall back to
//! their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrubError};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "LOTTIE_SCRUB_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub logging: LoggingConfig,
}

/// Terminal previewer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Redraw/engine tick interval in milliseconds
    pub tick_rate_ms: u64,
    /// Slider movement per arrow key, as a fraction of the slider range
    pub scrub_step: f64,
    /// Color theme: `default`, `classic` or `ocean`
    pub theme: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 33,
            scrub_step: 0.05,
            theme: "default".to_string(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Log file used while the terminal UI is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Path of the config file (`LOTTIE_SCRUB_CONFIG` wins).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("lottie-scrub").join("config.toml"))
            .ok_or_else(|| ScrubError::Config("could not determine config directory".into()))
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScrubError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ScrubError::Config(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.player.tick_rate_ms == 0 {
            return Err(ScrubError::Config("player.tick_rate_ms must be > 0".into()));
        }
        if !(self.player.scrub_step > 0.0 && self.player.scrub_step <= 1.0) {
            return Err(ScrubError::Config(
                "player.scrub_step must be in (0, 1]".into(),
            ));
        }
        Ok(())
    }

    /// Log file for terminal UI sessions.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.logging.file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join("lottie-scrub").join("lottie-scrub.log"))
        })
    }
}
