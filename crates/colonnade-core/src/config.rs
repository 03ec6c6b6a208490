// ABOUTME: Engine configuration handling.
// ABOUTME: Loads and saves animation and snapping settings from TOML files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Animation timing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Shrink/fade duration when a column is dismissed (seconds)
    pub dismiss_duration: f32,

    /// Fly-in duration for an inserted column (seconds)
    pub insert_duration: f32,

    /// Duration of the default spring fly-in transition (seconds)
    pub fly_in_duration: f32,

    /// Duration of the collapse shift after a removal (seconds)
    pub collapse_duration: f32,

    /// Collapse delay as a fraction of the dismiss duration
    pub collapse_delay_factor: f32,

    /// Duration of an animated scroll-offset change (seconds)
    pub scroll_duration: f32,

    /// Damping for the spring fly-in curve (0 = bouncy, 1 = critically damped)
    pub spring_damping: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            dismiss_duration: 0.5,
            insert_duration: 0.2,
            fly_in_duration: 0.35,
            collapse_duration: 0.2,
            collapse_delay_factor: 0.8,
            scroll_duration: 0.25,
            spring_damping: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Animation timing settings
    pub animation: AnimationSettings,

    /// Fraction of a column that must be scrolled past before snapping
    /// advances to the next edge
    pub snap_threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animation: AnimationSettings::default(),
            snap_threshold: 0.2,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl Config {
    /// Get the default config file path (~/.config/colonnade/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("colonnade").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}
