//! Viewer settings with persistence
//!
//! Settings are read from `~/.config/hotmesh/settings.toml`

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

/// All viewer settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HotmeshSettings {
    /// Scene file to load and watch
    pub file_path: PathBuf,
    /// Host tick rate in frames per second
    pub frame_rate: u32,
}

impl Default for HotmeshSettings {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("model.glb"),
            frame_rate: 60,
        }
    }
}

impl HotmeshSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hotmesh"))
    }

    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match Self::parse(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Time budget of one host frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }
}
