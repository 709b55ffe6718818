//! Game settings and preferences
//!
//! Read once at startup from a JSON file. Missing fields take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BreakoutError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0), applied on top of the fixed effect volume
    pub master_volume: f32,
    /// Silence all sound effects
    pub muted: bool,

    // === Gameplay ===
    /// Fixed RNG seed for a reproducible run; random when unset
    pub seed: Option<u64>,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            muted: false,
            seed: None,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Environment variable naming an alternative settings file
    pub const PATH_ENV: &'static str = "BREAKOUT_SETTINGS";
    /// Settings file looked up in the working directory
    pub const DEFAULT_FILE: &'static str = "breakout.json";

    /// Where settings are read from
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_FILE))
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, BreakoutError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        Ok(settings)
    }

    /// Read settings from a file
    pub fn load_from(path: &Path) -> Result<Self, BreakoutError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults when the file is absent or bad
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
