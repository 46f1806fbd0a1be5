//! Configuration for board creation and playback timing.
//!
//! Maps to `lifeboard.toml`. Every field has a default, so a file only needs
//! the values it wants to change.
//!
//! ## Example `lifeboard.toml`
//!
//! ```toml
//! [board]
//! width = 60
//! height = 30
//! pattern = "random"
//! seed = 7
//!
//! [playback]
//! tick_interval_ms = 120
//! coalesce_window_ms = 30
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Board dimensions and starting contents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub pattern: Pattern,
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            pattern: Pattern::Glider,
            seed: None,
        }
    }
}

/// Timer and edit coalescing parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    pub tick_interval_ms: u64,
    /// Bursts of painted cells closer together than this are emitted once
    pub coalesce_window_ms: u64,
    pub start_playing: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 150,
            coalesce_window_ms: 30,
            start_playing: false,
        }
    }
}

impl PlaybackConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn coalesce_window(&self) -> Duration {
        Duration::from_millis(self.coalesce_window_ms.max(1))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LifeConfig {
    pub board: BoardConfig,
    pub playback: PlaybackConfig,
}

impl LifeConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads `path`, falling back to defaults when the file is missing or
    /// cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
