//! RON configuration loader
//!
//! Loads game settings from an external RON file, with fallback to defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::{WallPolicy, FACING_START, PLAYER_START};
use crate::render::RenderMode;
use crate::world::{Direction, Layout, LayoutError, Position};

/// File name looked up in the working directory and the config directory
pub const CONFIG_FILE: &str = "diamond-miners.ron";

/// Shortest blink period accepted, in milliseconds
const MIN_BLINK_MS: u64 = 50;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid layout: {0}")]
    Layout(#[from] LayoutError),
}

/// Player-tunable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// How often the facing marker blinks
    pub blink_interval_ms: u64,
    /// What walking into a breakable wall does
    pub wall_policy: WallPolicy,
    /// Glyph set for the terminal
    pub render_mode: RenderMode,
    /// Start square, `y = 0` at the bottom
    pub start: (i32, i32),
    pub facing: Direction,
    /// Replacement level as terrain codes, top row first
    pub layout: Option<Vec<Vec<u8>>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            blink_interval_ms: 500,
            wall_policy: WallPolicy::default(),
            render_mode: RenderMode::default(),
            start: (PLAYER_START.x, PLAYER_START.y),
            facing: FACING_START,
            layout: None,
        }
    }
}

impl GameConfig {
    /// Load from the first config file found, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = find_config() else {
            log::info!("No {} found, using default settings", CONFIG_FILE);
            return Self::default();
        };

        Self::load_or_default(&path)
    }

    /// Load a specific file, logging and falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => {
                log::info!("Settings loaded from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("{}. Using default settings", e);
                Self::default()
            }
        }
    }

    /// Load and validate a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the layout parses and the player can stand at the start
    pub fn validate(&self) -> Result<(), ConfigError> {
        let layout = self.layout()?;
        layout.validate_start(Position::from(self.start))?;
        Ok(())
    }

    /// The configured layout, or the shipped level
    pub fn layout(&self) -> Result<Layout, LayoutError> {
        match &self.layout {
            Some(rows) => Layout::from_codes(rows),
            None => Ok(Layout::default()),
        }
    }

    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms.max(MIN_BLINK_MS))
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }
}

/// Config file in the working directory, else the platform config directory
pub fn find_config() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    config_dir_path().filter(|path| path.exists())
}

fn config_dir_path() -> Option<PathBuf> {
    use directories::ProjectDirs;

    ProjectDirs::from("com", "diamond-miners", "DiamondMiners")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Write the default settings to `path` as pretty RON
pub fn export_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let ron = GameConfig::default().to_ron()?;
    fs::write(path, ron).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Default settings written to {:?}", path);
    Ok(())
}
