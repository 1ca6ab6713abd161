// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[window]` - Initial window dimensions
//! - `[display]` - Grid presentation (thumbnail size, columns, fade)
//! - `[gallery]` - Lightbox behavior (swipe threshold, cache budget)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `PHOTOGRID_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! A missing file yields defaults; an unparsable file yields defaults plus
//! a warning string so the caller can surface it without aborting startup.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "PHOTOGRID_CONFIG_DIR";

/// Initial window dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: Some(DEFAULT_WINDOW_WIDTH),
            height: Some(DEFAULT_WINDOW_HEIGHT),
        }
    }
}

/// Grid presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Tile edge length in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_size: Option<u32>,

    /// Number of tiles per grid row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_columns: Option<usize>,

    /// Lightbox fade duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_millis: Option<u64>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thumbnail_size: Some(DEFAULT_THUMBNAIL_SIZE),
            grid_columns: Some(DEFAULT_GRID_COLUMNS),
            fade_millis: Some(DEFAULT_FADE_MILLIS),
        }
    }
}

/// Lightbox behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Horizontal distance a swipe must travel to navigate, in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold_px: Option<f32>,

    /// Decoded-photo cache budget in megabytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_mb: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: Some(DEFAULT_SWIPE_THRESHOLD_PX),
            cache_mb: Some(DEFAULT_CACHE_MB),
        }
    }
}

/// Root configuration, one struct per `settings.toml` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Effective window width in pixels.
    pub fn window_width(&self) -> u32 {
        self.window.width.unwrap_or(DEFAULT_WINDOW_WIDTH)
    }

    /// Effective window height in pixels.
    pub fn window_height(&self) -> u32 {
        self.window.height.unwrap_or(DEFAULT_WINDOW_HEIGHT)
    }

    /// Effective tile edge length in pixels.
    pub fn thumbnail_size(&self) -> u32 {
        self.display.thumbnail_size.unwrap_or(DEFAULT_THUMBNAIL_SIZE)
    }

    /// Effective number of tiles per row, never zero.
    pub fn grid_columns(&self) -> usize {
        self.display
            .grid_columns
            .filter(|&c| c > 0)
            .unwrap_or(DEFAULT_GRID_COLUMNS)
    }

    /// Effective fade duration.
    pub fn fade_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.display.fade_millis.unwrap_or(DEFAULT_FADE_MILLIS))
    }

    /// Effective swipe threshold in pixels.
    pub fn swipe_threshold_px(&self) -> f32 {
        self.gallery
            .swipe_threshold_px
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)
    }

    /// Effective photo cache budget in bytes.
    pub fn cache_bytes(&self) -> usize {
        (self.gallery.cache_mb.unwrap_or(DEFAULT_CACHE_MB) as usize) * 1024 * 1024
    }
}

/// Resolves the directory holding `settings.toml`.
fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join("photogrid"))
}

/// Resolves the full path of the config file, if a config directory exists.
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, an unparsable file yields
/// defaults plus a warning describing what went wrong.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path() else {
        return (Config::default(), None);
    };
    if !path.is_file() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!(
                "could not read {}: {err}; using defaults",
                path.display()
            )),
        ),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to an explicit path, creating parent directories
/// as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
