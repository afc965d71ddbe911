//! Configuration file handling for ink-frame.
//!
//! Loads configuration from `~/.config/ink-frame/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::compose::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::display::{DEFAULT_FRAMEBUFFER_PATH, DEFAULT_REFRESH_PATH};

pub const DEFAULT_INPUT_PATH: &str = "/dev/input/event1";

/// Configuration file structure for ink-frame.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Mode name; unknown names fall back to dithered
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default = "default_framebuffer")]
    pub framebuffer: PathBuf,
    #[serde(default = "default_refresh")]
    pub refresh: PathBuf,
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: None,
            framebuffer: default_framebuffer(),
            refresh: default_refresh(),
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct InputConfig {
    #[serde(default = "default_input")]
    pub device: PathBuf,
    #[serde(default = "default_true")]
    pub grab: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            device: default_input(),
            grab: true,
        }
    }
}

fn default_framebuffer() -> PathBuf {
    PathBuf::from(DEFAULT_FRAMEBUFFER_PATH)
}

fn default_refresh() -> PathBuf {
    PathBuf::from(DEFAULT_REFRESH_PATH)
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_PATH)
}

fn default_width() -> usize {
    PANEL_WIDTH
}

fn default_height() -> usize {
    PANEL_HEIGHT
}

fn default_true() -> bool {
    true
}

impl DisplayConfig {
    /// Bytes in one panel frame.
    ///
    /// Zero-sized panels and dimensions whose product overflows are rejected.
    pub fn frame_len(&self) -> Result<usize, ConfigError> {
        self.width
            .checked_mul(self.height)
            .filter(|&len| len > 0)
            .ok_or(ConfigError::PanelSize {
                width: self.width,
                height: self.height,
            })
    }
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// A missing file yields the defaults. A file that cannot be read, parsed
    /// or that describes an unusable panel is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        config.display.frame_len()?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}", path = .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}", path = .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid panel size {width}x{height}")]
    PanelSize { width: usize, height: usize },
}

/// `<config dir>/ink-frame/config.toml`, or relative to the working
/// directory when no config dir is known.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join("ink-frame")
        .join("config.toml")
}
