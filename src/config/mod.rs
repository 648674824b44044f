// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[picker]` - Constraints passed to the photo and video pickers
//! - `[diagnostics]` - In-memory diagnostics buffer size
//!
//! Nothing the user composes is ever written here; posts live in memory only.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_FEED_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_feed::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let photo = config.picker.photo_constraints();
//! assert!(photo.max_width >= 16);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::{PhotoConstraints, VideoConstraints, VideoQuality};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Constraints handed to the media pickers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickerConfig {
    #[serde(default = "default_photo_max_width")]
    pub photo_max_width: u32,

    #[serde(default = "default_photo_max_height")]
    pub photo_max_height: u32,

    /// 0.1 to 1.0; 1.0 keeps downscaled photos lossless.
    #[serde(default = "default_photo_quality")]
    pub photo_quality: f32,

    #[serde(default)]
    pub video_quality: VideoQuality,

    #[serde(default = "default_video_max_duration_secs")]
    pub video_max_duration_secs: u32,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            photo_max_width: DEFAULT_PHOTO_MAX_WIDTH,
            photo_max_height: DEFAULT_PHOTO_MAX_HEIGHT,
            photo_quality: DEFAULT_PHOTO_QUALITY,
            video_quality: VideoQuality::default(),
            video_max_duration_secs: DEFAULT_VIDEO_MAX_DURATION_SECS,
        }
    }
}

impl PickerConfig {
    /// Photo request constraints, clamped to supported bounds.
    #[must_use]
    pub fn photo_constraints(&self) -> PhotoConstraints {
        PhotoConstraints {
            max_width: self
                .photo_max_width
                .clamp(MIN_PHOTO_DIMENSION, MAX_PHOTO_DIMENSION),
            max_height: self
                .photo_max_height
                .clamp(MIN_PHOTO_DIMENSION, MAX_PHOTO_DIMENSION),
            quality: if self.photo_quality.is_finite() {
                self.photo_quality.clamp(MIN_PHOTO_QUALITY, 1.0)
            } else {
                DEFAULT_PHOTO_QUALITY
            },
        }
    }

    /// Video request constraints, clamped to supported bounds.
    #[must_use]
    pub fn video_constraints(&self) -> VideoConstraints {
        VideoConstraints {
            quality: self.video_quality,
            max_duration_secs: self
                .video_max_duration_secs
                .clamp(MIN_VIDEO_MAX_DURATION_SECS, MAX_VIDEO_MAX_DURATION_SECS),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory (clamped on use).
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub picker: PickerConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_photo_max_width() -> u32 {
    DEFAULT_PHOTO_MAX_WIDTH
}

fn default_photo_max_height() -> u32 {
    DEFAULT_PHOTO_MAX_HEIGHT
}

fn default_photo_quality() -> f32 {
    DEFAULT_PHOTO_QUALITY
}

fn default_video_max_duration_secs() -> u32 {
    DEFAULT_VIDEO_MAX_DURATION_SECS
}

fn default_buffer_capacity() -> usize {
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("Ignoring {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
