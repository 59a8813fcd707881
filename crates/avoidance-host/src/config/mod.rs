//! TOML-based configuration for the demo host.
//!
//! The config file describes the simulated screen, the soft keyboard's
//! geometry and animation, and runtime settings:
//!
//! ```toml
//! [screen]
//! width = 320.0
//! height = 800.0
//!
//! [keyboard]
//! height = 300.0
//! resized_height = 240.0
//! animation_duration = 0.25
//! animation_curve = "EaseInOut"
//!
//! [run]
//! log_level = "info"
//! ```
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the field is absent from the TOML file.  This allows
//! the demo to run correctly on first start (before a config file exists) and
//! when loading an older config file that is missing newer fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use avoidance_core::AnimationCurve;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level demo configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// Dimensions of the simulated screen, in points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenConfig {
    #[serde(default = "default_screen_width")]
    pub width: f64,
    #[serde(default = "default_screen_height")]
    pub height: f64,
}

/// Geometry and animation of the simulated soft keyboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyboardConfig {
    /// Keyboard height when first shown, in points.
    #[serde(default = "default_keyboard_height")]
    pub height: f64,
    /// Height the demo resizes the keyboard to mid-session (e.g. an
    /// accessory bar being dismissed).
    #[serde(default = "default_resized_height")]
    pub resized_height: f64,
    /// Show/hide transition duration in seconds.
    #[serde(default = "default_animation_duration")]
    pub animation_duration: f64,
    /// Curve name: `"EaseInOut"`, `"EaseIn"`, `"EaseOut"`, or `"Linear"`.
    #[serde(default = "default_animation_curve")]
    pub animation_curve: AnimationCurve,
}

/// Runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_screen_width() -> f64 {
    320.0
}
fn default_screen_height() -> f64 {
    800.0
}
fn default_keyboard_height() -> f64 {
    300.0
}
fn default_resized_height() -> f64 {
    240.0
}
fn default_animation_duration() -> f64 {
    0.25
}
fn default_animation_curve() -> AnimationCurve {
    AnimationCurve::EaseInOut
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            screen: ScreenConfig::default(),
            keyboard: KeyboardConfig::default(),
            run: RunConfig::default(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_screen_width(),
            height: default_screen_height(),
        }
    }
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            height: default_keyboard_height(),
            resized_height: default_resized_height(),
            animation_duration: default_animation_duration(),
            animation_curve: default_animation_curve(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Loads `DemoConfig` from `path`, returning `DemoConfig::default()` if the
/// file does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<DemoConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: DemoConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(DemoConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Persists `config` to `path`.
///
/// Creates the parent directory if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &DemoConfig) -> Result<(), ConfigError> {
    // A bare relative filename has an empty parent; only create real ones.
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
