// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[slider]` - Slider range, initial selection and crossing behavior
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `RANGE_SLIDER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use range_slider::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let range = config.slider.range().unwrap_or_default();
//! println!("{} .. {}", range.min(), range.max());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::slider::{CrossingPolicy, RangeValues, SliderRange};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when the settings file cannot be read or parsed.
pub const WARNING_LOAD_ERROR: &str = "notice-config-load-error";

/// Warning key reported when the settings file describes an unusable range.
pub const WARNING_INVALID_RANGE: &str = "notice-config-invalid-range";

/// Warning key reported when the initial slider values are not numbers.
pub const WARNING_INVALID_VALUES: &str = "notice-config-invalid-values";

// =============================================================================
// Enums
// =============================================================================

/// Behavior of a thumb dragged past its sibling, as written in the config file.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Crossing {
    #[default]
    Hold,
    Stop,
}

impl From<Crossing> for CrossingPolicy {
    fn from(crossing: Crossing) -> Self {
        match crossing {
            Crossing::Hold => CrossingPolicy::Hold,
            Crossing::Stop => CrossingPolicy::Stop,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Slider settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SliderConfig {
    /// Lower bound of the range.
    pub min: f32,

    /// Upper bound of the range.
    pub max: f32,

    /// Initially selected lower value.
    pub lower: f32,

    /// Initially selected upper value.
    pub upper: f32,

    /// What a thumb does when dragged past its sibling.
    pub crossing: Crossing,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_RANGE_MIN,
            max: DEFAULT_RANGE_MAX,
            lower: DEFAULT_LOWER_VALUE,
            upper: DEFAULT_UPPER_VALUE,
            crossing: Crossing::default(),
        }
    }
}

impl SliderConfig {
    /// Validates the configured bounds.
    pub fn range(&self) -> Result<SliderRange> {
        Ok(SliderRange::new(self.min, self.max)?)
    }

    /// Returns true when both initial values are finite numbers.
    #[must_use]
    pub fn has_finite_values(&self) -> bool {
        self.lower.is_finite() && self.upper.is_finite()
    }

    /// Initial selection, clamped into `range` and ordered.
    ///
    /// A non-finite value is replaced by its default before clamping.
    #[must_use]
    pub fn initial_values(&self, range: &SliderRange) -> RangeValues {
        let finite_or = |value: f32, fallback: f32| {
            if value.is_finite() {
                value
            } else {
                fallback
            }
        };
        RangeValues::new(
            finite_or(self.lower, DEFAULT_LOWER_VALUE),
            finite_or(self.upper, DEFAULT_UPPER_VALUE),
        )
        .clamped_to(range)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Slider settings.
    #[serde(default)]
    pub slider: SliderConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(mut config) if !config.slider.has_finite_values() => {
            tracing::warn!(
                path = %path.display(),
                lower = config.slider.lower,
                upper = config.slider.upper,
                "non-finite slider values in settings"
            );
            config.slider.lower = DEFAULT_LOWER_VALUE;
            config.slider.upper = DEFAULT_UPPER_VALUE;
            (config, Some(WARNING_INVALID_VALUES.to_string()))
        }
        Ok(config) => {
            tracing::debug!(path = %path.display(), "settings loaded");
            (config, None)
        }
        Err(Error::Range(err)) => {
            tracing::warn!(path = %path.display(), %err, "invalid slider range in settings");
            (Config::default(), Some(WARNING_INVALID_RANGE.to_string()))
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "failed to load settings");
            (Config::default(), Some(WARNING_LOAD_ERROR.to_string()))
        }
    }
}

/// Loads configuration from a specific path and validates the slider range.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.slider.range()?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
