//! Configuration for sunbright.
//!
//! Settings are read from `sunbright.toml` in `$XDG_CONFIG_HOME/sunbright/`
//! (or the directory passed with `--config`). A commented default file is
//! written on first run:
//!
//! ```toml
//! #[Brightness]
//! min_brightness = 20       # Brightness at or below min_altitude (0-100%)
//! max_brightness = 80       # Brightness at or above max_altitude (0-100%)
//! min_altitude = -15.0      # Sun altitude where the curve starts (-90 to 90)°
//! max_altitude = 60.0       # Sun altitude where the curve ends (-90 to 90)°
//! dark_compensation = 15    # Added to brightness while the dark theme is active (-100 to 100)%
//!
//! #[Theme]
//! light_theme = "BreezeLight"
//! dark_theme = "BreezeDark"
//!
//! #[Commands]
//! brightness_command = "ddcutil"
//! brightness_feature_code = "10"
//! theme_command = "plasma-apply-colorscheme"
//! ```
//!
//! Every field is optional. Unknown fields are rejected so typos don't go
//! unnoticed, and values are validated before any external command runs.

pub mod builder;
pub mod loading;
pub mod validation;

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::*;

pub use builder::create_default_config;
pub use loading::{
    default_config, get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir,
};
pub use validation::validate_config;

/// Settings loaded from `sunbright.toml`.
///
/// After [`load`] every field is populated: missing values are filled from
/// `constants`.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub min_brightness: Option<i32>, // percent at or below min_altitude
    pub max_brightness: Option<i32>, // percent at or above max_altitude
    pub min_altitude: Option<f64>,   // degrees
    pub max_altitude: Option<f64>,   // degrees
    /// Percentage added to brightness while the dark theme is active.
    ///
    /// Dark themes make the screen look dimmer than a light one at the same
    /// backlight level. Set to 0 to disable.
    pub dark_compensation: Option<i32>,
    pub light_theme: Option<String>,
    pub dark_theme: Option<String>,
    pub brightness_command: Option<String>,
    /// VCP feature code passed to `ddcutil setvcp` (hex, e.g. "10")
    pub brightness_feature_code: Option<String>,
    pub theme_command: Option<String>,
}

impl Config {
    /// Load configuration using the module's load function
    pub fn load() -> Result<Self> {
        load()
    }

    /// Load from path using the module's load_from_path function
    pub fn load_from_path(path: &Path) -> Result<Self> {
        load_from_path(path)
    }

    /// Get configuration path using the module's get_config_path function
    pub fn get_config_path() -> Result<PathBuf> {
        get_config_path()
    }

    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        log_indented!(
            "Brightness: {}-{}% between {}° and {}°",
            self.min_brightness.unwrap_or(DEFAULT_MIN_BRIGHTNESS),
            self.max_brightness.unwrap_or(DEFAULT_MAX_BRIGHTNESS),
            self.min_altitude.unwrap_or(DEFAULT_MIN_ALTITUDE),
            self.max_altitude.unwrap_or(DEFAULT_MAX_ALTITUDE)
        );
        log_indented!(
            "Dark compensation: {:+}%",
            self.dark_compensation.unwrap_or(DEFAULT_DARK_COMPENSATION)
        );
        log_indented!(
            "Themes: {} / {}",
            self.light_theme.as_deref().unwrap_or(DEFAULT_LIGHT_THEME),
            self.dark_theme.as_deref().unwrap_or(DEFAULT_DARK_THEME)
        );
        log_indented!(
            "Commands: {} (feature 0x{}), {}",
            self.brightness_command
                .as_deref()
                .unwrap_or(DEFAULT_BRIGHTNESS_COMMAND),
            self.brightness_feature_code
                .as_deref()
                .map(validation::normalize_feature_code)
                .unwrap_or_else(|| DEFAULT_BRIGHTNESS_FEATURE_CODE.to_string()),
            self.theme_command.as_deref().unwrap_or(DEFAULT_THEME_COMMAND)
        );
    }
}
