//! Configuration loading functionality.
//!
//! Resolves the config file path, creates the default file when needed,
//! parses and validates the TOML, then fills in defaults.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::Config;
use super::validation::{normalize_feature_code, validate_config};
use crate::constants::*;
use crate::utils::private_path;

/// Global configuration directory, set once at startup
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for the current process.
/// This can only be called once, typically at startup.
/// Returns an error if already set.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// Get the custom configuration directory if one was set.
/// Returns None if using the default directory.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|d| d.clone())
}

/// Load configuration using automatic path detection.
///
/// When the default location has no file, a commented default file is
/// written there for the user to edit. Failing to write it only produces a
/// warning; the run continues with built-in defaults. A custom directory
/// given with `--config` must already contain the file.
pub fn load() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        if get_custom_config_dir().is_some() {
            anyhow::bail!(
                "Configuration file not found at {}",
                private_path(&config_path)
            );
        }

        if let Err(e) = super::builder::create_default_config(&config_path) {
            log_pipe!();
            log_warning!("Could not create default configuration: {:#}", e);
            log_indented!("Using built-in defaults");
            return Ok(default_config());
        }

        log_info!(
            "Created default configuration at {}",
            private_path(&config_path)
        );
    }

    load_from_path(&config_path).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            private_path(&config_path)
        )
    })
}

/// Built-in defaults, as if loaded from an empty file.
pub fn default_config() -> Config {
    let mut config = Config::default();
    apply_defaults(&mut config);
    config
}

/// Load configuration from a specific path.
///
/// This version does NOT create a default config if the path doesn't exist.
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!(
            "Configuration file not found at {}",
            private_path(path)
        );
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", private_path(path)))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", private_path(path)))?;

    validate_config(&config)?;
    apply_defaults(&mut config);

    Ok(config)
}

/// Get the configuration file path, honoring a custom directory.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(custom_dir) = get_custom_config_dir() {
        return Ok(custom_dir.join(CONFIG_FILE_NAME));
    }

    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Apply default values to configuration fields.
pub(crate) fn apply_defaults(config: &mut Config) {
    config.min_brightness.get_or_insert(DEFAULT_MIN_BRIGHTNESS);
    config.max_brightness.get_or_insert(DEFAULT_MAX_BRIGHTNESS);
    config.min_altitude.get_or_insert(DEFAULT_MIN_ALTITUDE);
    config.max_altitude.get_or_insert(DEFAULT_MAX_ALTITUDE);
    config
        .dark_compensation
        .get_or_insert(DEFAULT_DARK_COMPENSATION);

    config
        .light_theme
        .get_or_insert_with(|| DEFAULT_LIGHT_THEME.to_string());
    config
        .dark_theme
        .get_or_insert_with(|| DEFAULT_DARK_THEME.to_string());

    config
        .brightness_command
        .get_or_insert_with(|| DEFAULT_BRIGHTNESS_COMMAND.to_string());
    config
        .theme_command
        .get_or_insert_with(|| DEFAULT_THEME_COMMAND.to_string());

    // ddcutil takes the feature code as bare hex
    config.brightness_feature_code = Some(
        config
            .brightness_feature_code
            .as_deref()
            .map(normalize_feature_code)
            .unwrap_or_else(|| DEFAULT_BRIGHTNESS_FEATURE_CODE.to_string()),
    );
}
