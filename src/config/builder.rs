//! Default config file generation.
//!
//! Uses a small builder so the generated file keeps its comments aligned
//! whatever the default values are.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::*;

/// Write a commented default configuration to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    Ok(())
}

/// Contents of the generated default config file.
pub fn default_config_content() -> String {
    let content = ConfigBuilder::new()
        .add_section("Brightness")
        .add_setting(
            "min_brightness",
            &DEFAULT_MIN_BRIGHTNESS.to_string(),
            &format!(
                "Brightness at or below min_altitude ({MINIMUM_BRIGHTNESS}-{MAXIMUM_BRIGHTNESS}%)"
            ),
        )
        .add_setting(
            "max_brightness",
            &DEFAULT_MAX_BRIGHTNESS.to_string(),
            &format!(
                "Brightness at or above max_altitude ({MINIMUM_BRIGHTNESS}-{MAXIMUM_BRIGHTNESS}%)"
            ),
        )
        .add_setting(
            "min_altitude",
            &format!("{DEFAULT_MIN_ALTITUDE:.1}"),
            &format!("Sun altitude where the curve starts ({MINIMUM_ALTITUDE} to {MAXIMUM_ALTITUDE})°"),
        )
        .add_setting(
            "max_altitude",
            &format!("{DEFAULT_MAX_ALTITUDE:.1}"),
            &format!("Sun altitude where the curve ends ({MINIMUM_ALTITUDE} to {MAXIMUM_ALTITUDE})°"),
        )
        .add_setting(
            "dark_compensation",
            &DEFAULT_DARK_COMPENSATION.to_string(),
            &format!(
                "Added to brightness while the dark theme is active ({MINIMUM_DARK_COMPENSATION} to {MAXIMUM_DARK_COMPENSATION} | 0 = off)%"
            ),
        )
        .add_section("Theme")
        .add_setting(
            "light_theme",
            &format!("\"{DEFAULT_LIGHT_THEME}\""),
            "Color scheme while the sun is up",
        )
        .add_setting(
            "dark_theme",
            &format!("\"{DEFAULT_DARK_THEME}\""),
            "Color scheme while the sun is below the horizon",
        )
        .add_section("Commands")
        .add_setting(
            "brightness_command",
            &format!("\"{DEFAULT_BRIGHTNESS_COMMAND}\""),
            "Program used to set monitor brightness over DDC/CI",
        )
        .add_setting(
            "brightness_feature_code",
            &format!("\"{DEFAULT_BRIGHTNESS_FEATURE_CODE}\""),
            "VCP feature code for brightness (hex)",
        )
        .add_setting(
            "theme_command",
            &format!("\"{DEFAULT_THEME_COMMAND}\""),
            "Program used to apply the color scheme",
        )
        .build();

    format!("{content}\n")
}

/// Builder for creating dynamically-aligned configuration files.
///
/// Pads every setting line to the widest one so the trailing comments line
/// up in a single column.
struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    fn build(self) -> String {
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.chars().count()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1; // one space before the comment

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(title);
                    first_section = false;
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.chars().count());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        result.join("\n")
    }
}
