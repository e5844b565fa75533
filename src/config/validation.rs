//! Configuration validation functionality.
//!
//! Rejects values that would produce a nonsensical brightness curve or
//! broken command lines. Runs before defaults are applied, so only fields
//! present in the file are checked.

use anyhow::Result;

use super::Config;
use crate::constants::*;

/// Validate every field present in `config`.
pub fn validate_config(config: &Config) -> Result<()> {
    // Brightness range
    for (name, value) in [
        ("min_brightness", config.min_brightness),
        ("max_brightness", config.max_brightness),
    ] {
        if let Some(value) = value
            && !(MINIMUM_BRIGHTNESS..=MAXIMUM_BRIGHTNESS).contains(&value)
        {
            anyhow::bail!(
                "{} ({}%) must be between {}% and {}%",
                name,
                value,
                MINIMUM_BRIGHTNESS,
                MAXIMUM_BRIGHTNESS
            );
        }
    }

    let min_brightness = config.min_brightness.unwrap_or(DEFAULT_MIN_BRIGHTNESS);
    let max_brightness = config.max_brightness.unwrap_or(DEFAULT_MAX_BRIGHTNESS);
    if min_brightness > max_brightness {
        anyhow::bail!(
            "min_brightness ({}%) must not be greater than max_brightness ({}%)",
            min_brightness,
            max_brightness
        );
    }

    // Altitude thresholds
    for (name, value) in [
        ("min_altitude", config.min_altitude),
        ("max_altitude", config.max_altitude),
    ] {
        if let Some(value) = value
            && !(value.is_finite() && (MINIMUM_ALTITUDE..=MAXIMUM_ALTITUDE).contains(&value))
        {
            anyhow::bail!(
                "{} ({}°) must be between {}° and {}°",
                name,
                value,
                MINIMUM_ALTITUDE,
                MAXIMUM_ALTITUDE
            );
        }
    }

    let min_altitude = config.min_altitude.unwrap_or(DEFAULT_MIN_ALTITUDE);
    let max_altitude = config.max_altitude.unwrap_or(DEFAULT_MAX_ALTITUDE);
    if min_altitude >= max_altitude {
        anyhow::bail!(
            "min_altitude ({}°) must be lower than max_altitude ({}°)",
            min_altitude,
            max_altitude
        );
    }

    if let Some(compensation) = config.dark_compensation
        && !(MINIMUM_DARK_COMPENSATION..=MAXIMUM_DARK_COMPENSATION).contains(&compensation)
    {
        anyhow::bail!(
            "dark_compensation ({}%) must be between {}% and {}%",
            compensation,
            MINIMUM_DARK_COMPENSATION,
            MAXIMUM_DARK_COMPENSATION
        );
    }

    for (name, value) in [
        ("light_theme", &config.light_theme),
        ("dark_theme", &config.dark_theme),
        ("brightness_command", &config.brightness_command),
        ("theme_command", &config.theme_command),
    ] {
        if let Some(value) = value {
            validate_name(name, value)?;
        }
    }

    if let Some(code) = &config.brightness_feature_code
        && !is_valid_feature_code(code)
    {
        anyhow::bail!(
            "brightness_feature_code (\"{}\") must be a hexadecimal VCP code such as \"10\" or \"0x10\"",
            code
        );
    }

    Ok(())
}

fn validate_name(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        anyhow::bail!("{} must not be empty", field);
    }
    if value.trim() != value {
        anyhow::bail!(
            "{} (\"{}\") must not start or end with whitespace",
            field,
            value
        );
    }
    Ok(())
}

/// One or two hex digits, optionally prefixed with `0x`.
pub(crate) fn is_valid_feature_code(code: &str) -> bool {
    let digits = strip_hex_prefix(code);
    (1..=2).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Bare uppercase hex form, e.g. "0x1a" -> "1A".
pub(crate) fn normalize_feature_code(code: &str) -> String {
    strip_hex_prefix(code).to_ascii_uppercase()
}

fn strip_hex_prefix(code: &str) -> &str {
    code.strip_prefix("0x")
        .or_else(|| code.strip_prefix("0X"))
        .unwrap_or(code)
}
