//! Day/night theme selection and dark-theme brightness compensation.

use crate::constants::{DEFAULT_DARK_THEME, DEFAULT_LIGHT_THEME};

/// Light or dark desktop color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Select the theme for a sun altitude in degrees.
///
/// The sun on the horizon (exactly 0°) counts as day. NaN counts as night.
pub fn select_theme(altitude_degrees: f64) -> Theme {
    if altitude_degrees >= 0.0 {
        Theme::Light
    } else {
        Theme::Dark
    }
}

/// Adjust a mapped brightness for the selected theme.
///
/// Dark themes look dimmer at the same backlight level, so `dark_compensation`
/// is added while the dark theme is active. The result is not clamped; the
/// caller clamps once all adjustments are done.
pub fn compensate(brightness: i32, theme: Theme, dark_compensation: i32) -> i32 {
    match theme {
        Theme::Light => brightness,
        Theme::Dark => brightness.saturating_add(dark_compensation),
    }
}

/// Platform-specific color scheme names for both themes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeNames {
    pub light: String,
    pub dark: String,
}

impl Default for ThemeNames {
    fn default() -> Self {
        Self {
            light: DEFAULT_LIGHT_THEME.to_string(),
            dark: DEFAULT_DARK_THEME.to_string(),
        }
    }
}

impl ThemeNames {
    /// Get the color scheme name for `theme`.
    pub fn resolve(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_theme() {
        assert_eq!(select_theme(45.0), Theme::Light);
        assert_eq!(select_theme(0.001), Theme::Light);
        assert_eq!(select_theme(-0.001), Theme::Dark);
        assert_eq!(select_theme(-45.0), Theme::Dark);
    }

    #[test]
    fn test_horizon_is_day() {
        assert_eq!(select_theme(0.0), Theme::Light);
        assert_eq!(select_theme(-0.0), Theme::Light);
    }

    #[test]
    fn test_nan_is_night() {
        assert_eq!(select_theme(f64::NAN), Theme::Dark);
    }

    #[test]
    fn test_compensate_only_dark() {
        assert_eq!(compensate(28, Theme::Dark, 15), 43);
        assert_eq!(compensate(28, Theme::Light, 15), 28);
        assert_eq!(compensate(28, Theme::Dark, 0), 28);
        assert_eq!(compensate(28, Theme::Dark, -10), 18);
    }

    #[test]
    fn test_compensate_does_not_overflow() {
        assert_eq!(compensate(i32::MAX, Theme::Dark, 15), i32::MAX);
    }

    #[test]
    fn test_resolve_theme_names() {
        let names = ThemeNames::default();
        assert_eq!(names.resolve(Theme::Light), "BreezeLight");
        assert_eq!(names.resolve(Theme::Dark), "BreezeDark");
    }

    #[test]
    fn test_theme_display() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
