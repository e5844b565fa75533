//! Brightness and theme calculation pipeline.
//!
//! One pass turns a location into display settings:
//!
//! 1. Query the sun position for the current instant
//! 2. Convert the altitude from radians to degrees
//! 3. Map the altitude to a brightness percentage ([`BrightnessCurve::map`])
//! 4. Select the light or dark theme ([`select_theme`])
//! 5. Add the dark-theme compensation ([`compensate`])
//! 6. Clamp to 0-100% ([`clamp_percentage`])
//! 7. Apply brightness, then the theme
//!
//! Steps 3-6 are pure and live in [`evaluate`]. The compensation is kept as a
//! separate step after the mapping so the curve itself never depends on the
//! theme.

pub mod brightness;
pub mod theme;

pub use brightness::{BrightnessCurve, clamp_percentage};
pub use theme::{Theme, ThemeNames, compensate, select_theme};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::backend::{BrightnessSink, ThemeSink};
use crate::config::Config;
use crate::constants::DEFAULT_DARK_COMPENSATION;
use crate::geo::{Coordinates, Spa, SunPositionProvider};
use crate::time_source::{RealTimeSource, TimeSource};

/// Everything the pure part of the pipeline needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub curve: BrightnessCurve,
    /// Percentage added to the brightness while the dark theme is active
    pub dark_compensation: i32,
    pub themes: ThemeNames,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl DisplaySettings {
    /// Build settings from a loaded configuration, filling gaps with defaults.
    pub fn from_config(config: &Config) -> Self {
        let defaults = BrightnessCurve::default();
        let theme_defaults = ThemeNames::default();

        Self {
            curve: BrightnessCurve {
                min_brightness: config.min_brightness.unwrap_or(defaults.min_brightness),
                max_brightness: config.max_brightness.unwrap_or(defaults.max_brightness),
                min_altitude: config.min_altitude.unwrap_or(defaults.min_altitude),
                max_altitude: config.max_altitude.unwrap_or(defaults.max_altitude),
            },
            dark_compensation: config
                .dark_compensation
                .unwrap_or(DEFAULT_DARK_COMPENSATION),
            themes: ThemeNames {
                light: config.light_theme.clone().unwrap_or(theme_defaults.light),
                dark: config.dark_theme.clone().unwrap_or(theme_defaults.dark),
            },
        }
    }
}

/// Result of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Sun altitude in degrees
    pub altitude_degrees: f64,
    /// Normalized position between the altitude thresholds (0.0-1.0)
    pub position: f64,
    /// Brightness straight from the curve
    pub raw_brightness: i32,
    pub theme: Theme,
    /// Compensation added for the theme (0 for light)
    pub compensation: i32,
    /// Final brightness handed to the backend
    pub brightness: u8,
}

/// Calculate brightness and theme for a sun altitude in degrees.
pub fn evaluate(altitude_degrees: f64, settings: &DisplaySettings) -> Evaluation {
    let raw_brightness = settings.curve.map(altitude_degrees);
    let theme = select_theme(altitude_degrees);
    let compensated = compensate(raw_brightness, theme, settings.dark_compensation);

    Evaluation {
        altitude_degrees,
        position: settings.curve.position(altitude_degrees),
        raw_brightness,
        theme,
        compensation: compensated.saturating_sub(raw_brightness),
        brightness: clamp_percentage(compensated),
    }
}

/// Runs the full pipeline once: sun position, evaluation, application.
///
/// # Examples
///
/// ```no_run
/// use sunbright::backend::{CommandSettings, create_sinks};
/// use sunbright::config::Config;
/// use sunbright::core::{DisplaySettings, Pipeline};
/// use sunbright::geo::Coordinates;
///
/// let config = Config::default();
/// let (brightness, theme) = create_sinks(&CommandSettings::from_config(&config), false, false);
/// let mut pipeline = Pipeline::new(DisplaySettings::from_config(&config), brightness, theme);
/// pipeline.run(Coordinates::new(52.52, 13.405))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct Pipeline {
    settings: DisplaySettings,
    provider: Box<dyn SunPositionProvider>,
    time_source: Box<dyn TimeSource>,
    brightness_sink: Box<dyn BrightnessSink>,
    theme_sink: Box<dyn ThemeSink>,
    dry_run: bool,
    debug_enabled: bool,
}

impl Pipeline {
    /// Create a pipeline using the SPA provider and the system clock.
    pub fn new(
        settings: DisplaySettings,
        brightness_sink: Box<dyn BrightnessSink>,
        theme_sink: Box<dyn ThemeSink>,
    ) -> Self {
        Self {
            settings,
            provider: Box::new(Spa),
            time_source: Box::new(RealTimeSource),
            brightness_sink,
            theme_sink,
            dry_run: false,
            debug_enabled: false,
        }
    }

    /// Use a different sun position provider
    pub fn with_provider(mut self, provider: Box<dyn SunPositionProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Evaluate at the time given by `time_source` instead of now
    pub fn with_time_source(mut self, time_source: Box<dyn TimeSource>) -> Self {
        self.time_source = time_source;
        self
    }

    /// Report settings as "would be set" (the sinks decide what actually runs)
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Show intermediate values
    pub fn with_debug(mut self, debug_enabled: bool) -> Self {
        self.debug_enabled = debug_enabled;
        self
    }

    /// Execute one pass for `coordinates`.
    ///
    /// Nothing is applied if the sun position cannot be calculated. Brightness
    /// is applied before the theme; if it fails the theme is not attempted,
    /// and if the theme fails the brightness already set is left in place.
    pub fn run(&mut self, coordinates: Coordinates) -> Result<Evaluation> {
        let now = self.time_source.now();

        if self.debug_enabled {
            log_debug!("Location: {}", coordinates);
            log_debug!(
                "Evaluating at {}{}",
                now.format("%Y-%m-%d %H:%M:%S %Z"),
                if self.time_source.is_fixed() {
                    " (fixed)"
                } else {
                    ""
                }
            );
        }

        let position = self
            .provider
            .sun_position(now.with_timezone(&Utc), coordinates)
            .context("Failed to calculate sun position")?;

        let evaluation = evaluate(position.altitude.to_degrees(), &self.settings);
        let theme_name = self.settings.themes.resolve(evaluation.theme).to_string();

        if self.debug_enabled {
            log_debug!(
                "Sun azimuth: {:.2}° (from south)",
                position.azimuth.to_degrees()
            );
            log_debug!(
                "Curve position: {:.3} -> {}% (range {}-{}%)",
                evaluation.position,
                evaluation.raw_brightness,
                self.settings.curve.min_brightness,
                self.settings.curve.max_brightness
            );
            log_debug!(
                "Theme: {} ({}), compensation {:+}%",
                evaluation.theme,
                theme_name,
                evaluation.compensation
            );
            log_debug!(
                "Backends: {} / {}",
                self.brightness_sink.backend_name(),
                self.theme_sink.backend_name()
            );
        }

        log_block_start!("Sun altitude: {:.2}°", evaluation.altitude_degrees);

        self.brightness_sink
            .apply_brightness(evaluation.brightness)
            .with_context(|| format!("Failed to set brightness to {}%", evaluation.brightness))?;

        if self.dry_run {
            log_decorated!("Brightness would be set to {}%", evaluation.brightness);
        } else {
            log_decorated!("Brightness set to {}%", evaluation.brightness);
        }

        self.theme_sink
            .apply_theme(&theme_name)
            .with_context(|| format!("Failed to apply color scheme '{theme_name}'"))?;

        if self.dry_run {
            log_decorated!("Theme would be set to {}", theme_name);
        } else {
            log_decorated!("Theme set to {}", theme_name);
        }

        Ok(evaluation)
    }
}
