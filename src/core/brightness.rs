//! Altitude-to-brightness mapping.
//!
//! The curve is piecewise linear: flat at `min_brightness` up to
//! `min_altitude`, a straight ramp between the two altitude thresholds, and
//! flat at `max_brightness` from `max_altitude` upwards.
//!
//! ```text
//! brightness
//!    max ┤                 ┌──────────
//!        │               ╱
//!        │             ╱
//!    min ┤──────────╱
//!        └──────────┬──────┬────────── altitude
//!               min_alt  max_alt
//! ```

use crate::constants::{
    DEFAULT_MAX_ALTITUDE, DEFAULT_MAX_BRIGHTNESS, DEFAULT_MIN_ALTITUDE, DEFAULT_MIN_BRIGHTNESS,
    MAXIMUM_BRIGHTNESS, MINIMUM_BRIGHTNESS,
};

/// Brightness range and the altitude thresholds it is spread over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessCurve {
    /// Brightness percentage at or below `min_altitude`
    pub min_brightness: i32,
    /// Brightness percentage at or above `max_altitude`
    pub max_brightness: i32,
    /// Lower altitude threshold in degrees
    pub min_altitude: f64,
    /// Upper altitude threshold in degrees
    pub max_altitude: f64,
}

impl Default for BrightnessCurve {
    fn default() -> Self {
        Self {
            min_brightness: DEFAULT_MIN_BRIGHTNESS,
            max_brightness: DEFAULT_MAX_BRIGHTNESS,
            min_altitude: DEFAULT_MIN_ALTITUDE,
            max_altitude: DEFAULT_MAX_ALTITUDE,
        }
    }
}

impl BrightnessCurve {
    /// Normalized position of `altitude_degrees` between the thresholds.
    ///
    /// Returns 0.0 at or below `min_altitude` (and for NaN), 1.0 at or above
    /// `max_altitude`, and the linear fraction in between.
    pub fn position(&self, altitude_degrees: f64) -> f64 {
        if altitude_degrees.is_nan() || altitude_degrees <= self.min_altitude {
            0.0
        } else if altitude_degrees >= self.max_altitude {
            1.0
        } else {
            (altitude_degrees - self.min_altitude) / (self.max_altitude - self.min_altitude)
        }
    }

    /// Map a sun altitude in degrees to a brightness percentage.
    ///
    /// Values between the thresholds are interpolated linearly and rounded
    /// half away from zero. The thresholds are checked before dividing, so
    /// equal thresholds never divide by zero.
    pub fn map(&self, altitude_degrees: f64) -> i32 {
        if altitude_degrees.is_nan() || altitude_degrees <= self.min_altitude {
            return self.min_brightness;
        }
        if altitude_degrees >= self.max_altitude {
            return self.max_brightness;
        }

        let t = self.position(altitude_degrees);
        let span = f64::from(self.max_brightness - self.min_brightness);

        #[allow(clippy::cast_possible_truncation)]
        let brightness = (f64::from(self.min_brightness) + t * span).round() as i32;
        brightness
    }
}

/// Clamp a brightness value to the percentage range accepted by monitors.
pub fn clamp_percentage(value: i32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clamped = value.clamp(MINIMUM_BRIGHTNESS, MAXIMUM_BRIGHTNESS) as u8;
    clamped
}
