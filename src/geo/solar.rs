//! Sun position calculation.
//!
//! Positions come from NREL's Solar Position Algorithm via the
//! `solar-positioning` crate, with ΔT estimated from the date. The altitude
//! is geometric (no refraction correction), so 0° is the true horizon.
//!
//! Angles returned by the provider are in radians:
//! - `altitude`: above the horizon is positive, below is negative
//! - `azimuth`: measured from south, increasing towards west

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use solar_positioning::spa;
use solar_positioning::time::DeltaT;

use super::Coordinates;

/// Observer height above sea level in meters. Negligible for brightness.
const OBSERVER_ELEVATION: f64 = 0.0;

/// Position of the sun in the local horizontal coordinate system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Angle above the horizon in radians
    pub altitude: f64,
    /// Azimuth in radians, measured from south towards west
    pub azimuth: f64,
}

/// Source of sun positions.
///
/// The pipeline only depends on this trait so it can be driven by fixed
/// positions in tests.
#[cfg_attr(test, mockall::automock)]
pub trait SunPositionProvider {
    /// Get the sun position at `at` as seen from `coordinates`.
    ///
    /// # Errors
    /// Fails when the coordinates are outside the valid latitude/longitude
    /// ranges or are not finite.
    fn sun_position(&self, at: DateTime<Utc>, coordinates: Coordinates) -> Result<SunPosition>;
}

/// Default provider based on the Solar Position Algorithm.
#[derive(Debug, Default, Clone, Copy)]
pub struct Spa;

impl SunPositionProvider for Spa {
    fn sun_position(&self, at: DateTime<Utc>, coordinates: Coordinates) -> Result<SunPosition> {
        coordinates
            .validate()
            .with_context(|| format!("Cannot calculate sun position for {coordinates}"))?;

        let delta_t = DeltaT::estimate_from_date_like(at)
            .with_context(|| format!("Cannot estimate ΔT for {at}"))?;

        let position = spa::solar_position(
            at,
            coordinates.latitude,
            coordinates.longitude,
            OBSERVER_ELEVATION,
            delta_t,
            None,
        )
        .with_context(|| format!("Cannot calculate sun position for {coordinates}"))?;

        Ok(SunPosition {
            altitude: position.elevation_angle().to_radians(),
            // SPA measures from north, clockwise
            azimuth: (position.azimuth() - 180.0).to_radians(),
        })
    }
}
