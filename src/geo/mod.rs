//! Geographic location and solar position.
//!
//! ## Module Structure
//!
//! - [`solar`]: Sun position calculation for a timestamp and a location
//!
//! Coordinates are supplied once per run on the command line. They are not
//! range-checked when parsed; the sun position provider validates them before
//! calculating anything, so an impossible location fails with a clear message
//! instead of producing a meaningless altitude.

pub mod solar;

pub use solar::{Spa, SunPosition, SunPositionProvider};

use anyhow::Result;

use crate::constants::{MAXIMUM_LATITUDE, MAXIMUM_LONGITUDE, MINIMUM_LATITUDE, MINIMUM_LONGITUDE};

/// A geographic location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude, positive north of the equator (-90 to +90)
    pub latitude: f64,
    /// Longitude, positive east of Greenwich (-180 to +180)
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both values are finite and inside their valid ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite()
            || !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&self.latitude)
        {
            anyhow::bail!(
                "latitude must be between {} and {} degrees (got {})",
                MINIMUM_LATITUDE,
                MAXIMUM_LATITUDE,
                self.latitude
            );
        }

        if !self.longitude.is_finite()
            || !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&self.longitude)
        {
            anyhow::bail!(
                "longitude must be between {} and {} degrees (got {})",
                MINIMUM_LONGITUDE,
                MAXIMUM_LONGITUDE,
                self.longitude
            );
        }

        Ok(())
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.4}°{}, {:.4}°{}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }
}
