//! The geodetic rectangle the backdrop image is known to cover.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default calibration: the surveyed canyon backdrop.
const DEFAULT_LAT_MIN: f64 = 51.095;
const DEFAULT_LAT_MAX: f64 = 51.100;
const DEFAULT_LNG_MIN: f64 = -113.576;
const DEFAULT_LNG_MAX: f64 = -113.570;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalibrationError {
    #[error("degenerate calibration: {axis} range collapses to a single value ({value})")]
    Degenerate { axis: Axis, value: f64 },
    #[error("inverted calibration: {axis} minimum {min} is greater than maximum {max}")]
    Inverted { axis: Axis, min: f64, max: f64 },
    #[error("non-finite {axis} bound in calibration")]
    NonFinite { axis: Axis },
}

/// Latitude/longitude bounding box in degrees.
///
/// Fields are plain data so the rectangle can come straight from configuration;
/// call [`CalibrationRect::validate`] once before converting any fix with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalibrationRect {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl Default for CalibrationRect {
    fn default() -> Self {
        Self {
            lat_min: DEFAULT_LAT_MIN,
            lat_max: DEFAULT_LAT_MAX,
            lng_min: DEFAULT_LNG_MIN,
            lng_max: DEFAULT_LNG_MAX,
        }
    }
}

impl CalibrationRect {
    pub fn new(lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lng_min,
            lng_max,
        }
    }

    pub fn validate(&self) -> Result<(), CalibrationError> {
        check_axis(Axis::Latitude, self.lat_min, self.lat_max)?;
        check_axis(Axis::Longitude, self.lng_min, self.lng_max)
    }

    pub fn lat_span(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    pub fn lng_span(&self) -> f64 {
        self.lng_max - self.lng_min
    }

    /// Geodetic center of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.lat_min + self.lat_max) * 0.5,
            (self.lng_min + self.lng_max) * 0.5,
        )
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&latitude)
            && (self.lng_min..=self.lng_max).contains(&longitude)
    }
}

fn check_axis(axis: Axis, min: f64, max: f64) -> Result<(), CalibrationError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(CalibrationError::NonFinite { axis });
    }
    if min == max {
        return Err(CalibrationError::Degenerate { axis, value: min });
    }
    if min > max {
        return Err(CalibrationError::Inverted { axis, min, max });
    }
    Ok(())
}
