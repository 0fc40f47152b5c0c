//! Geodetic fix → map plane conversion.
//!
//! Each axis is an independent linear remap of the calibration range onto
//! `[0, PLANE_EXTENT]`. Latitude is inverted because plane rows grow downward
//! while latitude grows northward. Fixes outside the calibration rectangle
//! extrapolate to points outside the plane; that is expected for a user
//! standing beyond the mapped area.

use crate::calibration::{CalibrationError, CalibrationRect};
use crate::plane::{GeodeticFix, PlanePoint, PLANE_EXTENT};

/// Raw conversion without validation. A degenerate `rect` yields NaN or infinite
/// coordinates; validate the rectangle once up front or use [`CoordinateMapper`].
pub fn to_plane(lat: f64, lng: f64, rect: &CalibrationRect) -> PlanePoint {
    let x = (lng - rect.lng_min) / (rect.lng_max - rect.lng_min) * PLANE_EXTENT;
    let y = (rect.lat_max - lat) / (rect.lat_max - rect.lat_min) * PLANE_EXTENT;
    PlanePoint { y, x }
}

/// Converter bound to a rectangle that has already passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    rect: CalibrationRect,
}

impl CoordinateMapper {
    pub fn new(rect: CalibrationRect) -> Result<Self, CalibrationError> {
        rect.validate()?;
        Ok(Self { rect })
    }

    pub fn rect(&self) -> &CalibrationRect {
        &self.rect
    }

    pub fn to_plane(&self, lat: f64, lng: f64) -> PlanePoint {
        to_plane(lat, lng, &self.rect)
    }

    pub fn fix_to_plane(&self, fix: GeodeticFix) -> PlanePoint {
        self.to_plane(fix.latitude, fix.longitude)
    }
}
