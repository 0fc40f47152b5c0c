//! Positions: geodetic fixes from a location provider and points on the
//! normalized map plane.

use serde::{Deserialize, Serialize};

/// Side length of the square map plane. Plane bounds are `[[0, 0], [EXTENT, EXTENT]]`.
pub const PLANE_EXTENT: f64 = 100.0;

/// Plane bounds as `[[y_min, x_min], [y_max, x_max]]`, the shape map widgets expect.
pub const PLANE_BOUNDS: [[f64; 2]; 2] = [[0.0, 0.0], [PLANE_EXTENT, PLANE_EXTENT]];

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticFix {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeodeticFix {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Component-wise midpoint of two fixes.
    pub fn midpoint(&self, other: &GeodeticFix) -> GeodeticFix {
        GeodeticFix {
            latitude: (self.latitude + other.latitude) * 0.5,
            longitude: (self.longitude + other.longitude) * 0.5,
        }
    }
}

/// A position on the map plane. `y` grows downward (row), `x` grows rightward (column).
///
/// Serialized as a `[y, x]` pair so seed files and scene output match the
/// row/column order used by the drawing layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PlanePoint {
    pub y: f64,
    pub x: f64,
}

impl PlanePoint {
    pub const fn new(y: f64, x: f64) -> Self {
        Self { y, x }
    }

    pub fn is_finite(&self) -> bool {
        self.y.is_finite() && self.x.is_finite()
    }

    /// True when the point lies inside the plane bounds (edges included).
    pub fn is_within_plane(&self) -> bool {
        (0.0..=PLANE_EXTENT).contains(&self.y) && (0.0..=PLANE_EXTENT).contains(&self.x)
    }

    pub fn midpoint(&self, other: &PlanePoint) -> PlanePoint {
        PlanePoint {
            y: (self.y + other.y) * 0.5,
            x: (self.x + other.x) * 0.5,
        }
    }
}

impl From<[f64; 2]> for PlanePoint {
    fn from([y, x]: [f64; 2]) -> Self {
        Self { y, x }
    }
}

impl From<PlanePoint> for [f64; 2] {
    fn from(point: PlanePoint) -> Self {
        [point.y, point.x]
    }
}
