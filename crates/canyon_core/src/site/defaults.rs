//! Built-in canyon site: the surveyed backdrop and its four facility markers.

use crate::marker::{Marker, MarkerKind};
use crate::plane::PlanePoint;

pub(super) const DEFAULT_SITE_NAME: &str = "canyon";
pub(super) const DEFAULT_BACKDROP_URL: &str = "/canyon-map.jpg";
pub(super) const DEFAULT_CENTER: PlanePoint = PlanePoint::new(50.0, 50.0);
pub(super) const DEFAULT_ZOOM: u8 = 2;

pub(super) fn canyon_seed_markers() -> Vec<Marker> {
    vec![
        Marker::new("101", MarkerKind::SnowGun, PlanePoint::new(50.0, 50.0)),
        Marker::new("102", MarkerKind::Hydrant, PlanePoint::new(60.0, 60.0)),
        Marker::new("103", MarkerKind::Valve, PlanePoint::new(70.0, 40.0)),
        Marker::new("104", MarkerKind::Outlet, PlanePoint::new(80.0, 30.0)),
    ]
}
