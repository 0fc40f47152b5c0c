#![allow(dead_code)]

use canyon_core::{CalibrationRect, FacilityMap, Marker, MarkerKind, PlanePoint, SiteConfig};

/// Calibration of the surveyed canyon backdrop.
pub fn canyon_rect() -> CalibrationRect {
    CalibrationRect::new(51.095, 51.100, -113.576, -113.570)
}

/// The four facility markers every canyon site starts with.
pub fn canyon_seed() -> Vec<Marker> {
    vec![
        Marker::new("101", MarkerKind::SnowGun, PlanePoint::new(50.0, 50.0)),
        Marker::new("102", MarkerKind::Hydrant, PlanePoint::new(60.0, 60.0)),
        Marker::new("103", MarkerKind::Valve, PlanePoint::new(70.0, 40.0)),
        Marker::new("104", MarkerKind::Outlet, PlanePoint::new(80.0, 30.0)),
    ]
}

pub fn canyon_map() -> FacilityMap {
    SiteConfig::default()
        .build()
        .expect("built-in canyon site is valid")
}

pub fn seed_ids(markers: &[Marker]) -> Vec<String> {
    markers.iter().map(|marker| marker.id().to_string()).collect()
}
