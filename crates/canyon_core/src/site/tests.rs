use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::calibration::{Axis, CalibrationError};
use crate::marker::{MarkerId, MarkerKind};
use crate::plane::PlanePoint;
use crate::style::MarkerStyle;

use super::*;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("site.json");
    fs::write(&path, contents).expect("test fixture should be written");
    path
}

#[test]
fn empty_document_is_the_canyon_site() {
    let config = SiteConfig::from_json_str("{}").expect("empty document is valid");
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.seed_markers.len(), 4);
    assert_eq!(config.backdrop_url, "/canyon-map.jpg");
    assert_eq!(config.view.zoom, 2);
    assert!(config.locate_timeout().is_none());
}

#[test]
fn default_config_builds() {
    let map = SiteConfig::default().build().expect("defaults are valid");
    let ids: Vec<String> = map
        .markers()
        .iter()
        .map(|marker| marker.id().to_string())
        .collect();
    assert_eq!(ids, ["101", "102", "103", "104"]);
    assert_eq!(map.layout().center, PlanePoint::new(50.0, 50.0));
}

#[test]
fn unknown_fields_are_rejected() {
    let result = SiteConfig::from_json_str(r#"{ "zoom": 3 }"#);
    assert!(matches!(result, Err(ConfigError::Json(_))));
}

#[test]
fn pretty_json_round_trips() {
    let mut config = SiteConfig::default();
    config.locate_timeout_ms = Some(5_000);
    config
        .styles
        .insert(MarkerKind::Valve, MarkerStyle::new("/valve.svg", [16, 16]));

    let json = config.to_json_pretty().expect("config should serialize");
    assert!(json.contains("\"valve\""));
    let parsed = SiteConfig::from_json_str(&json).expect("serialized config should parse");
    assert_eq!(parsed, config);
}

#[test]
fn loads_from_file() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let path = write_config(
        &dir,
        r#"{
            "name": "north bowl",
            "calibration": { "lat_min": 10.0, "lat_max": 11.0, "lng_min": 20.0, "lng_max": 22.0 },
            "seed_markers": [
                { "id": "a", "kind": "hydrant", "position": [10, 90] }
            ],
            "locate_timeout_ms": 1500
        }"#,
    );

    let config = SiteConfig::from_path(&path).expect("config should load");
    assert_eq!(config.name, "north bowl");
    assert_eq!(config.calibration.lng_max, 22.0);
    assert_eq!(config.locate_timeout_ms, Some(1500));

    let map = config.build().expect("config is valid");
    assert_eq!(map.mapper().to_plane(10.5, 21.0), PlanePoint::new(50.0, 50.0));
    assert_eq!(map.markers().len(), 1);
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let result = SiteConfig::from_path(&dir.path().join("absent.json"));
    match result {
        Err(ConfigError::Io { path, .. }) => assert!(path.ends_with("absent.json")),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn malformed_file_is_json_error() {
    let dir = TempDir::new().expect("temp dir should be creatable");
    let path = write_config(&dir, "{ definitely-not-json ");
    assert!(matches!(
        SiteConfig::from_path(Path::new(&path)),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn degenerate_calibration_halts_build() {
    let config = SiteConfig::from_json_str(
        r#"{ "calibration": { "lat_min": 51.1, "lat_max": 51.1, "lng_min": -113.576, "lng_max": -113.570 } }"#,
    )
    .expect("document is well formed");
    match config.build() {
        Err(ConfigError::Calibration(CalibrationError::Degenerate { axis, .. })) => {
            assert_eq!(axis, Axis::Latitude)
        }
        other => panic!("expected degenerate calibration, got {other:?}"),
    }
}

#[test]
fn duplicate_seed_ids_halt_build() {
    let config = SiteConfig::from_json_str(
        r#"{ "seed_markers": [
            { "id": "7", "kind": "valve", "position": [1, 1] },
            { "id": "7", "kind": "outlet", "position": [2, 2] }
        ] }"#,
    )
    .expect("document is well formed");
    match config.build() {
        Err(ConfigError::DuplicateId(error)) => assert_eq!(error.0, MarkerId::from("7")),
        other => panic!("expected duplicate id, got {other:?}"),
    }
}

#[test]
fn seed_outside_plane_is_rejected() {
    let config = SiteConfig::from_json_str(
        r#"{ "seed_markers": [ { "id": "far", "kind": "valve", "position": [120, 5] } ] }"#,
    )
    .expect("document is well formed");
    assert!(matches!(
        config.build(),
        Err(ConfigError::SeedOutOfBounds { y, .. }) if y == 120.0
    ));
}

#[test]
fn invalid_view_and_prefix_are_rejected() {
    let mut config = SiteConfig::default();
    config.view.zoom = 30;
    assert!(matches!(
        config.build(),
        Err(ConfigError::InvalidZoom { zoom: 30, max: MAX_ZOOM })
    ));

    let mut config = SiteConfig::default();
    config.view.center = PlanePoint::new(-1.0, 50.0);
    assert!(matches!(
        config.build(),
        Err(ConfigError::CenterOutOfBounds { .. })
    ));

    let mut config = SiteConfig::default();
    config.id_prefix = "  ".to_string();
    assert!(matches!(config.build(), Err(ConfigError::EmptyIdPrefix)));
}

#[test]
fn zero_sized_icon_override_is_rejected() {
    let mut config = SiteConfig::default();
    config
        .styles
        .insert(MarkerKind::GpsFix, MarkerStyle::new("/gps.png", [20, 0]));
    assert!(matches!(
        config.build(),
        Err(ConfigError::InvalidIconSize {
            kind: MarkerKind::GpsFix
        })
    ));
}

#[test]
fn configured_prefix_names_placed_markers() {
    let mut config = SiteConfig::default();
    config.id_prefix = "crew".to_string();
    let mut map = config.build().expect("config is valid");
    let placed = map.place_marker(MarkerKind::SnowGun, PlanePoint::new(1.0, 2.0));
    assert_eq!(placed.id().as_str(), "crew-1");
}
