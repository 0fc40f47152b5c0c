//! The map session: one owned value tying the mapper, the marker store, the
//! style table and the device location together, plus the scene handed to the
//! drawing layer.

use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::geolocation::{request_current_position, GeolocationProvider};
use crate::mapper::CoordinateMapper;
use crate::marker::{Marker, MarkerId, MarkerKind};
use crate::plane::{GeodeticFix, PlanePoint, PLANE_BOUNDS};
use crate::store::MarkerStore;
use crate::style::{MarkerStyle, StyleTable};

const LOCATION_LABEL: &str = "You are here.";

/// Backdrop and initial camera. Plane bounds are fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayout {
    pub backdrop_url: String,
    pub center: PlanePoint,
    pub zoom: u8,
}

impl MapLayout {
    pub fn new(backdrop_url: impl Into<String>, center: PlanePoint, zoom: u8) -> Self {
        Self {
            backdrop_url: backdrop_url.into(),
            center,
            zoom,
        }
    }
}

/// Outcome of the one position request a session makes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationState {
    NotRequested,
    Located(PlanePoint),
    Unavailable,
}

impl LocationState {
    pub fn point(&self) -> Option<PlanePoint> {
        match self {
            LocationState::Located(point) => Some(*point),
            LocationState::NotRequested | LocationState::Unavailable => None,
        }
    }
}

/// One drawable marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub id: MarkerId,
    pub kind: MarkerKind,
    pub position: PlanePoint,
    pub icon_url: String,
    pub icon_size: [u32; 2],
    pub label: String,
}

/// The "you are here" marker and its placement affordance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationView {
    pub position: PlanePoint,
    pub icon_url: String,
    pub icon_size: [u32; 2],
    pub label: String,
    pub can_place_snow_gun: bool,
}

/// Everything the drawing layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub backdrop_url: String,
    pub bounds: [[f64; 2]; 2],
    pub center: PlanePoint,
    pub zoom: u8,
    pub markers: Vec<MarkerView>,
    pub location: Option<LocationView>,
}

#[derive(Debug, Clone)]
pub struct FacilityMap {
    mapper: CoordinateMapper,
    store: MarkerStore,
    styles: StyleTable,
    layout: MapLayout,
    locate_timeout: Option<Duration>,
    location: LocationState,
}

impl FacilityMap {
    pub fn new(
        mapper: CoordinateMapper,
        store: MarkerStore,
        styles: StyleTable,
        layout: MapLayout,
        locate_timeout: Option<Duration>,
    ) -> Self {
        Self {
            mapper,
            store,
            styles,
            layout,
            locate_timeout,
            location: LocationState::NotRequested,
        }
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn markers(&self) -> &MarkerStore {
        &self.store
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn layout(&self) -> &MapLayout {
        &self.layout
    }

    pub fn location(&self) -> LocationState {
        self.location
    }

    /// Asks `provider` for the device position, once per session.
    ///
    /// Later calls return the recorded outcome without a new request.
    pub async fn locate<P>(&mut self, provider: &P) -> Option<PlanePoint>
    where
        P: GeolocationProvider + ?Sized,
    {
        if self.location != LocationState::NotRequested {
            return self.location.point();
        }
        let point = request_current_position(provider, self.locate_timeout)
            .await
            .and_then(|fix| self.record_fix(fix));
        if point.is_none() {
            self.location = LocationState::Unavailable;
        }
        point
    }

    /// Converts a fix delivered by the host and makes it the current location.
    ///
    /// A fix that is not finite, or that lands at a non-finite plane point, is
    /// ignored and the location state is left as it was.
    pub fn record_fix(&mut self, fix: GeodeticFix) -> Option<PlanePoint> {
        if !fix.is_finite() {
            warn!(?fix, "ignoring non-finite position fix");
            return None;
        }
        let point = self.mapper.fix_to_plane(fix);
        if !point.is_finite() {
            warn!(?fix, "ignoring fix that maps off any finite plane point");
            return None;
        }
        self.location = LocationState::Located(point);
        info!(
            latitude = fix.latitude,
            longitude = fix.longitude,
            y = point.y,
            x = point.x,
            within_plane = point.is_within_plane(),
            "location recorded"
        );
        Some(point)
    }

    pub fn place_marker(&mut self, kind: MarkerKind, position: PlanePoint) -> Marker {
        self.store.append(kind, position)
    }

    /// Drops a snow gun at the current location. `None` while no fix is known.
    pub fn place_snow_gun_at_fix(&mut self) -> Option<Marker> {
        let position = self.location.point()?;
        let marker = self.place_marker(MarkerKind::SnowGun, position);
        info!(id = %marker.id(), "snow gun placed at current location");
        Some(marker)
    }

    pub fn scene(&self) -> MapScene {
        let markers = self
            .store
            .iter()
            .map(|marker| self.marker_view(marker))
            .collect();
        let location = self.location.point().map(|position| {
            let MarkerStyle {
                icon_url,
                icon_size,
            } = self.styles.get(MarkerKind::GpsFix).clone();
            LocationView {
                position,
                icon_url,
                icon_size,
                label: LOCATION_LABEL.to_string(),
                can_place_snow_gun: true,
            }
        });

        MapScene {
            backdrop_url: self.layout.backdrop_url.clone(),
            bounds: PLANE_BOUNDS,
            center: self.layout.center,
            zoom: self.layout.zoom,
            markers,
            location,
        }
    }

    fn marker_view(&self, marker: &Marker) -> MarkerView {
        let style = self.styles.get(marker.kind());
        MarkerView {
            id: marker.id().clone(),
            kind: marker.kind(),
            position: marker.position(),
            icon_url: style.icon_url.clone(),
            icon_size: style.icon_size,
            label: format!("{} (ID {})", marker.kind(), marker.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::CalibrationRect;
    use crate::geolocation::{ManualProvider, StaticProvider};

    fn canyon_map() -> FacilityMap {
        let mapper = CoordinateMapper::new(CalibrationRect::default()).expect("default is valid");
        let store = MarkerStore::initialize(vec![
            Marker::new("101", MarkerKind::SnowGun, PlanePoint::new(50.0, 50.0)),
            Marker::new("102", MarkerKind::Hydrant, PlanePoint::new(60.0, 60.0)),
        ])
        .expect("seed ids are unique");
        FacilityMap::new(
            mapper,
            store,
            StyleTable::default(),
            MapLayout::new("/canyon-map.jpg", PlanePoint::new(50.0, 50.0), 2),
            None,
        )
    }

    #[test]
    fn placing_without_fix_does_nothing() {
        let mut map = canyon_map();
        assert!(map.place_snow_gun_at_fix().is_none());
        assert_eq!(map.markers().len(), 2);
        assert!(map.scene().location.is_none());
    }

    #[test]
    fn recorded_fix_enables_placement() {
        let mut map = canyon_map();
        let point = map
            .record_fix(GeodeticFix::new(51.100, -113.576))
            .expect("fix is finite");
        assert_eq!(point, PlanePoint::new(0.0, 0.0));

        let placed = map.place_snow_gun_at_fix().expect("fix is known");
        assert_eq!(placed.kind(), MarkerKind::SnowGun);
        assert_eq!(placed.position(), point);
        assert_eq!(map.markers().len(), 3);
    }

    #[test]
    fn non_finite_fix_is_not_recorded() {
        let mut map = canyon_map();
        assert_eq!(map.record_fix(GeodeticFix::new(f64::NAN, -113.573)), None);
        assert_eq!(map.record_fix(GeodeticFix::new(51.0975, f64::INFINITY)), None);
        assert_eq!(map.location(), LocationState::NotRequested);

        assert!(map.place_snow_gun_at_fix().is_none());
        assert_eq!(map.markers().len(), 2);
        assert!(map.scene().location.is_none());
    }

    #[test]
    fn non_finite_fix_keeps_previous_location() {
        let mut map = canyon_map();
        let point = map
            .record_fix(GeodeticFix::new(51.095, -113.570))
            .expect("fix is finite");
        assert_eq!(map.record_fix(GeodeticFix::new(f64::NAN, f64::NAN)), None);
        assert_eq!(map.location(), LocationState::Located(point));

        let placed = map.place_snow_gun_at_fix().expect("earlier fix is kept");
        assert!(placed.position().is_finite());
        let scene = serde_json::to_string(&map.scene()).expect("scene should serialize");
        assert!(!scene.contains("null"));
    }

    #[test]
    fn scene_lists_markers_in_store_order_with_styles() {
        let map = canyon_map();
        let scene = map.scene();
        assert_eq!(scene.bounds, [[0.0, 0.0], [100.0, 100.0]]);
        let ids: Vec<&str> = scene.markers.iter().map(|view| view.id.as_str()).collect();
        assert_eq!(ids, ["101", "102"]);
        assert_eq!(scene.markers[1].label, "hydrant (ID 102)");
        assert_eq!(
            scene.markers[1].icon_url,
            "https://img.icons8.com/ios-filled/50/fire-hydrant.png"
        );
    }

    #[tokio::test]
    async fn locate_requests_only_once() {
        let mut map = canyon_map();
        let provider = ManualProvider::new();

        let unavailable = StaticProvider::unavailable();
        assert_eq!(map.locate(&unavailable).await, None);
        assert_eq!(map.location(), LocationState::Unavailable);

        assert_eq!(map.locate(&provider).await, None);
        assert_eq!(provider.pending(), 0);
    }

    #[tokio::test]
    async fn located_scene_offers_placement() {
        let mut map = canyon_map();
        let provider = StaticProvider::at(GeodeticFix::new(51.095, -113.570));
        let point = map.locate(&provider).await.expect("provider has a fix");
        assert_eq!(point, PlanePoint::new(100.0, 100.0));

        let location = map.scene().location.expect("location is known");
        assert_eq!(location.label, "You are here.");
        assert_eq!(location.icon_size, [20, 20]);
        assert!(location.can_place_snow_gun);
    }
}
