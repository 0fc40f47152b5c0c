//! Core of the canyon facility map: GPS-to-plane conversion, the marker store,
//! and the session object that turns both into a renderable scene.

pub mod calibration;
pub mod geolocation;
pub mod map;
pub mod mapper;
pub mod marker;
pub mod plane;
pub mod site;
pub mod store;
pub mod style;

pub use calibration::{Axis, CalibrationError, CalibrationRect};
pub use geolocation::{
    request_current_position, GeolocationProvider, ManualProvider, PositionReply, StaticProvider,
};
pub use map::{FacilityMap, LocationState, LocationView, MapLayout, MapScene, MarkerView};
pub use mapper::{to_plane, CoordinateMapper};
pub use marker::{Marker, MarkerId, MarkerKind};
pub use plane::{GeodeticFix, PlanePoint, PLANE_EXTENT};
pub use site::{ConfigError, SiteConfig};
pub use store::{DuplicateIdError, MarkerStore};
pub use style::{MarkerStyle, StyleTable};
