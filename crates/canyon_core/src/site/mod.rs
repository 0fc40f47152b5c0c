//! Site configuration: everything fixed at process start.
//!
//! A site is described by a JSON document. Every section is optional and falls
//! back to the built-in canyon site, so `{}` is a complete configuration.
//! [`SiteConfig::build`] validates the document once and produces the
//! [`FacilityMap`] used for the rest of the process.

mod defaults;
mod error;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calibration::CalibrationRect;
use crate::map::{FacilityMap, MapLayout};
use crate::mapper::CoordinateMapper;
use crate::marker::{Marker, MarkerKind};
use crate::plane::PlanePoint;
use crate::store::{MarkerStore, DEFAULT_ID_PREFIX};
use crate::style::{MarkerStyle, StyleTable};

pub use error::ConfigError;

/// Deepest zoom level the drawing layer is asked to support.
pub const MAX_ZOOM: u8 = 18;

/// Initial camera over the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub center: PlanePoint,
    pub zoom: u8,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: defaults::DEFAULT_CENTER,
            zoom: defaults::DEFAULT_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub name: String,
    pub calibration: CalibrationRect,
    pub backdrop_url: String,
    pub view: ViewConfig,
    /// Per-kind icon overrides; kinds not listed keep the built-in icon.
    pub styles: BTreeMap<MarkerKind, MarkerStyle>,
    pub seed_markers: Vec<Marker>,
    /// Prefix for ids of markers placed at runtime.
    pub id_prefix: String,
    /// Give up on the position request after this long. Absent means wait indefinitely.
    pub locate_timeout_ms: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: defaults::DEFAULT_SITE_NAME.to_string(),
            calibration: CalibrationRect::default(),
            backdrop_url: defaults::DEFAULT_BACKDROP_URL.to_string(),
            view: ViewConfig::default(),
            styles: BTreeMap::new(),
            seed_markers: defaults::canyon_seed_markers(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            locate_timeout_ms: None,
        }
    }
}

impl SiteConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        info!(path = %path.display(), site = %config.name, "loaded site config");
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn locate_timeout(&self) -> Option<Duration> {
        self.locate_timeout_ms.map(Duration::from_millis)
    }

    /// Validates the whole document and assembles the map session.
    pub fn build(&self) -> Result<FacilityMap, ConfigError> {
        let mapper = CoordinateMapper::new(self.calibration)?;

        if self.id_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyIdPrefix);
        }
        if self.view.zoom > MAX_ZOOM {
            return Err(ConfigError::InvalidZoom {
                zoom: self.view.zoom,
                max: MAX_ZOOM,
            });
        }
        let center = self.view.center;
        if !center.is_within_plane() {
            return Err(ConfigError::CenterOutOfBounds {
                y: center.y,
                x: center.x,
            });
        }

        let styles = StyleTable::with_overrides(&self.styles);
        if let Some(kind) = styles.first_without_area() {
            return Err(ConfigError::InvalidIconSize { kind });
        }

        if let Some(marker) = self
            .seed_markers
            .iter()
            .find(|marker| !marker.position().is_within_plane())
        {
            let PlanePoint { y, x } = marker.position();
            return Err(ConfigError::SeedOutOfBounds {
                id: marker.id().clone(),
                y,
                x,
            });
        }
        let store = MarkerStore::with_id_prefix(self.seed_markers.clone(), self.id_prefix.clone())?;

        info!(
            site = %self.name,
            seed_markers = store.len(),
            lat_min = self.calibration.lat_min,
            lat_max = self.calibration.lat_max,
            lng_min = self.calibration.lng_min,
            lng_max = self.calibration.lng_max,
            "site ready"
        );

        let layout = MapLayout::new(self.backdrop_url.clone(), center, self.view.zoom);
        Ok(FacilityMap::new(
            mapper,
            store,
            styles,
            layout,
            self.locate_timeout(),
        ))
    }
}
