//! Display metadata per marker kind, resolved once when the site is built.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::marker::MarkerKind;

const ICON_BASE_URL: &str = "https://img.icons8.com/ios-filled/50";
const FACILITY_ICON_SIZE: [u32; 2] = [24, 24];
const GPS_ICON_SIZE: [u32; 2] = [20, 20];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerStyle {
    pub icon_url: String,
    /// Width and height in screen pixels.
    pub icon_size: [u32; 2],
}

impl MarkerStyle {
    pub fn new(icon_url: impl Into<String>, icon_size: [u32; 2]) -> Self {
        Self {
            icon_url: icon_url.into(),
            icon_size,
        }
    }

    /// Built-in icon for `kind`.
    pub fn default_for(kind: MarkerKind) -> Self {
        let (icon, size) = match kind {
            MarkerKind::SnowGun => ("snow.png", FACILITY_ICON_SIZE),
            MarkerKind::Hydrant => ("fire-hydrant.png", FACILITY_ICON_SIZE),
            MarkerKind::Valve => ("valve.png", FACILITY_ICON_SIZE),
            MarkerKind::Outlet => ("electrical.png", FACILITY_ICON_SIZE),
            MarkerKind::GpsFix => ("gps-device.png", GPS_ICON_SIZE),
        };
        Self::new(format!("{ICON_BASE_URL}/{icon}"), size)
    }

    pub fn has_area(&self) -> bool {
        self.icon_size[0] > 0 && self.icon_size[1] > 0
    }
}

/// One style per [`MarkerKind`], indexed by [`MarkerKind::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    entries: [MarkerStyle; MarkerKind::COUNT],
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            entries: MarkerKind::ALL.map(MarkerStyle::default_for),
        }
    }
}

impl StyleTable {
    /// Applies per-kind overrides on top of the built-in styles.
    pub fn with_overrides(overrides: &BTreeMap<MarkerKind, MarkerStyle>) -> Self {
        let mut table = Self::default();
        for (kind, style) in overrides {
            table.entries[kind.index()] = style.clone();
        }
        table
    }

    pub fn get(&self, kind: MarkerKind) -> &MarkerStyle {
        &self.entries[kind.index()]
    }

    /// First kind whose style has a zero-sized icon, if any.
    pub fn first_without_area(&self) -> Option<MarkerKind> {
        MarkerKind::ALL
            .into_iter()
            .find(|kind| !self.get(*kind).has_area())
    }
}
