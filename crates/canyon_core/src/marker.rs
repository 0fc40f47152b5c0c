use std::fmt;

use serde::{Deserialize, Serialize};

use crate::plane::PlanePoint;

/// Infrastructure categories a marker can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    SnowGun,
    Hydrant,
    Valve,
    Outlet,
    GpsFix,
}

impl MarkerKind {
    pub const COUNT: usize = 5;

    pub const ALL: [MarkerKind; MarkerKind::COUNT] = [
        MarkerKind::SnowGun,
        MarkerKind::Hydrant,
        MarkerKind::Valve,
        MarkerKind::Outlet,
        MarkerKind::GpsFix,
    ];

    /// Dense index into per-kind tables.
    pub const fn index(self) -> usize {
        match self {
            MarkerKind::SnowGun => 0,
            MarkerKind::Hydrant => 1,
            MarkerKind::Valve => 2,
            MarkerKind::Outlet => 3,
            MarkerKind::GpsFix => 4,
        }
    }

    /// Wire name, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            MarkerKind::SnowGun => "snowGun",
            MarkerKind::Hydrant => "hydrant",
            MarkerKind::Valve => "valve",
            MarkerKind::Outlet => "outlet",
            MarkerKind::GpsFix => "gpsFix",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(String);

impl MarkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MarkerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MarkerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A placed marker. Immutable once created; read through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Marker {
    id: MarkerId,
    kind: MarkerKind,
    position: PlanePoint,
}

impl Marker {
    pub fn new(id: impl Into<MarkerId>, kind: MarkerKind, position: PlanePoint) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
        }
    }

    pub fn id(&self) -> &MarkerId {
        &self.id
    }

    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    pub fn position(&self) -> PlanePoint {
        self.position
    }
}
