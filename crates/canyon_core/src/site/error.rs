use std::path::PathBuf;

use thiserror::Error;

use crate::calibration::CalibrationError;
use crate::marker::{MarkerId, MarkerKind};
use crate::store::DuplicateIdError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read site config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid site config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Calibration(#[from] CalibrationError),
    #[error(transparent)]
    DuplicateId(#[from] DuplicateIdError),
    #[error("seed marker `{id}` lies outside the map plane at [{y}, {x}]")]
    SeedOutOfBounds { id: MarkerId, y: f64, x: f64 },
    #[error("icon for {kind} markers has zero size")]
    InvalidIconSize { kind: MarkerKind },
    #[error("zoom {zoom} is above the maximum of {max}")]
    InvalidZoom { zoom: u8, max: u8 },
    #[error("view center [{y}, {x}] lies outside the map plane")]
    CenterOutOfBounds { y: f64, x: f64 },
    #[error("marker id prefix must not be empty")]
    EmptyIdPrefix,
}
