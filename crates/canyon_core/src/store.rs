//! Marker store: ordered, append-only, ids unique.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::marker::{Marker, MarkerId, MarkerKind};
use crate::plane::PlanePoint;

/// Prefix for ids generated by [`MarkerStore::append`].
pub const DEFAULT_ID_PREFIX: &str = "gps";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate marker id `{0}`")]
pub struct DuplicateIdError(pub MarkerId);

/// Owns every marker shown on the map.
///
/// Insertion order is kept so enumeration is deterministic. Generated ids come
/// from an in-process counter (`<prefix>-1`, `<prefix>-2`, ...); a candidate that
/// is already taken, for example by a seed marker, is skipped.
#[derive(Debug, Clone)]
pub struct MarkerStore {
    markers: Vec<Marker>,
    ids: HashSet<MarkerId>,
    id_prefix: String,
    next_sequence: u64,
}

impl MarkerStore {
    pub fn initialize(seed: impl IntoIterator<Item = Marker>) -> Result<Self, DuplicateIdError> {
        Self::with_id_prefix(seed, DEFAULT_ID_PREFIX)
    }

    pub fn with_id_prefix(
        seed: impl IntoIterator<Item = Marker>,
        id_prefix: impl Into<String>,
    ) -> Result<Self, DuplicateIdError> {
        let mut markers = Vec::new();
        let mut ids = HashSet::new();
        for marker in seed {
            if !ids.insert(marker.id().clone()) {
                return Err(DuplicateIdError(marker.id().clone()));
            }
            markers.push(marker);
        }
        Ok(Self {
            markers,
            ids,
            id_prefix: id_prefix.into(),
            next_sequence: 0,
        })
    }

    /// Adds a marker with a freshly generated id and returns it.
    pub fn append(&mut self, kind: MarkerKind, position: PlanePoint) -> Marker {
        let id = self.next_free_id();
        let marker = Marker::new(id.clone(), kind, position);
        self.ids.insert(id);
        self.markers.push(marker.clone());
        debug!(
            id = %marker.id(),
            kind = %kind,
            y = position.y,
            x = position.x,
            "marker appended"
        );
        marker
    }

    /// Snapshot of every marker in insertion order. Later appends do not affect it.
    pub fn all(&self) -> Vec<Marker> {
        self.markers.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn get(&self, id: &MarkerId) -> Option<&Marker> {
        if !self.ids.contains(id) {
            return None;
        }
        self.markers.iter().find(|marker| marker.id() == id)
    }

    pub fn contains(&self, id: &MarkerId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    fn next_free_id(&mut self) -> MarkerId {
        loop {
            self.next_sequence += 1;
            let candidate = MarkerId::new(format!("{}-{}", self.id_prefix, self.next_sequence));
            if !self.ids.contains(&candidate) {
                return candidate;
            }
        }
    }
}
