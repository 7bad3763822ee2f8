use foundation::bounds::GeoBounds;

use crate::events::{ChangeLog, WorldChange};
use crate::geometry::GeometryCollection;
use crate::images::{ImageArena, ImageId};
use crate::marker::PhotoMarker;
use crate::viewport::Viewport;

/// Owner of all loaded overlay state.
///
/// The three sequences are append-only between clears; insertion order is
/// the render order (boundaries under tracks under markers). Every mutation
/// records a change event and refits the viewport, so the derived center is
/// never stale.
#[derive(Debug, Default)]
pub struct OverlayWorld {
    boundaries: Vec<GeometryCollection>,
    tracks: Vec<GeometryCollection>,
    markers: Vec<PhotoMarker>,
    images: ImageArena,
    viewport: Viewport,
    changes: ChangeLog,
}

impl OverlayWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_boundary(&mut self, collection: GeometryCollection) {
        self.boundaries.push(collection);
        self.changes.record(WorldChange::BoundaryAppended);
        self.refit_viewport();
    }

    pub fn push_track(&mut self, collection: GeometryCollection) {
        self.tracks.push(collection);
        self.changes.record(WorldChange::TrackAppended);
        self.refit_viewport();
    }

    pub fn push_marker(&mut self, marker: PhotoMarker) {
        self.markers.push(marker);
        self.changes.record(WorldChange::MarkerAppended);
        self.refit_viewport();
    }

    pub fn acquire_image(&mut self, bytes: Vec<u8>) -> ImageId {
        self.images.acquire(bytes)
    }

    pub fn image(&self, id: ImageId) -> Option<&[u8]> {
        self.images.get(id)
    }

    pub fn live_images(&self) -> usize {
        self.images.live_count()
    }

    pub fn boundaries(&self) -> &[GeometryCollection] {
        &self.boundaries
    }

    pub fn tracks(&self) -> &[GeometryCollection] {
        &self.tracks
    }

    pub fn markers(&self) -> &[PhotoMarker] {
        &self.markers
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn drain_changes(&mut self) -> Vec<WorldChange> {
        self.changes.drain()
    }

    /// Union of everything loaded: boundary collections, then track
    /// collections, then marker coordinates.
    pub fn data_bounds(&self) -> GeoBounds {
        let mut bounds = GeoBounds::EMPTY;
        for collection in &self.boundaries {
            bounds.union(collection.bounds());
        }
        for collection in &self.tracks {
            bounds.union(collection.bounds());
        }
        for marker in &self.markers {
            bounds.extend(marker.position());
        }
        bounds
    }

    /// Empties all three sequences, releases every image buffer, and puts
    /// the viewport back at the default center.
    pub fn clear(&mut self) {
        self.boundaries.clear();
        self.tracks.clear();
        self.markers.clear();
        self.images.release_all();
        self.viewport = Viewport::home();
        self.changes.record(WorldChange::Cleared);
    }

    fn refit_viewport(&mut self) {
        let bounds = self.data_bounds();
        self.viewport.refit(bounds);
    }
}
