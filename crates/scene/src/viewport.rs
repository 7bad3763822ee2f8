use foundation::bounds::GeoBounds;
use foundation::geo::GeoPoint;

/// Where the map looks when nothing is loaded.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lon_deg: 121.774,
    lat_deg: 12.8797,
};

/// Derived display state: only the center is stored; the fitted bounds are
/// recomputed from the overlay store whenever it changes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub center: GeoPoint,
}

impl Viewport {
    pub fn home() -> Self {
        Self {
            center: DEFAULT_CENTER,
        }
    }

    /// Re-centers on the data bounds. An empty accumulator leaves the
    /// viewport where it was.
    pub fn refit(&mut self, bounds: GeoBounds) {
        if let Some(center) = bounds.center() {
            self.center = center;
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::home()
    }
}
