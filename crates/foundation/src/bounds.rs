use crate::geo::GeoPoint;

/// Lon/lat bounding rectangle that starts empty and grows by extension.
///
/// The empty state is encoded as an inverted box (min > max), so extending
/// the empty accumulator with any point collapses it onto that point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoBounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl GeoBounds {
    pub const EMPTY: GeoBounds = GeoBounds {
        min: [f64::INFINITY, f64::INFINITY],
        max: [f64::NEG_INFINITY, f64::NEG_INFINITY],
    };

    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        GeoBounds { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1]
    }

    pub fn extend(&mut self, point: GeoPoint) {
        self.min[0] = self.min[0].min(point.lon_deg);
        self.min[1] = self.min[1].min(point.lat_deg);
        self.max[0] = self.max[0].max(point.lon_deg);
        self.max[1] = self.max[1].max(point.lat_deg);
    }

    pub fn union(&mut self, other: GeoBounds) {
        if other.is_empty() {
            return;
        }
        self.min[0] = self.min[0].min(other.min[0]);
        self.min[1] = self.min[1].min(other.min[1]);
        self.max[0] = self.max[0].max(other.max[0]);
        self.max[1] = self.max[1].max(other.max[1]);
    }

    /// Midpoint of the rectangle; `None` while the accumulator is empty.
    pub fn center(&self) -> Option<GeoPoint> {
        if self.is_empty() {
            return None;
        }
        Some(GeoPoint::new(
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ))
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        point.lon_deg >= self.min[0]
            && point.lon_deg <= self.max[0]
            && point.lat_deg >= self.min[1]
            && point.lat_deg <= self.max[1]
    }
}
