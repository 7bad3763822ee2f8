use foundation::geo::GeoPoint;

use crate::images::ImageId;

/// A geotagged photo pin: coordinates, the arena-backed image, and the
/// original file name its popup shows. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoMarker {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub image: ImageId,
    pub name: String,
}

impl PhotoMarker {
    pub fn new(lat_deg: f64, lon_deg: f64, image: ImageId, name: impl Into<String>) -> Self {
        Self {
            lat_deg,
            lon_deg,
            image,
            name: name.into(),
        }
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lon_deg, self.lat_deg)
    }
}
