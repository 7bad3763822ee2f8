use scene::images::ImageId;
use scene::world::OverlayWorld;

use crate::layer::{Layer, LayerId, LayerKind};

/// Render-ready view of one photo marker. The image handle resolves
/// against the world's arena for the popup thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSnapshot {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub name: String,
    pub image: ImageId,
}

impl MarkerSnapshot {
    /// Text shown next to the image when the marker's popup opens.
    pub fn popup_label(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MarkerLayer {
    id: LayerId,
}

impl MarkerLayer {
    pub fn new(id: u64) -> Self {
        Self { id: LayerId(id) }
    }

    pub fn extract(&self, world: &OverlayWorld) -> Vec<MarkerSnapshot> {
        world
            .markers()
            .iter()
            .map(|marker| MarkerSnapshot {
                lat_deg: marker.lat_deg,
                lon_deg: marker.lon_deg,
                name: marker.name.clone(),
                image: marker.image,
            })
            .collect()
    }
}

impl Layer for MarkerLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Marker
    }
}

#[cfg(test)]
mod tests {
    use super::MarkerLayer;
    use scene::marker::PhotoMarker;
    use scene::world::OverlayWorld;

    #[test]
    fn snapshots_preserve_order_and_names() {
        let mut world = OverlayWorld::new();
        let first = world.acquire_image(vec![1]);
        world.push_marker(PhotoMarker::new(14.5, 121.0, first, "beach.jpg"));
        let second = world.acquire_image(vec![2]);
        world.push_marker(PhotoMarker::new(15.0, 120.0, second, "ridge.jpg"));

        let snapshots = MarkerLayer::new(1).extract(&world);
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].popup_label(), "beach.jpg");
        assert_eq!(snapshots[1].popup_label(), "ridge.jpg");
        assert_eq!(world.image(snapshots[1].image), Some([2u8].as_slice()));
    }
}
