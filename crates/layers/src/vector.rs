use foundation::geo::GeoPoint;
use scene::geometry::Geometry;
use scene::world::OverlayWorld;

use crate::layer::{Layer, LayerId, LayerKind};
use crate::symbology::LayerStyle;

/// Which overlay sequence a vector layer draws from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Boundary,
    Track,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorLayer {
    id: LayerId,
    kind: OverlayKind,
    pub style: LayerStyle,
}

/// Flat, render-ready view of one overlay sequence, in insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct VectorSnapshot {
    pub points: Vec<GeoPoint>,
    pub lines: Vec<Vec<GeoPoint>>,
    /// Rings per polygon in lon/lat, outer ring first.
    pub polygons: Vec<Vec<Vec<GeoPoint>>>,
}

impl VectorLayer {
    pub fn boundaries(id: u64) -> Self {
        Self {
            id: LayerId(id),
            kind: OverlayKind::Boundary,
            style: LayerStyle::boundary(),
        }
    }

    pub fn tracks(id: u64) -> Self {
        Self {
            id: LayerId(id),
            kind: OverlayKind::Track,
            style: LayerStyle::track(),
        }
    }

    pub fn overlay_kind(&self) -> OverlayKind {
        self.kind
    }

    pub fn extract(&self, world: &OverlayWorld) -> VectorSnapshot {
        let collections = match self.kind {
            OverlayKind::Boundary => world.boundaries(),
            OverlayKind::Track => world.tracks(),
        };

        let mut out = VectorSnapshot::default();
        for collection in collections {
            for feature in &collection.features {
                match &feature.geometry {
                    Geometry::Point(p) => out.points.push(*p),
                    Geometry::Line(points) => out.lines.push(points.clone()),
                    Geometry::Polygon(rings) => out.polygons.push(rings.clone()),
                }
            }
        }
        out
    }
}

impl Layer for VectorLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn kind(&self) -> LayerKind {
        match self.kind {
            OverlayKind::Boundary => LayerKind::Boundary,
            OverlayKind::Track => LayerKind::Track,
        }
    }
}
