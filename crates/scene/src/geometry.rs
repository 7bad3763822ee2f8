use foundation::bounds::GeoBounds;
use foundation::geo::GeoPoint;

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(GeoPoint),
    Line(Vec<GeoPoint>),
    /// Rings in lon/lat, outer ring first.
    Polygon(Vec<Vec<GeoPoint>>),
}

impl Geometry {
    pub fn extend_bounds(&self, bounds: &mut GeoBounds) {
        match self {
            Geometry::Point(p) => bounds.extend(*p),
            Geometry::Line(points) => {
                for p in points {
                    bounds.extend(*p);
                }
            }
            Geometry::Polygon(rings) => {
                for ring in rings {
                    for p in ring {
                        bounds.extend(*p);
                    }
                }
            }
        }
    }
}

/// One named shape out of a markup document.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name: Option<String>,
    pub geometry: Geometry,
}

impl Feature {
    pub fn new(name: Option<String>, geometry: Geometry) -> Self {
        Self { name, geometry }
    }
}

/// The unit appended per ingested markup file: an ordered feature list.
/// Immutable once handed to the overlay store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryCollection {
    pub features: Vec<Feature>,
}

impl GeometryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn bounds(&self) -> GeoBounds {
        let mut bounds = GeoBounds::EMPTY;
        for feature in &self.features {
            feature.geometry.extend_bounds(&mut bounds);
        }
        bounds
    }
}
