use foundation::geo::GeoPoint;
use scene::geometry::{Feature, Geometry, GeometryCollection};
use scene::world::OverlayWorld;
use serde_json::{Map, Value};

/// Emits one geometry collection as a GeoJSON `FeatureCollection`.
pub fn collection_to_geojson(collection: &GeometryCollection) -> Value {
    feature_collection(
        collection
            .features
            .iter()
            .map(|feature| feature_to_value(feature, None))
            .collect(),
    )
}

/// Emits everything loaded into a world as a single `FeatureCollection`;
/// each feature carries a `class` property (`boundary`, `track`, `photo`)
/// so downstream tooling can split the overlay classes back apart.
pub fn world_to_geojson(world: &OverlayWorld) -> Value {
    let mut features: Vec<Value> = Vec::new();

    for collection in world.boundaries() {
        for feature in &collection.features {
            features.push(feature_to_value(feature, Some("boundary")));
        }
    }
    for collection in world.tracks() {
        for feature in &collection.features {
            features.push(feature_to_value(feature, Some("track")));
        }
    }
    for marker in world.markers() {
        let mut properties = Map::new();
        properties.insert("class".to_string(), Value::String("photo".to_string()));
        properties.insert("name".to_string(), Value::String(marker.name.clone()));

        let mut obj = Map::new();
        obj.insert("type".to_string(), Value::String("Feature".to_string()));
        obj.insert("properties".to_string(), Value::Object(properties));
        obj.insert(
            "geometry".to_string(),
            geometry_to_value(&Geometry::Point(marker.position())),
        );
        features.push(Value::Object(obj));
    }

    feature_collection(features)
}

pub fn world_to_geojson_string_pretty(world: &OverlayWorld) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&world_to_geojson(world))
}

fn feature_collection(features: Vec<Value>) -> Value {
    let mut root = Map::new();
    root.insert(
        "type".to_string(),
        Value::String("FeatureCollection".to_string()),
    );
    root.insert("features".to_string(), Value::Array(features));
    Value::Object(root)
}

fn feature_to_value(feature: &Feature, class: Option<&str>) -> Value {
    let mut properties = Map::new();
    if let Some(class) = class {
        properties.insert("class".to_string(), Value::String(class.to_string()));
    }
    if let Some(name) = &feature.name {
        properties.insert("name".to_string(), Value::String(name.clone()));
    }

    let mut obj = Map::new();
    obj.insert("type".to_string(), Value::String("Feature".to_string()));
    obj.insert("properties".to_string(), Value::Object(properties));
    obj.insert(
        "geometry".to_string(),
        geometry_to_value(&feature.geometry),
    );
    Value::Object(obj)
}

fn geometry_to_value(geometry: &Geometry) -> Value {
    let mut obj = Map::new();
    match geometry {
        Geometry::Point(p) => {
            obj.insert("type".to_string(), Value::String("Point".to_string()));
            obj.insert("coordinates".to_string(), point_coords(p));
        }
        Geometry::Line(points) => {
            obj.insert("type".to_string(), Value::String("LineString".to_string()));
            obj.insert(
                "coordinates".to_string(),
                Value::Array(points.iter().map(point_coords).collect()),
            );
        }
        Geometry::Polygon(rings) => {
            obj.insert("type".to_string(), Value::String("Polygon".to_string()));
            let coords = rings
                .iter()
                .map(|ring| Value::Array(ring.iter().map(point_coords).collect()))
                .collect();
            obj.insert("coordinates".to_string(), Value::Array(coords));
        }
    }
    Value::Object(obj)
}

fn point_coords(p: &GeoPoint) -> Value {
    Value::Array(vec![Value::from(p.lon_deg), Value::from(p.lat_deg)])
}
