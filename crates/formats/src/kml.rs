use std::fmt;

use foundation::geo::GeoPoint;
use quick_xml::Reader;
use quick_xml::events::Event;
use scene::geometry::{Feature, Geometry, GeometryCollection};

#[derive(Debug)]
pub enum KmlError {
    Xml(quick_xml::Error),
    BadCoordinateTuple { tuple: String },
}

impl fmt::Display for KmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmlError::Xml(err) => write!(f, "markup parse error: {err}"),
            KmlError::BadCoordinateTuple { tuple } => {
                write!(f, "bad coordinate tuple: {tuple:?}")
            }
        }
    }
}

impl std::error::Error for KmlError {}

/// Streaming conversion of a KML document into a geometry collection.
///
/// Placemark names become feature names; each `MultiGeometry` child
/// produces its own feature. Polygon rings come out outer-first. The
/// optional altitude component of a coordinate tuple is dropped. A
/// well-formed document with no placemarks yields an empty collection.
pub fn parse_kml(text: &str) -> Result<GeometryCollection, KmlError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut collection = GeometryCollection::new();
    let mut stack: Vec<String> = Vec::new();

    let mut in_placemark = false;
    let mut placemark_name: Option<String> = None;
    let mut placemark_geoms: Vec<Geometry> = Vec::new();

    let mut text_buf = String::new();
    let mut capture_text = false;

    let mut pending_coords: Option<Vec<GeoPoint>> = None;
    let mut in_polygon = false;
    // (is_outer, ring) pairs in document order; reordered outer-first at
    // Polygon end.
    let mut polygon_rings: Vec<(bool, Vec<GeoPoint>)> = Vec::new();

    loop {
        match reader.read_event().map_err(KmlError::Xml)? {
            Event::Start(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                match name.as_str() {
                    "Placemark" => {
                        in_placemark = true;
                        placemark_name = None;
                        placemark_geoms.clear();
                    }
                    "Polygon" => {
                        in_polygon = true;
                        polygon_rings.clear();
                    }
                    // A fresh geometry element must not inherit coordinates
                    // left over from a malformed sibling.
                    "Point" | "LineString" | "LinearRing" => {
                        pending_coords = None;
                    }
                    "name" if stack.last().map(String::as_str) == Some("Placemark") => {
                        text_buf.clear();
                        capture_text = true;
                    }
                    "coordinates" => {
                        text_buf.clear();
                        capture_text = true;
                    }
                    _ => {}
                }
                stack.push(name);
            }
            Event::End(e) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                stack.pop();
                match name.as_str() {
                    "coordinates" => {
                        pending_coords = Some(parse_coordinates(&text_buf)?);
                        capture_text = false;
                    }
                    "name" => {
                        if capture_text && in_placemark && placemark_name.is_none() {
                            placemark_name = Some(text_buf.trim().to_string());
                        }
                        capture_text = false;
                    }
                    "Point" => {
                        if let Some(points) = pending_coords.take()
                            && let Some(first) = points.first()
                        {
                            placemark_geoms.push(Geometry::Point(*first));
                        }
                    }
                    "LineString" => {
                        if let Some(points) = pending_coords.take()
                            && !points.is_empty()
                        {
                            placemark_geoms.push(Geometry::Line(points));
                        }
                    }
                    "LinearRing" => {
                        if let Some(points) = pending_coords.take()
                            && in_polygon
                            && !points.is_empty()
                        {
                            let outer =
                                stack.last().map(String::as_str) == Some("outerBoundaryIs");
                            polygon_rings.push((outer, points));
                        }
                    }
                    "Polygon" => {
                        in_polygon = false;
                        let mut rings: Vec<Vec<GeoPoint>> = Vec::new();
                        for (outer, ring) in polygon_rings.drain(..) {
                            if outer {
                                rings.insert(0, ring);
                            } else {
                                rings.push(ring);
                            }
                        }
                        if !rings.is_empty() {
                            placemark_geoms.push(Geometry::Polygon(rings));
                        }
                    }
                    "Placemark" => {
                        in_placemark = false;
                        for geometry in placemark_geoms.drain(..) {
                            collection.push(Feature::new(placemark_name.clone(), geometry));
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(e) => {
                if capture_text {
                    let chunk = e.unescape().map_err(KmlError::Xml)?;
                    text_buf.push_str(&chunk);
                }
            }
            Event::CData(e) => {
                if capture_text {
                    text_buf.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(collection)
}

fn parse_coordinates(text: &str) -> Result<Vec<GeoPoint>, KmlError> {
    let mut points = Vec::new();
    for tuple in text.split_whitespace() {
        let mut parts = tuple.split(',');
        let lon = parts.next().and_then(|v| v.parse::<f64>().ok());
        let lat = parts.next().and_then(|v| v.parse::<f64>().ok());
        match (lon, lat) {
            (Some(lon), Some(lat)) => points.push(GeoPoint::new(lon, lat)),
            _ => {
                return Err(KmlError::BadCoordinateTuple {
                    tuple: tuple.to_string(),
                });
            }
        }
    }
    Ok(points)
}
