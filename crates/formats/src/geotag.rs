use std::fmt;
use std::io::Cursor;

use exif::{In, Tag, Value};
use log::debug;

/// Coordinates lifted from a photo's embedded GPS block, in decimal
/// degrees with the usual sign convention (south and west negative).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoTag {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

#[derive(Debug)]
pub enum GeotagError {
    Exif(exif::Error),
}

impl fmt::Display for GeotagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeotagError::Exif(err) => write!(f, "metadata read error: {err}"),
        }
    }
}

impl std::error::Error for GeotagError {}

/// Reads GPS coordinates from image bytes.
///
/// `Ok(None)` means the image carries no usable GPS block, the normal case
/// for screenshots and non-geotagged cameras. `Err` means the bytes hold
/// no readable metadata container at all; callers treat both as a skip.
pub fn extract_geotag(bytes: &[u8]) -> Result<Option<GeoTag>, GeotagError> {
    let mut cursor = Cursor::new(bytes);
    let exif = exif::Reader::new()
        .read_from_container(&mut cursor)
        .map_err(GeotagError::Exif)?;

    let Some(lat_deg) = axis_degrees(&exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, "S") else {
        return Ok(None);
    };
    let Some(lon_deg) = axis_degrees(&exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, "W") else {
        return Ok(None);
    };

    if !lat_deg.is_finite()
        || !lon_deg.is_finite()
        || lat_deg.abs() > 90.0
        || lon_deg.abs() > 180.0
    {
        debug!("GPS coordinates out of range: lat={lat_deg} lon={lon_deg}");
        return Ok(None);
    }

    Ok(Some(GeoTag { lat_deg, lon_deg }))
}

/// One axis: the degree/minute/second value tag plus its hemisphere ref.
/// Returns `None` when either half is missing or malformed.
fn axis_degrees(exif: &exif::Exif, value_tag: Tag, ref_tag: Tag, negative_ref: &str) -> Option<f64> {
    let hemisphere = exif
        .get_field(ref_tag, In::PRIMARY)?
        .display_value()
        .to_string();
    let field = exif.get_field(value_tag, In::PRIMARY)?;

    let magnitude = match &field.value {
        Value::Rational(parts) => dms_to_degrees(parts.iter().map(|r| r.to_f64()))?,
        Value::SRational(parts) => dms_to_degrees(parts.iter().map(|r| r.to_f64()))?,
        _ => return None,
    };

    let sign = if hemisphere.trim() == negative_ref {
        -1.0
    } else {
        1.0
    };
    Some(sign * magnitude)
}

/// `deg + min/60 + sec/3600`; some cameras store decimal degrees as a
/// single rational, so minutes and seconds default to zero.
fn dms_to_degrees(mut parts: impl Iterator<Item = f64>) -> Option<f64> {
    let deg = parts.next()?;
    let min = parts.next().unwrap_or(0.0);
    let sec = parts.next().unwrap_or(0.0);
    Some(deg + min / 60.0 + sec / 3600.0)
}
