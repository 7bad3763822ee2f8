use std::fmt;

use log::{debug, warn};
use serde::Serialize;

use scene::marker::PhotoMarker;
use scene::world::OverlayWorld;

use crate::archive::extract_kml_payload;
use crate::geotag::extract_geotag;
use crate::kml::parse_kml;

/// One file from an upload batch: the display name plus the raw bytes.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// What happened to one file of a batch. Every `Skipped*` variant is an
/// expected outcome; only `Failed` corresponds to a logged parse error,
/// and none of them stop the rest of the batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOutcome {
    Ingested,
    SkippedNoPayload,
    SkippedNoGeotag,
    SkippedEmpty,
    Failed,
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileOutcome::Ingested => "ingested",
            FileOutcome::SkippedNoPayload => "skipped (no markup entry)",
            FileOutcome::SkippedNoGeotag => "skipped (no geotag)",
            FileOutcome::SkippedEmpty => "skipped (empty)",
            FileOutcome::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// The one batch-granularity signal the pipeline surfaces to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchNotice {
    NoGeotaggedPhotos,
}

impl fmt::Display for BatchNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchNotice::NoGeotaggedPhotos => f.write_str("no geotagged photos found"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub name: String,
    pub outcome: FileOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: Vec<FileReport>,
    pub appended: usize,
    pub notice: Option<BatchNotice>,
}

impl BatchReport {
    fn push(&mut self, name: &str, outcome: FileOutcome) {
        if outcome == FileOutcome::Ingested {
            self.appended += 1;
        }
        self.files.push(FileReport {
            name: name.to_string(),
            outcome,
        });
    }
}

#[derive(Debug, Copy, Clone)]
enum MarkupTarget {
    Boundary,
    Track,
}

/// Boundary batch: archive extraction, then markup conversion, appending
/// to the boundary sequence. Files process sequentially in slice order and
/// failures never abort the batch.
pub fn ingest_boundary_batch(world: &mut OverlayWorld, files: &[UploadFile]) -> BatchReport {
    let mut report = BatchReport::default();
    for file in files {
        let outcome = ingest_boundary_file(world, file);
        report.push(&file.name, outcome);
    }
    report
}

/// Track batch: each file is read as text and converted directly.
pub fn ingest_track_batch(world: &mut OverlayWorld, files: &[UploadFile]) -> BatchReport {
    let mut report = BatchReport::default();
    for file in files {
        let text = String::from_utf8_lossy(&file.bytes);
        let outcome = ingest_markup(world, &file.name, &text, MarkupTarget::Track);
        report.push(&file.name, outcome);
    }
    report
}

/// Photo batch: geotag extraction, appending a marker per located photo.
/// A non-empty batch that yields zero markers carries the
/// `NoGeotaggedPhotos` notice.
pub fn ingest_photo_batch(world: &mut OverlayWorld, files: &[UploadFile]) -> BatchReport {
    let mut report = BatchReport::default();
    for file in files {
        let outcome = ingest_photo_file(world, file);
        report.push(&file.name, outcome);
    }
    if !files.is_empty() && report.appended == 0 {
        report.notice = Some(BatchNotice::NoGeotaggedPhotos);
    }
    report
}

fn ingest_boundary_file(world: &mut OverlayWorld, file: &UploadFile) -> FileOutcome {
    let payload = match extract_kml_payload(&file.bytes) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            debug!("{}: archive has no markup entry", file.name);
            return FileOutcome::SkippedNoPayload;
        }
        Err(e) => {
            warn!("{}: {e}", file.name);
            return FileOutcome::Failed;
        }
    };
    ingest_markup(world, &file.name, &payload, MarkupTarget::Boundary)
}

fn ingest_markup(
    world: &mut OverlayWorld,
    file_name: &str,
    payload: &str,
    target: MarkupTarget,
) -> FileOutcome {
    match parse_kml(payload) {
        Ok(collection) if collection.is_empty() => {
            debug!("{file_name}: markup contained no geometry");
            FileOutcome::SkippedEmpty
        }
        Ok(collection) => {
            match target {
                MarkupTarget::Boundary => world.push_boundary(collection),
                MarkupTarget::Track => world.push_track(collection),
            }
            FileOutcome::Ingested
        }
        Err(e) => {
            warn!("{file_name}: {e}");
            FileOutcome::Failed
        }
    }
}

fn ingest_photo_file(world: &mut OverlayWorld, file: &UploadFile) -> FileOutcome {
    let tag = match extract_geotag(&file.bytes) {
        Ok(Some(tag)) => tag,
        Ok(None) => {
            debug!("{}: no GPS metadata", file.name);
            return FileOutcome::SkippedNoGeotag;
        }
        Err(e) => {
            warn!("{}: {e}", file.name);
            return FileOutcome::SkippedNoGeotag;
        }
    };

    let image = world.acquire_image(file.bytes.clone());
    world.push_marker(PhotoMarker::new(
        tag.lat_deg,
        tag.lon_deg,
        image,
        file.name.clone(),
    ));
    FileOutcome::Ingested
}

#[cfg(test)]
mod tests {
    use super::{
        BatchNotice, FileOutcome, UploadFile, ingest_boundary_batch, ingest_photo_batch,
        ingest_track_batch,
    };
    use crate::fixtures::{gps_tiff, plain_tiff, zip_with};
    use scene::world::OverlayWorld;

    const POLYGON_KML: &str = r#"<kml><Placemark><name>Field</name><Polygon>
        <outerBoundaryIs><LinearRing><coordinates>
            120.0,14.0 122.0,14.0 122.0,16.0 120.0,16.0 120.0,14.0
        </coordinates></LinearRing></outerBoundaryIs>
    </Polygon></Placemark></kml>"#;

    const LINE_KML: &str = r#"<kml><Placemark><LineString><coordinates>
        120.0,14.0 121.0,15.0
    </coordinates></LineString></Placemark></kml>"#;

    fn boundary_upload(name: &str) -> UploadFile {
        UploadFile::new(name, zip_with(&[("doc.kml", POLYGON_KML)]))
    }

    #[test]
    fn boundary_archive_appends_one_collection() {
        let mut world = OverlayWorld::new();
        let report = ingest_boundary_batch(&mut world, &[boundary_upload("field.kmz")]);

        assert_eq!(report.appended, 1);
        assert_eq!(report.files[0].outcome, FileOutcome::Ingested);
        assert_eq!(world.boundaries().len(), 1);
        assert!(world.tracks().is_empty());

        // Rectangle at known coordinates, so the refit center is its middle.
        let center = world.viewport().center;
        assert!((center.lon_deg - 121.0).abs() < 1e-9);
        assert!((center.lat_deg - 15.0).abs() < 1e-9);
    }

    #[test]
    fn archive_without_markup_appends_nothing() {
        let mut world = OverlayWorld::new();
        let upload = UploadFile::new("empty.kmz", zip_with(&[("readme.txt", "hi")]));
        let report = ingest_boundary_batch(&mut world, &[upload]);

        assert_eq!(report.appended, 0);
        assert_eq!(report.files[0].outcome, FileOutcome::SkippedNoPayload);
        assert!(world.boundaries().is_empty());
    }

    #[test]
    fn one_bad_file_does_not_stop_the_batch() {
        let mut world = OverlayWorld::new();
        let bad = UploadFile::new("broken.kmz", b"not a zip".to_vec());
        let report = ingest_boundary_batch(&mut world, &[bad, boundary_upload("field.kmz")]);

        assert_eq!(report.files[0].outcome, FileOutcome::Failed);
        assert_eq!(report.files[1].outcome, FileOutcome::Ingested);
        assert_eq!(world.boundaries().len(), 1);
    }

    #[test]
    fn track_files_append_to_the_track_sequence_only() {
        let mut world = OverlayWorld::new();
        let upload = UploadFile::new("run.kml", LINE_KML.as_bytes().to_vec());
        let report = ingest_track_batch(&mut world, &[upload]);

        assert_eq!(report.appended, 1);
        assert!(world.boundaries().is_empty());
        assert_eq!(world.tracks().len(), 1);
    }

    #[test]
    fn second_batch_appends_rather_than_replaces() {
        let mut world = OverlayWorld::new();
        ingest_boundary_batch(&mut world, &[boundary_upload("a.kmz")]);
        ingest_boundary_batch(&mut world, &[boundary_upload("b.kmz")]);
        assert_eq!(world.boundaries().len(), 2);
    }

    #[test]
    fn geotagged_photo_becomes_a_marker_with_its_file_name() {
        let mut world = OverlayWorld::new();
        let photo = UploadFile::new(
            "beach.jpg",
            gps_tiff(b'N', [(14, 1), (30, 1), (0, 1)], b'E', [(121, 1), (0, 1), (0, 1)]),
        );
        let report = ingest_photo_batch(&mut world, &[photo]);

        assert_eq!(report.appended, 1);
        assert!(report.notice.is_none());
        let marker = &world.markers()[0];
        assert_eq!(marker.name, "beach.jpg");
        assert!((marker.lat_deg - 14.5).abs() < 1e-9);
        assert!((marker.lon_deg - 121.0).abs() < 1e-9);
        assert!(world.image(marker.image).is_some());
    }

    #[test]
    fn mixed_photo_batch_keeps_only_located_photos_without_notice() {
        let mut world = OverlayWorld::new();
        let batch = [
            UploadFile::new(
                "located.jpg",
                gps_tiff(b'N', [(14, 1), (30, 1), (0, 1)], b'E', [(121, 1), (0, 1), (0, 1)]),
            ),
            UploadFile::new("plain-1.jpg", plain_tiff()),
            UploadFile::new("plain-2.jpg", plain_tiff()),
        ];
        let report = ingest_photo_batch(&mut world, &batch);

        assert_eq!(world.markers().len(), 1);
        assert!(report.notice.is_none());
        assert_eq!(report.files[1].outcome, FileOutcome::SkippedNoGeotag);
    }

    #[test]
    fn all_unlocated_batch_raises_the_notice_once() {
        let mut world = OverlayWorld::new();
        let batch = [
            UploadFile::new("plain-1.jpg", plain_tiff()),
            UploadFile::new("plain-2.jpg", plain_tiff()),
        ];
        let report = ingest_photo_batch(&mut world, &batch);

        assert!(world.markers().is_empty());
        assert_eq!(report.notice, Some(BatchNotice::NoGeotaggedPhotos));
    }

    #[test]
    fn empty_photo_batch_raises_no_notice() {
        let mut world = OverlayWorld::new();
        let report = ingest_photo_batch(&mut world, &[]);
        assert!(report.notice.is_none());
    }

    #[test]
    fn clear_after_ingest_restores_the_default_center() {
        let mut world = OverlayWorld::new();
        ingest_boundary_batch(&mut world, &[boundary_upload("field.kmz")]);
        world.clear();
        assert_eq!(world.viewport().center, scene::viewport::DEFAULT_CENTER);
        assert_eq!(world.live_images(), 0);
    }
}
