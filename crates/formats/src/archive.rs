use std::fmt;
use std::io::{Cursor, Read};

/// Errors from opening a boundary container or decoding its payload.
/// Absence of a markup entry is not an error; see [`extract_kml_payload`].
#[derive(Debug)]
pub enum ArchiveError {
    Zip(zip::result::ZipError),
    Encoding {
        entry: String,
        source: std::io::Error,
    },
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::Zip(err) => write!(f, "archive error: {err}"),
            ArchiveError::Encoding { entry, source } => {
                write!(f, "failed to decode archive entry {entry}: {source}")
            }
        }
    }
}

impl std::error::Error for ArchiveError {}

/// Pulls the markup payload out of a compressed boundary container.
///
/// Scans the entry list for the first name ending in `.kml` (case
/// insensitive) and decodes it as text. `Ok(None)` means the archive is
/// readable but carries no markup entry, which callers treat as an
/// expected skip rather than a failure.
pub fn extract_kml_payload(bytes: &[u8]) -> Result<Option<String>, ArchiveError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(ArchiveError::Zip)?;

    let Some(entry_name) = archive
        .file_names()
        .find(|name| name.to_ascii_lowercase().ends_with(".kml"))
        .map(str::to_owned)
    else {
        return Ok(None);
    };

    let mut entry = archive.by_name(&entry_name).map_err(ArchiveError::Zip)?;
    let mut text = String::new();
    entry
        .read_to_string(&mut text)
        .map_err(|e| ArchiveError::Encoding {
            entry: entry_name,
            source: e,
        })?;
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::{ArchiveError, extract_kml_payload};
    use crate::fixtures::zip_with;

    #[test]
    fn finds_the_markup_entry() {
        let bytes = zip_with(&[("doc.kml", "<kml/>"), ("styles.txt", "ignored")]);
        let payload = extract_kml_payload(&bytes).expect("extract");
        assert_eq!(payload.as_deref(), Some("<kml/>"));
    }

    #[test]
    fn matches_extension_case_insensitively() {
        let bytes = zip_with(&[("REGION.KML", "<kml/>")]);
        let payload = extract_kml_payload(&bytes).expect("extract");
        assert_eq!(payload.as_deref(), Some("<kml/>"));
    }

    #[test]
    fn missing_entry_is_absence_not_error() {
        let bytes = zip_with(&[("readme.txt", "no markup here")]);
        let payload = extract_kml_payload(&bytes).expect("extract");
        assert!(payload.is_none());
    }

    #[test]
    fn corrupt_container_is_an_error() {
        let err = extract_kml_payload(b"definitely not a zip").expect_err("corrupt");
        assert!(matches!(err, ArchiveError::Zip(_)));
    }
}
