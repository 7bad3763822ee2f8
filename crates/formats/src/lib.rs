pub mod archive;
pub mod geojson;
pub mod geotag;
pub mod ingest;
pub mod kml;

#[cfg(test)]
pub(crate) mod fixtures;

pub use archive::*;
pub use geojson::*;
pub use geotag::*;
pub use ingest::*;
pub use kml::*;
