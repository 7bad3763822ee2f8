pub mod basemap;
pub mod layer;
pub mod markers;
pub mod symbology;
pub mod vector;

pub use layer::*;
