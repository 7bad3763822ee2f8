pub mod events;
pub mod geometry;
pub mod images;
pub mod marker;
pub mod viewport;
pub mod world;

pub use world::*;
