pub mod bounds;
pub mod geo;

// Small, well-tested geographic primitives only; stateful code lives in the
// crates above this one.
pub use bounds::*;
pub use geo::*;
