//! The planar geometry family: coordinates on a flat plane in an arbitrary reference system.

pub use family::Planar;
pub use scalar::{Coord, Geometry, GeometryKind, Ring};

mod conversion;
mod family;
mod scalar;
