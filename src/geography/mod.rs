//! The geodetic geography family: coordinates are longitude/latitude pairs on a reference
//! ellipsoid.
//!
//! Geography values share their wire encoding with the planar family, so the same reader and
//! writer serve both; only the value types differ.

pub use family::Geodetic;
pub use scalar::{GeoCoord, Geography, GeographyKind};

mod family;
mod scalar;
