//! A streaming codec for PostGIS geometry values in Extended Well-Known Binary (EWKB) form.
//!
//! One recursive reader and one recursive writer, in [`io::wkb`], serve two geometry families
//! with identical wire encodings: planar [`geometry::Geometry`] values and geodetic
//! [`geography::Geography`] values. Both run over buffered channels that may refill or flush in
//! small pieces, either blocking the calling thread or suspending the calling task.
//!
//! ```
//! use geoarrow_ewkb::geometry::{Geometry, Planar};
//! use geoarrow_ewkb::io::wkb::{from_ewkb, to_ewkb};
//!
//! let point = Geometry::point(1.5, -2.25).with_srid(4326);
//! let buf = to_ewkb::<Planar>(&point).unwrap();
//! let decoded = from_ewkb::<Planar>(&buf).unwrap();
//! assert_eq!(decoded, point);
//! assert_eq!(decoded.srid(), 4326);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use family::GeometryFamily;

pub mod error;
pub mod family;
pub mod geo_traits;
pub mod geography;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
