//! The capability set a geometry family supplies to the EWKB engine.
//!
//! The planar ([`Planar`][crate::geometry::Planar]) and geodetic
//! ([`Geodetic`][crate::geography::Geodetic]) families share a byte-identical wire encoding. The
//! reader and writer in [`crate::io::wkb`] are written once against this trait and instantiated
//! per family.

use crate::geo_traits::CoordTrait;
use crate::io::wkb::common::WKBType;

/// Factories building each of the seven shapes, plus the accessors destructuring them again.
///
/// The `make_*` functions are used by the reader, the accessors only by the writer. An accessor
/// returns `None` when the value is not of the requested shape.
pub trait GeometryFamily {
    /// The coordinate type of this family.
    type Coord: CoordTrait + Copy + Send + Sync;

    /// The geometry value type of this family.
    type Geometry: Send + Sync;

    /// Build a coordinate from its two wire components.
    fn make_coord(x: f64, y: f64) -> Self::Coord;

    fn make_point(x: f64, y: f64) -> Self::Geometry;

    fn make_line_string(points: Vec<Self::Coord>) -> Self::Geometry;

    fn make_polygon(rings: Vec<Vec<Self::Coord>>) -> Self::Geometry;

    fn make_multi_point(points: Vec<Self::Coord>) -> Self::Geometry;

    fn make_multi_line_string(lines: Vec<Vec<Self::Coord>>) -> Self::Geometry;

    fn make_multi_polygon(polygons: Vec<Vec<Vec<Self::Coord>>>) -> Self::Geometry;

    fn make_collection(members: Vec<Self::Geometry>) -> Self::Geometry;

    /// Attach a spatial reference identifier to a freshly built value.
    fn with_srid(geom: Self::Geometry, srid: u32) -> Self::Geometry;

    /// The spatial reference identifier of this value, 0 when unspecified.
    fn srid(geom: &Self::Geometry) -> u32;

    /// The shape of this value.
    fn shape_tag(geom: &Self::Geometry) -> WKBType;

    fn point(geom: &Self::Geometry) -> Option<&Self::Coord>;

    fn line_string(geom: &Self::Geometry) -> Option<&[Self::Coord]>;

    fn polygon(geom: &Self::Geometry) -> Option<&[Vec<Self::Coord>]>;

    fn multi_point(geom: &Self::Geometry) -> Option<&[Self::Coord]>;

    fn multi_line_string(geom: &Self::Geometry) -> Option<&[Vec<Self::Coord>]>;

    fn multi_polygon(geom: &Self::Geometry) -> Option<&[Vec<Vec<Self::Coord>>]>;

    fn members(geom: &Self::Geometry) -> Option<&[Self::Geometry]>;
}
