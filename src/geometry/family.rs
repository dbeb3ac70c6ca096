use crate::family::GeometryFamily;
use crate::geometry::scalar::{Coord, Geometry, GeometryKind, Ring};
use crate::io::wkb::common::WKBType;

/// The planar geometry family, producing and consuming [`Geometry`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planar;

impl GeometryFamily for Planar {
    type Coord = Coord;
    type Geometry = Geometry;

    fn make_coord(x: f64, y: f64) -> Coord {
        Coord { x, y }
    }

    fn make_point(x: f64, y: f64) -> Geometry {
        Geometry::point(x, y)
    }

    fn make_line_string(points: Vec<Coord>) -> Geometry {
        Geometry::line_string(points)
    }

    fn make_polygon(rings: Vec<Ring>) -> Geometry {
        Geometry::polygon(rings)
    }

    fn make_multi_point(points: Vec<Coord>) -> Geometry {
        Geometry::multi_point(points)
    }

    fn make_multi_line_string(lines: Vec<Vec<Coord>>) -> Geometry {
        Geometry::multi_line_string(lines)
    }

    fn make_multi_polygon(polygons: Vec<Vec<Ring>>) -> Geometry {
        Geometry::multi_polygon(polygons)
    }

    fn make_collection(members: Vec<Geometry>) -> Geometry {
        Geometry::collection(members)
    }

    fn with_srid(geom: Geometry, srid: u32) -> Geometry {
        geom.with_srid(srid)
    }

    fn srid(geom: &Geometry) -> u32 {
        geom.srid()
    }

    fn shape_tag(geom: &Geometry) -> WKBType {
        geom.wkb_type()
    }

    fn point(geom: &Geometry) -> Option<&Coord> {
        match geom.kind() {
            GeometryKind::Point(coord) => Some(coord),
            _ => None,
        }
    }

    fn line_string(geom: &Geometry) -> Option<&[Coord]> {
        match geom.kind() {
            GeometryKind::LineString(points) => Some(points),
            _ => None,
        }
    }

    fn polygon(geom: &Geometry) -> Option<&[Ring]> {
        match geom.kind() {
            GeometryKind::Polygon(rings) => Some(rings),
            _ => None,
        }
    }

    fn multi_point(geom: &Geometry) -> Option<&[Coord]> {
        match geom.kind() {
            GeometryKind::MultiPoint(points) => Some(points),
            _ => None,
        }
    }

    fn multi_line_string(geom: &Geometry) -> Option<&[Vec<Coord>]> {
        match geom.kind() {
            GeometryKind::MultiLineString(lines) => Some(lines),
            _ => None,
        }
    }

    fn multi_polygon(geom: &Geometry) -> Option<&[Vec<Ring>]> {
        match geom.kind() {
            GeometryKind::MultiPolygon(polygons) => Some(polygons),
            _ => None,
        }
    }

    fn members(geom: &Geometry) -> Option<&[Geometry]> {
        match geom.kind() {
            GeometryKind::GeometryCollection(members) => Some(members),
            _ => None,
        }
    }
}
