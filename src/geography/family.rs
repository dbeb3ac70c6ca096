use crate::family::GeometryFamily;
use crate::geography::scalar::{GeoCoord, Geography, GeographyKind};
use crate::io::wkb::common::WKBType;

/// The geodetic family, producing and consuming [`Geography`] values.
///
/// Wire `x` is the longitude and wire `y` the latitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geodetic;

impl GeometryFamily for Geodetic {
    type Coord = GeoCoord;
    type Geometry = Geography;

    fn make_coord(x: f64, y: f64) -> GeoCoord {
        GeoCoord::new(x, y)
    }

    fn make_point(x: f64, y: f64) -> Geography {
        Geography::point(x, y)
    }

    fn make_line_string(points: Vec<GeoCoord>) -> Geography {
        Geography::line_string(points)
    }

    fn make_polygon(rings: Vec<Vec<GeoCoord>>) -> Geography {
        Geography::polygon(rings)
    }

    fn make_multi_point(points: Vec<GeoCoord>) -> Geography {
        Geography::multi_point(points)
    }

    fn make_multi_line_string(lines: Vec<Vec<GeoCoord>>) -> Geography {
        Geography::multi_line_string(lines)
    }

    fn make_multi_polygon(polygons: Vec<Vec<Vec<GeoCoord>>>) -> Geography {
        Geography::multi_polygon(polygons)
    }

    fn make_collection(members: Vec<Geography>) -> Geography {
        Geography::collection(members)
    }

    fn with_srid(geom: Geography, srid: u32) -> Geography {
        geom.with_srid(srid)
    }

    fn srid(geom: &Geography) -> u32 {
        geom.srid()
    }

    fn shape_tag(geom: &Geography) -> WKBType {
        geom.wkb_type()
    }

    fn point(geom: &Geography) -> Option<&GeoCoord> {
        match geom.kind() {
            GeographyKind::Point(coord) => Some(coord),
            _ => None,
        }
    }

    fn line_string(geom: &Geography) -> Option<&[GeoCoord]> {
        match geom.kind() {
            GeographyKind::LineString(points) => Some(points),
            _ => None,
        }
    }

    fn polygon(geom: &Geography) -> Option<&[Vec<GeoCoord>]> {
        match geom.kind() {
            GeographyKind::Polygon(rings) => Some(rings),
            _ => None,
        }
    }

    fn multi_point(geom: &Geography) -> Option<&[GeoCoord]> {
        match geom.kind() {
            GeographyKind::MultiPoint(points) => Some(points),
            _ => None,
        }
    }

    fn multi_line_string(geom: &Geography) -> Option<&[Vec<GeoCoord>]> {
        match geom.kind() {
            GeographyKind::MultiLineString(lines) => Some(lines),
            _ => None,
        }
    }

    fn multi_polygon(geom: &Geography) -> Option<&[Vec<Vec<GeoCoord>>]> {
        match geom.kind() {
            GeographyKind::MultiPolygon(polygons) => Some(polygons),
            _ => None,
        }
    }

    fn members(geom: &Geography) -> Option<&[Geography]> {
        match geom.kind() {
            GeographyKind::GeometryCollection(members) => Some(members),
            _ => None,
        }
    }
}
