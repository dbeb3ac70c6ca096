//! Conversions between planar [`Geometry`] values and [`geo`] geometries.
//!
//! `geo` closes polygon rings on construction, so converting a polygon with an open ring into
//! `geo` and back appends the closing coordinate. A `geo` polygon with an empty exterior and no
//! interiors maps to a polygon with zero rings.

use crate::geometry::scalar::{Coord, Geometry, GeometryKind, Ring};

fn polygon_to_rings(polygon: &geo::Polygon) -> Vec<Ring> {
    if polygon.exterior().0.is_empty() && polygon.interiors().is_empty() {
        return vec![];
    }
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(|ring| ring.0.clone())
        .collect()
}

fn rings_to_polygon(rings: &[Ring]) -> geo::Polygon {
    let mut rings = rings.iter().map(|ring| geo::LineString::new(ring.clone()));
    let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(vec![]));
    geo::Polygon::new(exterior, rings.collect())
}

impl From<&geo::Geometry> for Geometry {
    fn from(value: &geo::Geometry) -> Self {
        match value {
            geo::Geometry::Point(point) => Geometry::point(point.x(), point.y()),
            geo::Geometry::Line(line) => Geometry::line_string(vec![line.start, line.end]),
            geo::Geometry::LineString(line_string) => Geometry::line_string(line_string.0.clone()),
            geo::Geometry::Polygon(polygon) => Geometry::polygon(polygon_to_rings(polygon)),
            geo::Geometry::MultiPoint(multi_point) => {
                Geometry::multi_point(multi_point.iter().map(|point| point.0).collect())
            }
            geo::Geometry::MultiLineString(multi_line_string) => Geometry::multi_line_string(
                multi_line_string
                    .iter()
                    .map(|line_string| line_string.0.clone())
                    .collect(),
            ),
            geo::Geometry::MultiPolygon(multi_polygon) => {
                Geometry::multi_polygon(multi_polygon.iter().map(polygon_to_rings).collect())
            }
            geo::Geometry::GeometryCollection(collection) => {
                Geometry::collection(collection.iter().map(Geometry::from).collect())
            }
            geo::Geometry::Rect(rect) => Geometry::polygon(polygon_to_rings(&rect.to_polygon())),
            geo::Geometry::Triangle(triangle) => {
                Geometry::polygon(polygon_to_rings(&triangle.to_polygon()))
            }
        }
    }
}

impl From<geo::Geometry> for Geometry {
    fn from(value: geo::Geometry) -> Self {
        (&value).into()
    }
}

impl From<&Geometry> for geo::Geometry {
    fn from(value: &Geometry) -> Self {
        match value.kind() {
            GeometryKind::Point(coord) => geo::Geometry::Point(geo::Point(*coord)),
            GeometryKind::LineString(points) => {
                geo::Geometry::LineString(geo::LineString::new(points.clone()))
            }
            GeometryKind::Polygon(rings) => geo::Geometry::Polygon(rings_to_polygon(rings)),
            GeometryKind::MultiPoint(points) => geo::Geometry::MultiPoint(geo::MultiPoint::new(
                points.iter().map(|coord| geo::Point(*coord)).collect(),
            )),
            GeometryKind::MultiLineString(lines) => {
                geo::Geometry::MultiLineString(geo::MultiLineString::new(
                    lines
                        .iter()
                        .map(|line| geo::LineString::new(line.clone()))
                        .collect(),
                ))
            }
            GeometryKind::MultiPolygon(polygons) => geo::Geometry::MultiPolygon(
                geo::MultiPolygon::new(polygons.iter().map(|p| rings_to_polygon(p)).collect()),
            ),
            GeometryKind::GeometryCollection(members) => geo::Geometry::GeometryCollection(
                geo::GeometryCollection::new_from(members.iter().map(Into::into).collect()),
            ),
        }
    }
}

impl From<Geometry> for geo::Geometry {
    fn from(value: Geometry) -> Self {
        (&value).into()
    }
}

impl From<&geo::Point> for Geometry {
    fn from(value: &geo::Point) -> Self {
        Geometry::point(value.x(), value.y())
    }
}

impl From<Coord> for Geometry {
    fn from(value: Coord) -> Self {
        Geometry::point(value.x, value.y)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geometry::{ls0, mp0, p0, poly0};

    #[test]
    fn geo_round_trip() {
        for geom in [
            geo::Geometry::Point(p0()),
            geo::Geometry::LineString(ls0()),
            geo::Geometry::Polygon(poly0()),
            geo::Geometry::MultiPoint(mp0()),
        ] {
            let ours: Geometry = (&geom).into();
            let back: geo::Geometry = (&ours).into();
            assert_eq!(back, geom);
        }
    }

    #[test]
    fn polygon_keeps_interiors_in_order() {
        let ours = Geometry::from(geo::Geometry::Polygon(poly0()));
        match ours.kind() {
            GeometryKind::Polygon(rings) => {
                assert_eq!(rings.len(), 2);
                assert_eq!(rings[0], poly0().exterior().0);
                assert_eq!(rings[1], poly0().interiors()[0].0);
            }
            _ => panic!("expected a polygon"),
        }
    }

    #[test]
    fn empty_polygon_has_no_rings() {
        let empty = geo::Polygon::new(geo::LineString::new(vec![]), vec![]);
        let ours = Geometry::from(geo::Geometry::Polygon(empty.clone()));
        assert_eq!(ours, Geometry::polygon(vec![]));
        assert_eq!(geo::Geometry::from(&ours), geo::Geometry::Polygon(empty));
    }

    #[test]
    fn rect_becomes_polygon() {
        let rect = geo::Rect::new(geo::coord! { x: 0., y: 0. }, geo::coord! { x: 1., y: 1. });
        let ours = Geometry::from(geo::Geometry::Rect(rect));
        assert!(matches!(ours.kind(), GeometryKind::Polygon(rings) if rings.len() == 1));
    }
}
