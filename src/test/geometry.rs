use geo::{coord, line_string, point, polygon, LineString, MultiPoint, Point, Polygon};

use crate::geometry::{Coord, Geometry};

pub(crate) fn p0() -> Point {
    point!(
        x: 0., y: 1.
    )
}

pub(crate) fn ls0() -> LineString {
    line_string![
        (x: 0., y: 1.),
        (x: 1., y: 2.)
    ]
}

pub(crate) fn poly0() -> Polygon {
    polygon!(
        exterior: [
            (x: -111., y: 45.),
            (x: -111., y: 41.),
            (x: -104., y: 41.),
            (x: -104., y: 45.),
            (x: -111., y: 45.),
        ],
        interiors: [
            [
                (x: -110., y: 44.),
                (x: -110., y: 42.),
                (x: -105., y: 42.),
                (x: -105., y: 44.),
                (x: -110., y: 44.),
            ],
        ],
    )
}

pub(crate) fn mp0() -> MultiPoint {
    MultiPoint::new(vec![
        point!(
            x: 0., y: 1.
        ),
        point!(
            x: 1., y: 2.
        ),
    ])
}

pub(crate) fn c(x: f64, y: f64) -> Coord {
    coord! { x: x, y: y }
}

/// A square ring left open on purpose: the codec must not close it.
pub(crate) fn open_ring() -> Vec<Coord> {
    vec![c(0., 0.), c(4., 0.), c(4., 4.), c(0., 4.)]
}

/// A collection holding a point, a two-point multipoint and a nested collection with one line.
pub(crate) fn nested_collection() -> Geometry {
    Geometry::collection(vec![
        Geometry::point(1.5, -2.25),
        Geometry::multi_point(vec![c(0., 1.), c(1., 2.)]),
        Geometry::collection(vec![Geometry::line_string(vec![c(3., 4.), c(5., 6.)])]),
    ])
}

/// One value of every shape, with and without SRIDs, including empty sequences.
pub(crate) fn all_shapes() -> Vec<Geometry> {
    vec![
        Geometry::point(1.5, -2.25),
        Geometry::point(f64::MAX, f64::MIN_POSITIVE).with_srid(3857),
        Geometry::line_string(vec![]),
        Geometry::line_string(vec![c(0., 1.), c(1., 2.), c(-0., -0.5)]).with_srid(4326),
        Geometry::polygon(vec![]),
        Geometry::polygon(vec![open_ring(), vec![]]),
        Geometry::multi_point(vec![]),
        Geometry::multi_point(vec![c(0., 1.), c(1., 2.)]).with_srid(u32::MAX),
        Geometry::multi_line_string(vec![vec![], vec![c(1., 1.), c(2., 2.)]]),
        Geometry::multi_polygon(vec![vec![], vec![open_ring()], vec![open_ring(), open_ring()]]),
        Geometry::collection(vec![]),
        nested_collection().with_srid(2154),
        Geometry::collection(vec![
            Geometry::point(7., 8.).with_srid(4326),
            Geometry::collection(vec![Geometry::collection(vec![Geometry::polygon(vec![
                open_ring(),
            ])])]),
        ]),
    ]
}
