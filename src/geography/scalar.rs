use crate::geo_traits::CoordTrait;
use crate::io::wkb::common::WKBType;

/// A position on the reference ellipsoid, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoCoord {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoCoord {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl CoordTrait for GeoCoord {
    fn x(&self) -> f64 {
        self.longitude
    }

    fn y(&self) -> f64 {
        self.latitude
    }
}

/// The shape of a [`Geography`].
#[derive(Debug, Clone, PartialEq)]
pub enum GeographyKind {
    Point(GeoCoord),
    LineString(Vec<GeoCoord>),
    Polygon(Vec<Vec<GeoCoord>>),
    MultiPoint(Vec<GeoCoord>),
    MultiLineString(Vec<Vec<GeoCoord>>),
    MultiPolygon(Vec<Vec<Vec<GeoCoord>>>),
    GeometryCollection(Vec<Geography>),
}

/// An immutable geodetic value tagged with a spatial reference identifier.
///
/// As with [`Geometry`][crate::geometry::Geometry], the SRID does not take part in equality.
#[derive(Debug, Clone)]
pub struct Geography {
    kind: GeographyKind,
    srid: u32,
}

impl Geography {
    pub fn new(kind: GeographyKind) -> Self {
        Self { kind, srid: 0 }
    }

    pub fn point(longitude: f64, latitude: f64) -> Self {
        Self::new(GeographyKind::Point(GeoCoord::new(longitude, latitude)))
    }

    pub fn line_string(points: Vec<GeoCoord>) -> Self {
        Self::new(GeographyKind::LineString(points))
    }

    /// Create a polygon from its rings, exterior first.
    pub fn polygon(rings: Vec<Vec<GeoCoord>>) -> Self {
        Self::new(GeographyKind::Polygon(rings))
    }

    pub fn multi_point(points: Vec<GeoCoord>) -> Self {
        Self::new(GeographyKind::MultiPoint(points))
    }

    pub fn multi_line_string(lines: Vec<Vec<GeoCoord>>) -> Self {
        Self::new(GeographyKind::MultiLineString(lines))
    }

    pub fn multi_polygon(polygons: Vec<Vec<Vec<GeoCoord>>>) -> Self {
        Self::new(GeographyKind::MultiPolygon(polygons))
    }

    pub fn collection(members: Vec<Geography>) -> Self {
        Self::new(GeographyKind::GeometryCollection(members))
    }

    pub fn with_srid(self, srid: u32) -> Self {
        Self { srid, ..self }
    }

    pub fn srid(&self) -> u32 {
        self.srid
    }

    pub fn kind(&self) -> &GeographyKind {
        &self.kind
    }

    pub fn into_kind(self) -> GeographyKind {
        self.kind
    }

    pub fn wkb_type(&self) -> WKBType {
        match self.kind {
            GeographyKind::Point(_) => WKBType::Point,
            GeographyKind::LineString(_) => WKBType::LineString,
            GeographyKind::Polygon(_) => WKBType::Polygon,
            GeographyKind::MultiPoint(_) => WKBType::MultiPoint,
            GeographyKind::MultiLineString(_) => WKBType::MultiLineString,
            GeographyKind::MultiPolygon(_) => WKBType::MultiPolygon,
            GeographyKind::GeometryCollection(_) => WKBType::GeometryCollection,
        }
    }
}

impl PartialEq for Geography {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl From<GeographyKind> for Geography {
    fn from(value: GeographyKind) -> Self {
        Self::new(value)
    }
}
