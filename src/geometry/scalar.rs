use crate::io::wkb::common::WKBType;

/// A planar coordinate.
pub type Coord = geo::Coord<f64>;

/// A closed sequence of coordinates bounding a polygon face or hole.
///
/// Rings are stored exactly as given; no closing coordinate is added or removed.
pub type Ring = Vec<Coord>;

/// The shape of a planar [`Geometry`].
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryKind {
    Point(Coord),
    LineString(Vec<Coord>),
    Polygon(Vec<Ring>),
    MultiPoint(Vec<Coord>),
    MultiLineString(Vec<Vec<Coord>>),
    MultiPolygon(Vec<Vec<Ring>>),
    GeometryCollection(Vec<Geometry>),
}

impl GeometryKind {
    /// The WKB shape of this kind.
    pub fn wkb_type(&self) -> WKBType {
        match self {
            GeometryKind::Point(_) => WKBType::Point,
            GeometryKind::LineString(_) => WKBType::LineString,
            GeometryKind::Polygon(_) => WKBType::Polygon,
            GeometryKind::MultiPoint(_) => WKBType::MultiPoint,
            GeometryKind::MultiLineString(_) => WKBType::MultiLineString,
            GeometryKind::MultiPolygon(_) => WKBType::MultiPolygon,
            GeometryKind::GeometryCollection(_) => WKBType::GeometryCollection,
        }
    }
}

/// An immutable planar geometry value tagged with a spatial reference identifier.
///
/// The SRID rides alongside the shape: two geometries compare equal when their shapes are equal,
/// whatever their SRIDs.
#[derive(Debug, Clone)]
pub struct Geometry {
    kind: GeometryKind,
    srid: u32,
}

impl Geometry {
    /// Create a new geometry without a spatial reference identifier.
    pub fn new(kind: GeometryKind) -> Self {
        Self { kind, srid: 0 }
    }

    pub fn point(x: f64, y: f64) -> Self {
        Self::new(GeometryKind::Point(Coord { x, y }))
    }

    pub fn line_string(points: Vec<Coord>) -> Self {
        Self::new(GeometryKind::LineString(points))
    }

    pub fn polygon(rings: Vec<Ring>) -> Self {
        Self::new(GeometryKind::Polygon(rings))
    }

    pub fn multi_point(points: Vec<Coord>) -> Self {
        Self::new(GeometryKind::MultiPoint(points))
    }

    pub fn multi_line_string(lines: Vec<Vec<Coord>>) -> Self {
        Self::new(GeometryKind::MultiLineString(lines))
    }

    pub fn multi_polygon(polygons: Vec<Vec<Ring>>) -> Self {
        Self::new(GeometryKind::MultiPolygon(polygons))
    }

    pub fn collection(members: Vec<Geometry>) -> Self {
        Self::new(GeometryKind::GeometryCollection(members))
    }

    /// Return this geometry with the given spatial reference identifier.
    pub fn with_srid(self, srid: u32) -> Self {
        Self { srid, ..self }
    }

    /// The spatial reference identifier, 0 meaning unspecified.
    pub fn srid(&self) -> u32 {
        self.srid
    }

    pub fn kind(&self) -> &GeometryKind {
        &self.kind
    }

    pub fn into_kind(self) -> GeometryKind {
        self.kind
    }

    pub fn wkb_type(&self) -> WKBType {
        self.kind.wkb_type()
    }
}

impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl From<GeometryKind> for Geometry {
    fn from(value: GeometryKind) -> Self {
        Self::new(value)
    }
}
