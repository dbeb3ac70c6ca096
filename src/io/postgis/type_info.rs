use crate::io::wkb::common::WKBType;

/// The PostGIS column types this codec handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PgGeoType {
    /// `geometry`, decoded into the planar family
    Geometry,
    /// `geography`, decoded into the geodetic family
    Geography,
}

impl PgGeoType {
    /// Match a column's declared type name, ignoring case and any type modifier such as
    /// `geometry(Point,4326)`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let base = name.split('(').next().unwrap_or(name).trim();
        if base.eq_ignore_ascii_case("geometry") {
            Some(PgGeoType::Geometry)
        } else if base.eq_ignore_ascii_case("geography") {
            Some(PgGeoType::Geography)
        } else {
            None
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PgGeoType::Geometry => "geometry",
            PgGeoType::Geography => "geography",
        }
    }

    /// Parse the shape constraint of a type modifier, e.g. `Point` in `geography(Point,4326)`.
    pub fn modifier_shape(name: &str) -> Option<WKBType> {
        let inner = name.split_once('(')?.1;
        let shape = inner.split([',', ')']).next()?.trim();
        [
            WKBType::Point,
            WKBType::LineString,
            WKBType::Polygon,
            WKBType::MultiPoint,
            WKBType::MultiLineString,
            WKBType::MultiPolygon,
            WKBType::GeometryCollection,
        ]
        .into_iter()
        .find(|wkb_type| format!("{wkb_type:?}").eq_ignore_ascii_case(shape))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matches_column_type_names() {
        assert_eq!(
            PgGeoType::from_type_name("geometry"),
            Some(PgGeoType::Geometry)
        );
        assert_eq!(
            PgGeoType::from_type_name("GEOGRAPHY(Point,4326)"),
            Some(PgGeoType::Geography)
        );
        assert_eq!(PgGeoType::from_type_name("bytea"), None);
        assert_eq!(PgGeoType::Geography.type_name(), "geography");
    }

    #[test]
    fn parses_modifier_shape() {
        assert_eq!(
            PgGeoType::modifier_shape("geometry(MultiPolygon, 3857)"),
            Some(WKBType::MultiPolygon)
        );
        assert_eq!(
            PgGeoType::modifier_shape("geography(POINT)"),
            Some(WKBType::Point)
        );
        assert_eq!(PgGeoType::modifier_shape("geometry"), None);
        assert_eq!(PgGeoType::modifier_shape("geometry(PointZ,4326)"), None);
    }
}
