use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{EwkbError, Result};

/// The EWKB flag marking that a 4-byte SRID follows the type word.
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

/// The byte order every geometry is encoded with.
pub const WKB_BYTE_ORDER: Endianness = Endianness::BigEndian;

/// The various WKB types supported by this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

impl WKBType {
    /// The type word to write for this shape, with the SRID flag set when `has_srid` is true.
    pub fn type_word(self, has_srid: bool) -> u32 {
        let id: u32 = self.into();
        if has_srid {
            id | EWKB_SRID_FLAG
        } else {
            id
        }
    }
}

/// Split an EWKB type word into its shape and whether an SRID follows.
///
/// Any flag other than [`EWKB_SRID_FLAG`] (Z, M or ISO dimension offsets) is rejected.
pub fn parse_type_word(word: u32) -> Result<(WKBType, bool)> {
    let has_srid = word & EWKB_SRID_FLAG != 0;
    let wkb_type = WKBType::try_from_primitive(word & !EWKB_SRID_FLAG)
        .map_err(|_| EwkbError::MalformedTag(word))?;
    Ok((wkb_type, has_srid))
}

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
    /// XDR
    BigEndian = 0,
    /// NDR
    LittleEndian = 1,
}

impl Endianness {
    /// Interpret a byte order marker read off the wire.
    pub fn from_marker(marker: u8) -> Result<Self> {
        Self::try_from_primitive(marker).map_err(|_| EwkbError::InvalidByteOrder(marker))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_plain_and_srid_words() {
        assert_eq!(parse_type_word(3).unwrap(), (WKBType::Polygon, false));
        assert_eq!(
            parse_type_word(0x2000_0007).unwrap(),
            (WKBType::GeometryCollection, true)
        );
    }

    #[test]
    fn rejects_unknown_shapes() {
        for word in [0, 8, 0x2000_0000, 0x2000_0008, 1001, 0x8000_0001, 0x4000_0002] {
            assert!(
                matches!(parse_type_word(word), Err(EwkbError::MalformedTag(w)) if w == word),
                "{word:#x} should be rejected"
            );
        }
    }

    #[test]
    fn type_word_round_trip() {
        assert_eq!(WKBType::MultiPolygon.type_word(false), 6);
        assert_eq!(WKBType::MultiPolygon.type_word(true), 0x2000_0006);
    }

    #[test]
    fn byte_order_markers() {
        assert_eq!(Endianness::from_marker(0).unwrap(), Endianness::BigEndian);
        assert_eq!(Endianness::from_marker(1).unwrap(), Endianness::LittleEndian);
        assert!(matches!(
            Endianness::from_marker(2),
            Err(EwkbError::InvalidByteOrder(2))
        ));
    }
}
