//! The PostGIS column surface of the codec: value-level reading and writing of `geometry` and
//! `geography` columns, plus the opaque byte-array fallback.

pub use codec::{EwkbCodec, GeographyCodec, GeometryCodec};
pub use raw::{ByteaCodec, RawBytesCodec};
pub use type_info::PgGeoType;

mod codec;
#[cfg(feature = "postgis")]
mod decode;
mod raw;
mod type_info;
