//! A streaming implementation of reading and writing EWKB-encoded geometries, generic over the
//! geometry family.

mod api;
pub mod common;
mod options;
pub mod reader;
pub mod writer;

pub use api::{from_ewkb, to_ewkb};
pub use common::{Endianness, WKBType};
pub use options::{CodecOptions, DEFAULT_MAX_DEPTH};
