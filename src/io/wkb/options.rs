use serde::{Deserialize, Serialize};

use crate::io::buffer::DEFAULT_BUFFER_CAPACITY;

/// Default limit on how deeply geometry collections may nest.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for reading and writing EWKB geometries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Validate the per-member header inside MultiPoint, MultiLineString and MultiPolygon values.
    ///
    /// When true, a member header must carry a valid byte order and exactly the member shape
    /// implied by its container, and the member's own byte order governs its coordinates. When
    /// false, the five header bytes are skipped unchecked and the container's byte order is used.
    pub strict_member_headers: bool,

    /// How many levels of GeometryCollection may enclose a value, on both decode and encode.
    ///
    /// Deeper input fails with [`EwkbError::NestingTooDeep`](crate::error::EwkbError::NestingTooDeep) instead of
    /// exhausting the stack.
    pub max_depth: usize,

    /// Capacity of read buffers created by this crate, in bytes
    pub read_buffer_capacity: usize,

    /// Capacity of write buffers created by this crate, in bytes
    pub write_buffer_capacity: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            strict_member_headers: true,
            max_depth: DEFAULT_MAX_DEPTH,
            read_buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            write_buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl CodecOptions {
    pub fn new(strict_member_headers: bool) -> Self {
        Self {
            strict_member_headers,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn deserialize_partial_json() {
        let options: CodecOptions =
            serde_json::from_str(r#"{"strict_member_headers": false}"#).unwrap();
        assert_eq!(options, CodecOptions::new(false));
        assert_eq!(options.read_buffer_capacity, DEFAULT_BUFFER_CAPACITY);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    }
}
