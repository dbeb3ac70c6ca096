//! Defines [`EwkbError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::io::wkb::common::WKBType;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EwkbError {
    /// A geometry header whose type word does not name one of the seven supported shapes.
    ///
    /// The read position of the source is unreliable after this error.
    #[error("Malformed WKB geometry type: {0:#010x}")]
    MalformedTag(u32),

    /// A byte order marker other than 0 (big endian) or 1 (little endian).
    #[error("Invalid WKB byte order marker: {0}")]
    InvalidByteOrder(u8),

    /// A member header inside a Multi* geometry that names a different shape than its container
    /// implies.
    #[error("Unexpected member geometry type: expected {expected:?}, found {found:#010x}")]
    UnexpectedMemberType {
        /// The shape implied by the container
        expected: WKBType,
        /// The raw type word found on the wire
        found: u32,
    },

    /// The underlying channel ended before the requested number of bytes was available.
    #[error("Unexpected end of data: needed {needed} bytes, only {available} available")]
    UnexpectedEof {
        /// Bytes required by the pending read
        needed: usize,
        /// Bytes that could be buffered before the channel ended
        available: usize,
    },

    /// A value whose family accessors disagree with its shape tag.
    #[error("Geometry cannot be represented as WKB: {0}")]
    Unrepresentable(String),

    /// A sequence whose length does not fit in a 32-bit WKB count.
    #[error("Overflow: sequence length does not fit in a u32 count.")]
    Overflow,

    /// A geometry collection nested deeper than the configured limit.
    #[error("Geometry collections nested deeper than {0} levels")]
    NestingTooDeep(usize),

    /// The raw bytes path was requested but no passthrough codec was configured.
    #[error("Raw bytes passthrough codec is not initialized")]
    PassthroughUnavailable,

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, EwkbError>;
