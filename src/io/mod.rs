//! Buffered channel I/O and the EWKB reader and writer built on top of it.

mod buffer;
pub mod channel;
pub mod postgis;
pub mod wkb;

pub use buffer::{ReadBuffer, WriteBuffer, DEFAULT_BUFFER_CAPACITY, MIN_WRITE_CAPACITY};
pub use channel::{Channel, IoChannel, IoMode, MemoryChannel};
