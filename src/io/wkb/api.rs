use futures::executor::block_on;

use crate::error::Result;
use crate::family::GeometryFamily;
use crate::io::buffer::{ReadBuffer, WriteBuffer};
use crate::io::channel::{IoMode, MemoryChannel};
use crate::io::wkb::options::CodecOptions;
use crate::io::wkb::reader::read_geometry;
use crate::io::wkb::writer::{geometry_wkb_size, write_geometry};

/// Parse one EWKB-encoded geometry of family `F` from a byte slice.
///
/// Trailing bytes after the geometry are ignored.
pub fn from_ewkb<F: GeometryFamily>(buf: &[u8]) -> Result<F::Geometry> {
    let options = CodecOptions::default();
    let mut source = ReadBuffer::with_capacity(MemoryChannel::new(buf), buf.len());
    block_on(read_geometry::<F, _>(
        &mut source,
        IoMode::Blocking,
        &options,
    ))
}

/// Encode a geometry of family `F` as big-endian EWKB.
pub fn to_ewkb<F: GeometryFamily>(geom: &F::Geometry) -> Result<Vec<u8>> {
    let options = CodecOptions::default();
    let size = geometry_wkb_size::<F>(geom, &options)?;
    let mut sink = WriteBuffer::with_capacity(MemoryChannel::default(), size);
    block_on(async {
        write_geometry::<F, _>(geom, &mut sink, IoMode::Blocking, &options).await?;
        sink.flush(IoMode::Blocking).await
    })?;
    Ok(sink.into_inner().into_written())
}
