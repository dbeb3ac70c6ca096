use std::marker::PhantomData;

use futures::executor::block_on;

use crate::error::{EwkbError, Result};
use crate::family::GeometryFamily;
use crate::geography::Geodetic;
use crate::geometry::Planar;
use crate::io::buffer::{ReadBuffer, WriteBuffer};
use crate::io::channel::{Channel, IoMode};
use crate::io::postgis::raw::{ByteaCodec, RawBytesCodec};
use crate::io::wkb::reader::read_geometry;
use crate::io::wkb::writer::{geometry_wkb_size, write_geometry};
use crate::io::wkb::CodecOptions;

/// Reads and writes one column value at a time for geometry family `F`.
///
/// The same algorithm serves both I/O modes: the `*_blocking` methods drive the async
/// implementation to completion on the calling thread with [`IoMode::Blocking`].
#[derive(Debug, Clone)]
pub struct EwkbCodec<F, P = ByteaCodec> {
    options: CodecOptions,
    passthrough: Option<P>,
    family: PhantomData<fn() -> F>,
}

/// Codec for PostGIS `geometry` columns.
pub type GeometryCodec = EwkbCodec<Planar>;

/// Codec for PostGIS `geography` columns.
pub type GeographyCodec = EwkbCodec<Geodetic>;

impl<F: GeometryFamily> EwkbCodec<F> {
    /// Create a codec without a raw bytes passthrough.
    pub fn new(options: CodecOptions) -> Self {
        Self {
            options,
            passthrough: None,
            family: PhantomData,
        }
    }
}

impl<F: GeometryFamily> Default for EwkbCodec<F> {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<F: GeometryFamily, P: RawBytesCodec> EwkbCodec<F, P> {
    /// Use `passthrough` whenever a value is requested as raw bytes.
    pub fn with_passthrough<Q: RawBytesCodec>(self, passthrough: Q) -> EwkbCodec<F, Q> {
        EwkbCodec {
            options: self.options,
            passthrough: Some(passthrough),
            family: PhantomData,
        }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Wrap `channel` in a read buffer sized by this codec's options.
    pub fn reader<C: Channel>(&self, channel: C) -> ReadBuffer<C> {
        ReadBuffer::with_capacity(channel, self.options.read_buffer_capacity)
    }

    /// Wrap `channel` in a write buffer sized by this codec's options.
    pub fn writer<C: Channel>(&self, channel: C) -> WriteBuffer<C> {
        WriteBuffer::with_capacity(channel, self.options.write_buffer_capacity)
    }

    /// Decode one value. `source` must be positioned at the start of a geometry header.
    pub async fn read<C: Channel>(
        &self,
        source: &mut ReadBuffer<C>,
        mode: IoMode,
    ) -> Result<F::Geometry> {
        read_geometry::<F, C>(source, mode, &self.options).await
    }

    pub fn read_blocking<C: Channel>(&self, source: &mut ReadBuffer<C>) -> Result<F::Geometry> {
        block_on(self.read(source, IoMode::Blocking))
    }

    /// Encode one value. Bytes may remain buffered in `sink` afterwards.
    pub async fn write<C: Channel>(
        &self,
        geom: &F::Geometry,
        sink: &mut WriteBuffer<C>,
        mode: IoMode,
    ) -> Result<()> {
        write_geometry::<F, C>(geom, sink, mode, &self.options).await
    }

    pub fn write_blocking<C: Channel>(
        &self,
        geom: &F::Geometry,
        sink: &mut WriteBuffer<C>,
    ) -> Result<()> {
        block_on(self.write(geom, sink, IoMode::Blocking))
    }

    /// The number of bytes [`EwkbCodec::write`] produces for `geom`, as sent in the value's
    /// length prefix.
    pub fn encoded_len(&self, geom: &F::Geometry) -> Result<usize> {
        geometry_wkb_size::<F>(geom, &self.options)
    }

    fn passthrough(&self) -> Result<&P> {
        self.passthrough
            .as_ref()
            .ok_or(EwkbError::PassthroughUnavailable)
    }

    /// Read a value of `len` bytes as an opaque byte array through the passthrough codec.
    pub async fn read_raw<C: Channel>(
        &self,
        source: &mut ReadBuffer<C>,
        len: usize,
        mode: IoMode,
    ) -> Result<Vec<u8>> {
        self.passthrough()?.read_raw(source, len, mode).await
    }

    /// Write an opaque byte array through the passthrough codec.
    pub async fn write_raw<C: Channel>(
        &self,
        bytes: &[u8],
        sink: &mut WriteBuffer<C>,
        mode: IoMode,
    ) -> Result<()> {
        self.passthrough()?.write_raw(bytes, sink, mode).await
    }
}
