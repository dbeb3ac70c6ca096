use async_trait::async_trait;

use crate::error::Result;
use crate::io::buffer::{ReadBuffer, WriteBuffer};
use crate::io::channel::{Channel, IoMode};

/// The fallback used when a geometry column is requested as an opaque byte array instead of a
/// parsed value.
#[async_trait]
pub trait RawBytesCodec: Send + Sync {
    /// Read a value of `len` bytes without interpreting it.
    async fn read_raw<C: Channel>(
        &self,
        source: &mut ReadBuffer<C>,
        len: usize,
        mode: IoMode,
    ) -> Result<Vec<u8>>;

    /// Write `bytes` unchanged.
    async fn write_raw<C: Channel>(
        &self,
        bytes: &[u8],
        sink: &mut WriteBuffer<C>,
        mode: IoMode,
    ) -> Result<()>;
}

/// Copies `bytea` values straight through the buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteaCodec;

#[async_trait]
impl RawBytesCodec for ByteaCodec {
    async fn read_raw<C: Channel>(
        &self,
        source: &mut ReadBuffer<C>,
        len: usize,
        mode: IoMode,
    ) -> Result<Vec<u8>> {
        source.read_bytes(len, mode).await
    }

    async fn write_raw<C: Channel>(
        &self,
        bytes: &[u8],
        sink: &mut WriteBuffer<C>,
        mode: IoMode,
    ) -> Result<()> {
        sink.write_bytes(bytes, mode).await
    }
}
