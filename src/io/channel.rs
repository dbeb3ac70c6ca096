//! The byte channel underneath [`ReadBuffer`][super::ReadBuffer] and
//! [`WriteBuffer`][super::WriteBuffer].
//!
//! A channel exposes both a blocking and a suspending way to move bytes. Which one the buffers use
//! is chosen per call through [`IoMode`], so the codec runs one algorithm for both.

use std::io::{ErrorKind, Read, Write};

use async_trait::async_trait;

/// Selects whether buffer refills and flushes block the calling thread or suspend the calling
/// task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IoMode {
    /// Use [`Channel::read`] and [`Channel::write`].
    #[default]
    Blocking,
    /// Use [`Channel::read_async`] and [`Channel::write_async`].
    Async,
}

/// A bidirectional byte stream, typically one database connection.
///
/// Access to a channel is never synchronized by this crate; callers must not run two codec
/// operations against the same channel concurrently.
#[async_trait]
pub trait Channel: Send {
    /// Read at most `buf.len()` bytes, blocking until at least one is available.
    ///
    /// Returns 0 once the stream has ended.
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize>;

    /// Suspending counterpart of [`Channel::read`].
    async fn read_async(&mut self, buf: &mut [u8]) -> std::io::Result<usize>;

    /// Write all of `buf`, blocking until done.
    fn write(&mut self, buf: &[u8]) -> std::io::Result<()>;

    /// Suspending counterpart of [`Channel::write`].
    async fn write_async(&mut self, buf: &[u8]) -> std::io::Result<()>;
}

/// An in-memory channel: reads drain a fixed input, writes append to an output vector.
///
/// Each fill can be limited to a cycling pattern of chunk sizes, which simulates a network
/// connection delivering data in small pieces.
#[derive(Debug, Clone, Default)]
pub struct MemoryChannel {
    input: Vec<u8>,
    position: usize,
    chunk_sizes: Vec<usize>,
    next_chunk: usize,
    output: Vec<u8>,
}

impl MemoryChannel {
    pub fn new(input: impl Into<Vec<u8>>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// Limit every fill to the next size of `chunk_sizes`, cycling through it.
    ///
    /// Sizes of 0 are treated as 1, since a 0-byte fill means end of stream.
    pub fn with_chunk_sizes(self, chunk_sizes: Vec<usize>) -> Self {
        Self {
            chunk_sizes,
            next_chunk: 0,
            ..self
        }
    }

    /// Bytes of the input not yet read.
    pub fn unread(&self) -> &[u8] {
        &self.input[self.position..]
    }

    /// Bytes written to this channel so far.
    pub fn written(&self) -> &[u8] {
        &self.output
    }

    pub fn into_written(self) -> Vec<u8> {
        self.output
    }

    fn next_limit(&mut self) -> usize {
        if self.chunk_sizes.is_empty() {
            return usize::MAX;
        }
        let limit = self.chunk_sizes[self.next_chunk % self.chunk_sizes.len()];
        self.next_chunk += 1;
        limit.max(1)
    }
}

#[async_trait]
impl Channel for MemoryChannel {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let len = buf
            .len()
            .min(self.unread().len())
            .min(self.next_limit());
        buf[..len].copy_from_slice(&self.input[self.position..self.position + len]);
        self.position += len;
        Ok(len)
    }

    async fn read_async(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Channel::read(self, buf)
    }

    fn write(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.output.extend_from_slice(buf);
        Ok(())
    }

    async fn write_async(&mut self, buf: &[u8]) -> std::io::Result<()> {
        Channel::write(self, buf)
    }
}

/// Adapts a blocking [`std::io`] stream, such as a `TcpStream`, into a [`Channel`].
///
/// Both modes perform the blocking operation; [`IoMode::Async`] gives no benefit here.
#[derive(Debug)]
pub struct IoChannel<T> {
    inner: T,
}

impl<T> IoChannel<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[async_trait]
impl<T: Read + Write + Send> Channel for IoChannel<T> {
    /// Retries reads interrupted by a signal, as [`Read::read_exact`] does.
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        loop {
            match self.inner.read(buf) {
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                result => return result,
            }
        }
    }

    async fn read_async(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        Channel::read(self, buf)
    }

    fn write(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.inner.write_all(buf)?;
        self.inner.flush()
    }

    async fn write_async(&mut self, buf: &[u8]) -> std::io::Result<()> {
        Channel::write(self, buf)
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn memory_channel_respects_chunk_sizes() {
        let mut channel = MemoryChannel::new(vec![1, 2, 3, 4, 5, 6]).with_chunk_sizes(vec![1, 0, 3]);
        let mut buf = [0; 8];
        assert_eq!(Channel::read(&mut channel, &mut buf).unwrap(), 1);
        assert_eq!(Channel::read(&mut channel, &mut buf).unwrap(), 1);
        assert_eq!(Channel::read(&mut channel, &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], &[3, 4, 5]);
        assert_eq!(Channel::read(&mut channel, &mut buf).unwrap(), 1);
        assert_eq!(Channel::read(&mut channel, &mut buf).unwrap(), 0);
    }

    #[test]
    fn io_channel_round_trip() {
        let mut channel = IoChannel::new(Cursor::new(Vec::new()));
        Channel::write(&mut channel, &[9, 8, 7]).unwrap();
        let mut cursor = channel.into_inner();
        cursor.set_position(0);
        let mut channel = IoChannel::new(cursor);
        let mut buf = [0; 4];
        assert_eq!(Channel::read(&mut channel, &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], &[9, 8, 7]);
    }

    /// Fails every other read with `Interrupted`.
    struct Flaky {
        inner: Cursor<Vec<u8>>,
        interrupt: bool,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(ErrorKind::Interrupted.into());
            }
            self.inner.read(buf)
        }
    }

    impl Write for Flaky {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.inner.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn io_channel_retries_interrupted_reads() {
        let mut channel = IoChannel::new(Flaky {
            inner: Cursor::new(vec![1, 2, 3]),
            interrupt: false,
        });
        let mut buf = [0; 2];
        assert_eq!(Channel::read(&mut channel, &mut buf).unwrap(), 2);
        assert_eq!(buf, [1, 2]);
        let n = futures::executor::block_on(channel.read_async(&mut buf)).unwrap();
        assert_eq!(n, 1);
        assert_eq!(buf[0], 3);
    }
}
