//! Buffered readers and writers over a [`Channel`].
//!
//! Primitive reads and writes never touch the channel. Callers first [`ReadBuffer::ensure`] that
//! enough bytes are buffered, or check [`WriteBuffer::free_space`] and [`WriteBuffer::flush`];
//! those two calls are the only points where a codec operation may block or suspend.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use log::debug;

use crate::error::{EwkbError, Result};
use crate::io::channel::{Channel, IoMode};
use crate::io::wkb::common::Endianness;

/// Default capacity of read and write buffers, in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8192;

/// The smallest write buffer able to hold any primitive.
pub const MIN_WRITE_CAPACITY: usize = 8;

/// A read buffer filled on demand from a [`Channel`].
#[derive(Debug)]
pub struct ReadBuffer<C> {
    channel: C,
    buf: Vec<u8>,
    /// Index of the next unread byte
    pos: usize,
    /// Number of valid bytes in `buf`
    filled: usize,
}

impl<C: Channel> ReadBuffer<C> {
    pub fn new(channel: C) -> Self {
        Self::with_capacity(channel, DEFAULT_BUFFER_CAPACITY)
    }

    pub fn with_capacity(channel: C, capacity: usize) -> Self {
        Self {
            channel,
            buf: vec![0; capacity.max(1)],
            pos: 0,
            filled: 0,
        }
    }

    /// The number of buffered bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.filled - self.pos
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Make sure at least `n` bytes are buffered, refilling from the channel as needed.
    ///
    /// The buffer grows when `n` exceeds its capacity. Fails with
    /// [`EwkbError::UnexpectedEof`] when the channel ends first.
    pub async fn ensure(&mut self, n: usize, mode: IoMode) -> Result<()> {
        if self.remaining() >= n {
            return Ok(());
        }

        self.buf.copy_within(self.pos..self.filled, 0);
        self.filled -= self.pos;
        self.pos = 0;
        if self.buf.len() < n {
            self.buf.resize(n, 0);
        }

        while self.filled < n {
            let dst = &mut self.buf[self.filled..];
            let read = match mode {
                IoMode::Blocking => self.channel.read(dst)?,
                IoMode::Async => self.channel.read_async(dst).await?,
            };
            if read == 0 {
                return Err(EwkbError::UnexpectedEof {
                    needed: n,
                    available: self.filled,
                });
            }
            debug!("filled {read} bytes from channel ({mode:?})");
            self.filled += read;
        }
        Ok(())
    }

    fn take(&mut self, n: usize) -> &[u8] {
        debug_assert!(self.remaining() >= n, "read past ensured bytes");
        let start = self.pos;
        self.pos += n;
        &self.buf[start..self.pos]
    }

    pub fn read_u8(&mut self) -> u8 {
        self.take(1)[0]
    }

    pub fn read_u32(&mut self, byte_order: Endianness) -> u32 {
        let bytes = self.take(4);
        match byte_order {
            Endianness::BigEndian => BigEndian::read_u32(bytes),
            Endianness::LittleEndian => LittleEndian::read_u32(bytes),
        }
    }

    pub fn read_i32(&mut self, byte_order: Endianness) -> i32 {
        let bytes = self.take(4);
        match byte_order {
            Endianness::BigEndian => BigEndian::read_i32(bytes),
            Endianness::LittleEndian => LittleEndian::read_i32(bytes),
        }
    }

    pub fn read_f64(&mut self, byte_order: Endianness) -> f64 {
        let bytes = self.take(8);
        match byte_order {
            Endianness::BigEndian => BigEndian::read_f64(bytes),
            Endianness::LittleEndian => LittleEndian::read_f64(bytes),
        }
    }

    pub fn skip(&mut self, n: usize) {
        self.take(n);
    }

    /// Read exactly `len` bytes, in as many refills as needed.
    pub async fn read_bytes(&mut self, len: usize, mode: IoMode) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(len.min(self.capacity()));
        while out.len() < len {
            let chunk = (len - out.len()).min(self.capacity());
            self.ensure(chunk, mode).await?;
            out.extend_from_slice(self.take(chunk));
        }
        Ok(out)
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Return the channel. Any buffered but unread bytes are dropped.
    pub fn into_inner(self) -> C {
        self.channel
    }
}

/// A write buffer flushed on demand to a [`Channel`].
#[derive(Debug)]
pub struct WriteBuffer<C> {
    channel: C,
    buf: Vec<u8>,
    capacity: usize,
}

impl<C: Channel> WriteBuffer<C> {
    pub fn new(channel: C) -> Self {
        Self::with_capacity(channel, DEFAULT_BUFFER_CAPACITY)
    }

    /// Create a write buffer holding at most `capacity` bytes, clamped to
    /// [`MIN_WRITE_CAPACITY`].
    pub fn with_capacity(channel: C, capacity: usize) -> Self {
        let capacity = capacity.max(MIN_WRITE_CAPACITY);
        Self {
            channel,
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn free_space(&self) -> usize {
        self.capacity - self.buf.len()
    }

    /// The number of bytes buffered but not yet flushed.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Hand every buffered byte to the channel.
    pub async fn flush(&mut self, mode: IoMode) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        match mode {
            IoMode::Blocking => self.channel.write(&self.buf)?,
            IoMode::Async => self.channel.write_async(&self.buf).await?,
        }
        debug!("flushed {} bytes to channel ({mode:?})", self.buf.len());
        self.buf.clear();
        Ok(())
    }

    fn reserve(&mut self, n: usize) -> &mut [u8] {
        debug_assert!(self.free_space() >= n, "write past free space");
        let start = self.buf.len();
        self.buf.resize(start + n, 0);
        &mut self.buf[start..]
    }

    pub fn write_u8(&mut self, value: u8) {
        self.reserve(1)[0] = value;
    }

    pub fn write_u32(&mut self, value: u32, byte_order: Endianness) {
        let dst = self.reserve(4);
        match byte_order {
            Endianness::BigEndian => BigEndian::write_u32(dst, value),
            Endianness::LittleEndian => LittleEndian::write_u32(dst, value),
        }
    }

    pub fn write_i32(&mut self, value: i32, byte_order: Endianness) {
        let dst = self.reserve(4);
        match byte_order {
            Endianness::BigEndian => BigEndian::write_i32(dst, value),
            Endianness::LittleEndian => LittleEndian::write_i32(dst, value),
        }
    }

    pub fn write_f64(&mut self, value: f64, byte_order: Endianness) {
        let dst = self.reserve(8);
        match byte_order {
            Endianness::BigEndian => BigEndian::write_f64(dst, value),
            Endianness::LittleEndian => LittleEndian::write_f64(dst, value),
        }
    }

    /// Write an arbitrary byte slice, flushing whenever the buffer fills up.
    pub async fn write_bytes(&mut self, mut bytes: &[u8], mode: IoMode) -> Result<()> {
        while !bytes.is_empty() {
            if self.free_space() == 0 {
                self.flush(mode).await?;
            }
            let len = bytes.len().min(self.free_space());
            self.buf.extend_from_slice(&bytes[..len]);
            bytes = &bytes[len..];
        }
        Ok(())
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Return the channel. Call [`WriteBuffer::flush`] first, buffered bytes are dropped.
    pub fn into_inner(self) -> C {
        self.channel
    }
}
