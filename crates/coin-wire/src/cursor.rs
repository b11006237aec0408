//! Bounds-checked reader and writer cursors over byte buffers.
//!
//! A cursor wraps a buffer plus a mutable offset. Every operation advances
//! the offset by exactly the number of bytes it consumed or produced; an
//! operation that would run past the end of the buffer fails with
//! [`WireError::OutOfBounds`] and leaves the offset where it was. There is no
//! silent truncation and no partial write.
//!
//! Neither cursor allocates: `Reader` borrows the buffer immutably, `Writer`
//! takes exclusive mutable access to a caller pre-sized buffer (size it with
//! [`crate::varint_len`] and the fixed field widths before serializing).

use crate::error::WireError;
use crate::varint::encode_varint;

/// Reading cursor over a borrowed byte buffer.
#[derive(Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Create a reader positioned at `offset` into `buf`.
    pub fn with_offset(buf: &'a [u8], offset: usize) -> Self {
        Self { buf, offset }
    }

    /// Current offset into the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True while there is still data left to parse.
    pub fn has_remaining(&self) -> bool {
        self.offset < self.buf.len()
    }

    /// Borrow `n` bytes at the current offset and advance past them.
    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self
            .offset
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or(WireError::OutOfBounds {
                offset: self.offset,
                needed: n,
                len: self.buf.len(),
            })?;
        let slice = &self.buf[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    /// Read a single byte.
    pub fn read_byte(&mut self) -> Result<u8, WireError> {
        Ok(self.take(1)?[0])
    }

    /// Read `n` raw bytes as a borrowed slice.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        self.take(n)
    }

    /// Read a 16-bit little-endian unsigned integer.
    pub fn read_u16_le(&mut self) -> Result<u16, WireError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Read a 32-bit little-endian unsigned integer.
    pub fn read_u32_le(&mut self) -> Result<u32, WireError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a 64-bit little-endian unsigned integer.
    pub fn read_u64_le(&mut self) -> Result<u64, WireError> {
        let b = self.take(8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Read a CompactSize variable-length integer.
    ///
    /// Consumes the prefix byte plus however many payload bytes the prefix
    /// indicates. On failure the offset is restored to where the varint
    /// started.
    pub fn read_varint(&mut self) -> Result<u64, WireError> {
        let start = self.offset;
        let prefix = self.read_byte()?;
        let value = match prefix {
            0xfd => self.read_u16_le().map(u64::from),
            0xfe => self.read_u32_le().map(u64::from),
            0xff => self.read_u64_le(),
            n => Ok(u64::from(n)),
        };
        if value.is_err() {
            self.offset = start;
        }
        value
    }
}

/// Writing cursor over an exclusively borrowed, pre-sized byte buffer.
#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    offset: usize,
}

impl<'a> Writer<'a> {
    /// Create a writer positioned at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Current offset into the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes left before the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Borrow `n` writable bytes at the current offset and advance past them.
    fn reserve(&mut self, n: usize) -> Result<&mut [u8], WireError> {
        let end = self
            .offset
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or(WireError::OutOfBounds {
                offset: self.offset,
                needed: n,
                len: self.buf.len(),
            })?;
        let slice = &mut self.buf[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    /// Write a single byte.
    pub fn write_byte(&mut self, value: u8) -> Result<(), WireError> {
        self.reserve(1)?[0] = value;
        Ok(())
    }

    /// Write a raw byte slice.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), WireError> {
        self.reserve(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    /// Write a 16-bit unsigned integer, little-endian.
    pub fn write_u16_le(&mut self, value: u16) -> Result<(), WireError> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Write a 32-bit unsigned integer, little-endian.
    pub fn write_u32_le(&mut self, value: u32) -> Result<(), WireError> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Write a 64-bit unsigned integer, little-endian.
    pub fn write_u64_le(&mut self, value: u64) -> Result<(), WireError> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Write a CompactSize variable-length integer.
    pub fn write_varint(&mut self, value: u64) -> Result<(), WireError> {
        self.write_bytes(&encode_varint(value))
    }
}
