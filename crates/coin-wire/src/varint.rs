//! CompactSize variable-length integers.
//!
//! The prefix byte selects the width:
//! - value < 0xfd: single byte
//! - value <= 0xffff: 0xfd prefix + 2 bytes little-endian
//! - value <= 0xffffffff: 0xfe prefix + 4 bytes little-endian
//! - otherwise: 0xff prefix + 8 bytes little-endian
//!
//! Decoding is best-effort: a non-minimal encoding (e.g. `fd 05 00`) decodes
//! to its value rather than being rejected.

use crate::cursor::Reader;
use crate::error::WireError;

/// Number of bytes (1, 3, 5, or 9) the CompactSize encoding of `value`
/// occupies. Callers use this to pre-size buffers before writing.
pub fn varint_len(value: u64) -> usize {
    if value < 0xfd {
        1
    } else if value <= 0xffff {
        3
    } else if value <= 0xffff_ffff {
        5
    } else {
        9
    }
}

/// Encode `value` as a CompactSize integer.
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(varint_len(value));
    if value < 0xfd {
        buf.push(value as u8);
    } else if value <= 0xffff {
        buf.push(0xfd);
        buf.extend_from_slice(&(value as u16).to_le_bytes());
    } else if value <= 0xffff_ffff {
        buf.push(0xfe);
        buf.extend_from_slice(&(value as u32).to_le_bytes());
    } else {
        buf.push(0xff);
        buf.extend_from_slice(&value.to_le_bytes());
    }
    buf
}

/// Decode a CompactSize integer from the start of `bytes`.
///
/// Returns the value and the number of bytes consumed. Fails with
/// `OutOfBounds` if the prefix promises more bytes than `bytes` holds.
pub fn decode_varint(bytes: &[u8]) -> Result<(u64, usize), WireError> {
    let mut reader = Reader::new(bytes);
    let value = reader.read_varint()?;
    Ok((value, reader.offset()))
}
