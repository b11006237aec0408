//! Cursor-based binary codec for the Bitcoin-style wire format.
//!
//! Provides bounds-checked reader/writer cursors over byte buffers with the
//! fixed-width little-endian integer fields and CompactSize variable-length
//! integers used throughout transaction and block serialization.

pub mod cursor;
pub mod error;
pub mod varint;

pub use cursor::{Reader, Writer};
pub use error::WireError;
pub use varint::{decode_varint, encode_varint, varint_len};
