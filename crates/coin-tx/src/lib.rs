//! P2PKH address derivation and raw transaction assembly.
//!
//! Provides base58check mainnet address derivation from public keys
//! (hash160 + version byte + double-SHA-256 checksum) and assembly of the
//! canonical unsigned raw transaction byte layout: version, inputs, outputs,
//! locktime. Signing is out of scope; assembled transactions carry empty
//! signature scripts and are not broadcastable as-is.

pub mod address;
pub mod error;
pub mod transaction;
