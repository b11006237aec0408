use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::error::TxError;

/// Version byte prepended to mainnet P2PKH addresses (they start with "1").
pub const VERSION_BYTE: u8 = 0x00;

/// Decoded length of a framed address: version (1) + hash160 (20) + checksum (4).
const ADDRESS_PAYLOAD_LEN: usize = 25;

/// Compute hash160: RIPEMD-160(SHA-256(data)).
///
/// The 20-byte public key hash committed to by P2PKH addresses and scripts.
/// Total for any input, including the empty byte sequence.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    Ripemd160::digest(sha).into()
}

/// Derive a mainnet P2PKH address from a 20-byte public key hash.
///
/// Prepends the version byte, appends the 4-byte double-SHA-256 checksum,
/// and base58-encodes the 25-byte result.
pub fn address_from_hash(pubkey_hash: &[u8; 20]) -> String {
    let mut payload = Vec::with_capacity(ADDRESS_PAYLOAD_LEN);
    payload.push(VERSION_BYTE);
    payload.extend_from_slice(pubkey_hash);

    let checksum = double_sha256_checksum(&payload);
    payload.extend_from_slice(&checksum);

    bs58::encode(&payload).into_string()
}

/// Derive a mainnet P2PKH address from a public key.
pub fn address_from_pubkey(pubkey: &[u8]) -> String {
    address_from_hash(&hash160(pubkey))
}

/// Check whether a string is structurally a mainnet P2PKH address.
///
/// Verifies base58 decoding, the 25-byte payload length, and the version
/// byte. Never propagates an error; malformed input reports `false`.
///
/// TODO: also recompute and compare the 4-byte checksum; a framed payload
/// with a corrupted checksum currently passes.
pub fn is_valid_address(address: &str) -> bool {
    let decoded = match bs58::decode(address).into_vec() {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    decoded.len() == ADDRESS_PAYLOAD_LEN && decoded[0] == VERSION_BYTE
}

/// Extract the 20-byte public key hash from a mainnet P2PKH address.
///
/// Fails with `InvalidAddress` on a base58 decode error, wrong decoded
/// length, or wrong version byte.
pub fn address_to_pubkey_hash(address: &str) -> Result<[u8; 20], TxError> {
    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(|e| TxError::InvalidAddress(format!("invalid base58: {e}")))?;

    if decoded.len() != ADDRESS_PAYLOAD_LEN {
        return Err(TxError::InvalidAddress(format!(
            "expected {ADDRESS_PAYLOAD_LEN} bytes, got {}",
            decoded.len()
        )));
    }
    if decoded[0] != VERSION_BYTE {
        return Err(TxError::InvalidAddress(format!(
            "wrong version byte 0x{:02x}",
            decoded[0]
        )));
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&decoded[1..21]);
    Ok(hash)
}

/// Double SHA-256 checksum (first 4 bytes).
fn double_sha256_checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&second[..4]);
    checksum
}
