use coin_wire::{varint_len, Writer};

use crate::address;
use crate::error::TxError;

/// Serialization version of assembled transactions.
const TX_VERSION: u32 = 1;

/// Final sequence number: no relative locktime, no RBF signaling.
const SEQUENCE_FINAL: u32 = 0xFFFF_FFFF;

/// Locktime of assembled transactions: spendable immediately.
const LOCK_TIME: u32 = 0;

/// A transaction input spending a previous output.
///
/// The signature script stays empty until signing, which is outside this
/// crate; see [`assemble_raw_transaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxInput {
    /// Previous transaction id in display byte order (as printed by
    /// explorers); reversed on the wire.
    pub prev_txid: [u8; 32],
    /// Index of the spent output within the previous transaction.
    pub vout: u32,
    pub sequence: u32,
}

impl TxInput {
    /// Build an input from a 64-character hex transaction id and output index.
    ///
    /// Fails with `InvalidTxid` if the id is not valid hex or not 32 bytes,
    /// so malformed records are rejected before serialization.
    pub fn new(txid_hex: &str, vout: u32) -> Result<Self, TxError> {
        Ok(Self {
            prev_txid: parse_txid(txid_hex)?,
            vout,
            sequence: SEQUENCE_FINAL,
        })
    }
}

/// A transaction output committing an amount to a P2PKH script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutput {
    /// Amount in the smallest currency unit.
    pub amount: u64,
    /// The 25-byte P2PKH scriptPubKey.
    pub script_pubkey: Vec<u8>,
}

impl TxOutput {
    /// Build an output paying `amount` to a mainnet P2PKH address.
    ///
    /// The address is resolved to its scriptPubKey here; a malformed address
    /// fails with `InvalidAddress` at construction.
    pub fn new(dest_address: &str, amount: u64) -> Result<Self, TxError> {
        let pubkey_hash = address::address_to_pubkey_hash(dest_address)?;
        Ok(Self {
            amount,
            script_pubkey: p2pkh_script(&pubkey_hash),
        })
    }
}

/// Build a P2PKH scriptPubKey:
/// `OP_DUP OP_HASH160 <20-byte hash> OP_EQUALVERIFY OP_CHECKSIG`.
pub fn p2pkh_script(pubkey_hash: &[u8; 20]) -> Vec<u8> {
    let mut script = Vec::with_capacity(25);
    script.push(0x76); // OP_DUP
    script.push(0xA9); // OP_HASH160
    script.push(0x14); // Push 20 bytes
    script.extend_from_slice(pubkey_hash);
    script.push(0x88); // OP_EQUALVERIFY
    script.push(0xAC); // OP_CHECKSIG
    script
}

/// Serialize an unsigned transaction to its canonical byte layout:
/// version, input count, inputs, output count, outputs, locktime.
///
/// Each input carries its previous txid byte-reversed (the wire stores ids
/// in reversed order relative to display form), the output index, an empty
/// signature script, and the sequence field. Empty input or output lists
/// are permitted; validity rules belong to a higher layer. The result is
/// unsigned and not broadcastable as-is.
pub fn assemble_raw_transaction(
    inputs: &[TxInput],
    outputs: &[TxOutput],
) -> Result<Vec<u8>, TxError> {
    let mut buf = vec![0u8; raw_transaction_size(inputs, outputs)];
    let mut writer = Writer::new(&mut buf);

    writer.write_u32_le(TX_VERSION)?;

    writer.write_varint(inputs.len() as u64)?;
    for input in inputs {
        let mut txid = input.prev_txid;
        txid.reverse();
        writer.write_bytes(&txid)?;
        writer.write_u32_le(input.vout)?;
        writer.write_varint(0)?; // empty scriptSig, filled in by signing
        writer.write_u32_le(input.sequence)?;
    }

    writer.write_varint(outputs.len() as u64)?;
    for output in outputs {
        writer.write_u64_le(output.amount)?;
        writer.write_varint(output.script_pubkey.len() as u64)?;
        writer.write_bytes(&output.script_pubkey)?;
    }

    writer.write_u32_le(LOCK_TIME)?;
    debug_assert_eq!(writer.remaining(), 0);

    Ok(buf)
}

/// Hex form of [`assemble_raw_transaction`].
pub fn raw_transaction_hex(inputs: &[TxInput], outputs: &[TxOutput]) -> Result<String, TxError> {
    Ok(hex::encode(assemble_raw_transaction(inputs, outputs)?))
}

/// Exact serialized size, so the writer's buffer needs no growth.
fn raw_transaction_size(inputs: &[TxInput], outputs: &[TxOutput]) -> usize {
    // Per input: txid (32) + vout (4) + empty scriptSig length (1) + sequence (4).
    let inputs_size = varint_len(inputs.len() as u64) + inputs.len() * (32 + 4 + 1 + 4);
    let outputs_size = varint_len(outputs.len() as u64)
        + outputs
            .iter()
            .map(|out| 8 + varint_len(out.script_pubkey.len() as u64) + out.script_pubkey.len())
            .sum::<usize>();
    4 + inputs_size + outputs_size + 4
}

/// Parse a 64-character hex transaction id into display byte order.
fn parse_txid(txid_hex: &str) -> Result<[u8; 32], TxError> {
    let bytes = hex::decode(txid_hex)
        .map_err(|e| TxError::InvalidTxid(format!("invalid hex: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| TxError::InvalidTxid(format!("expected 32 bytes, got {}", txid_hex.len() / 2)))
}
