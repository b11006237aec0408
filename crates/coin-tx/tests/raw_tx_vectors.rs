//! Cross-crate integration tests exercising the full pipeline:
//! public key -> address -> outputs -> assembled raw transaction bytes,
//! then parsing the bytes back with the wire reader.

use coin_tx::address::{address_from_pubkey, is_valid_address};
use coin_tx::transaction::{assemble_raw_transaction, raw_transaction_hex, TxInput, TxOutput};
use coin_wire::Reader;

const TXID_A: &str = "e3c0c78948d1f1d7af3f58af92a3c1b5e6c2c6c3e4b1b2a3d4e5f6d7c8b9a0a1";
const TXID_B: &str = "a1a0b9c8d7f6e5d4a3b2b1e4c3c6e6b5c1a3f5f7d1d7c789c0e3e3c0c78948d1";

// Genesis coinbase address and the SatoshiDice address.
const ADDR_A: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
const ADDR_B: &str = "1dice8EMZmqKvrGE4Qc9bUFf9PX3xaYDp";

#[test]
fn single_input_single_output_vector() {
    let inputs = vec![TxInput::new(TXID_A, 0).unwrap()];
    let outputs = vec![TxOutput::new(ADDR_A, 10_000).unwrap()];

    let raw = raw_transaction_hex(&inputs, &outputs).unwrap();
    assert_eq!(
        raw,
        "0100000001a1a0b9c8d7f6e5d4a3b2b1e4c3c6c2e6b5c1a392af583fafd7f1d14889c7c0e3\
         0000000000ffffffff0110270000000000001976a91462e907b15cbf27d5425399ebf6f0fb\
         50ebb88f1888ac00000000"
    );
}

#[test]
fn multiple_inputs_and_outputs_vector() {
    let inputs = vec![
        TxInput::new(TXID_A, 0).unwrap(),
        TxInput::new(TXID_B, 1).unwrap(),
    ];
    let outputs = vec![
        TxOutput::new(ADDR_A, 10_000).unwrap(),
        TxOutput::new(ADDR_B, 5_000).unwrap(),
    ];

    let raw = raw_transaction_hex(&inputs, &outputs).unwrap();
    assert_eq!(
        raw,
        "0100000002a1a0b9c8d7f6e5d4a3b2b1e4c3c6c2e6b5c1a392af583fafd7f1d14889c7c0e3\
         0000000000ffffffffd14889c7c0e3e3c089c7d7d1f7f5a3c1b5e6c6c3e4b1b2a3d4e5f6d7\
         c8b9a0a10100000000ffffffff0210270000000000001976a91462e907b15cbf27d5425399\
         ebf6f0fb50ebb88f1888ac88130000000000001976a91406f1b66ffe49df7fce684df16c62\
         f59dc9adbd3f88ac00000000"
    );
}

#[test]
fn assembled_bytes_parse_back_with_wire_reader() {
    let inputs = vec![
        TxInput::new(TXID_A, 0).unwrap(),
        TxInput::new(TXID_B, 1).unwrap(),
    ];
    let outputs = vec![
        TxOutput::new(ADDR_A, 10_000).unwrap(),
        TxOutput::new(ADDR_B, 5_000).unwrap(),
    ];
    let raw = assemble_raw_transaction(&inputs, &outputs).unwrap();

    let mut reader = Reader::new(&raw);
    assert_eq!(reader.read_u32_le().unwrap(), 1); // version

    let input_count = reader.read_varint().unwrap();
    assert_eq!(input_count, 2);
    for input in &inputs {
        let mut wire_txid: Vec<u8> = reader.read_bytes(32).unwrap().to_vec();
        wire_txid.reverse();
        assert_eq!(wire_txid, input.prev_txid);
        assert_eq!(reader.read_u32_le().unwrap(), input.vout);
        assert_eq!(reader.read_varint().unwrap(), 0); // empty scriptSig
        assert_eq!(reader.read_u32_le().unwrap(), 0xFFFF_FFFF); // sequence
    }

    let output_count = reader.read_varint().unwrap();
    assert_eq!(output_count, 2);
    for output in &outputs {
        assert_eq!(reader.read_u64_le().unwrap(), output.amount);
        let script_len = reader.read_varint().unwrap() as usize;
        assert_eq!(reader.read_bytes(script_len).unwrap(), output.script_pubkey);
    }

    assert_eq!(reader.read_u32_le().unwrap(), 0); // locktime
    assert!(!reader.has_remaining());
}

#[test]
fn derived_address_flows_into_transaction() {
    let pubkey = hex::decode(
        "0450863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b235\
         22cd470243453a299fa9e77237716103abc11a1df38855ed6f2ee187e9c582ba6",
    )
    .unwrap();

    let addr = address_from_pubkey(&pubkey);
    assert!(is_valid_address(&addr));

    let inputs = vec![TxInput::new(TXID_A, 0).unwrap()];
    let outputs = vec![TxOutput::new(&addr, 50_000).unwrap()];
    let raw = assemble_raw_transaction(&inputs, &outputs).unwrap();

    // The output script commits to hash160 of the public key.
    let script_hex = hex::encode(&outputs[0].script_pubkey);
    assert_eq!(
        script_hex,
        "76a914010966776006953d5567439e5e39f86a0d273bee88ac"
    );
    assert_eq!(raw.len(), 85);
}

#[test]
fn empty_transaction_round_trip() {
    let raw = assemble_raw_transaction(&[], &[]).unwrap();
    assert_eq!(hex::encode(&raw), "01000000000000000000");

    let mut reader = Reader::new(&raw);
    assert_eq!(reader.read_u32_le().unwrap(), 1);
    assert_eq!(reader.read_varint().unwrap(), 0);
    assert_eq!(reader.read_varint().unwrap(), 0);
    assert_eq!(reader.read_u32_le().unwrap(), 0);
    assert!(!reader.has_remaining());
}
