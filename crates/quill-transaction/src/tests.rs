//! Tests for transaction serialization and the template signing flow.

use quill_primitives::hash::sha256d;
use quill_script::opcodes::{OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OP_HASH160};
use quill_script::{Script, UnlockingScript};

use crate::input::{TransactionInput, DEFAULT_SEQUENCE_NUMBER};
use crate::output::TransactionOutput;
use crate::template::UnlockingScriptTemplate;
use crate::transaction::Transaction;
use crate::TransactionError;

fn p2pkh_script(fill: u8) -> Script {
    let mut script = Script::new();
    script.push_opcode(OP_DUP).expect("opcode");
    script.push_opcode(OP_HASH160).expect("opcode");
    script.push_data(&[fill; 20]).expect("push");
    script.push_opcode(OP_EQUALVERIFY).expect("opcode");
    script.push_opcode(OP_CHECKSIG).expect("opcode");
    script
}

fn sample_transaction() -> Transaction {
    let mut tx = Transaction::new();
    let mut input = TransactionInput::new([0x11; 32], 1);
    input.unlocking_script = Some(Script::from_hex("0401020304").expect("script"));
    tx.add_input(input);
    tx.add_output(TransactionOutput::new(5000, p2pkh_script(0x22)));
    tx.add_output(TransactionOutput::new(1250, p2pkh_script(0x33)));
    tx
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// An empty transaction serializes to the minimal ten bytes.
#[test]
fn test_empty_transaction_bytes() {
    let tx = Transaction::new();
    assert_eq!(tx.to_hex(), "01000000000000000000");
}

/// A populated transaction survives a byte round trip field for field.
#[test]
fn test_wire_roundtrip() {
    let tx = sample_transaction();
    let decoded = Transaction::from_bytes(&tx.to_bytes()).expect("should decode");
    assert_eq!(decoded, tx);
    assert_eq!(decoded.inputs[0].source_txid, [0x11; 32]);
    assert_eq!(decoded.inputs[0].source_tx_out_index, 1);
    assert_eq!(decoded.inputs[0].sequence_number, DEFAULT_SEQUENCE_NUMBER);
    assert_eq!(decoded.outputs[0].satoshis, 5000);
    assert!(decoded.outputs[0].locking_script.is_p2pkh());
}

/// Hex serialization round-trips through from_hex.
#[test]
fn test_hex_roundtrip() {
    let tx = sample_transaction();
    let decoded = Transaction::from_hex(&tx.to_hex()).expect("should decode");
    assert_eq!(decoded.to_hex(), tx.to_hex());
}

/// An unsigned input serializes with a zero-length script and decodes
/// back to None.
#[test]
fn test_unsigned_input_roundtrip() {
    let mut tx = Transaction::new();
    tx.add_input(TransactionInput::new([0xab; 32], 0));
    let decoded = Transaction::from_bytes(&tx.to_bytes()).expect("should decode");
    assert!(decoded.inputs[0].unlocking_script.is_none());
}

/// Truncated bytes fail with a serialization error.
#[test]
fn test_truncated_bytes_rejected() {
    let tx = sample_transaction();
    let bytes = tx.to_bytes();
    let result = Transaction::from_bytes(&bytes[..bytes.len() - 3]);
    assert!(matches!(
        result,
        Err(TransactionError::SerializationError(_))
    ));
}

/// Trailing bytes after a complete transaction are rejected.
#[test]
fn test_trailing_bytes_rejected() {
    let mut bytes = sample_transaction().to_bytes();
    bytes.push(0x00);
    let result = Transaction::from_bytes(&bytes);
    assert!(matches!(
        result,
        Err(TransactionError::SerializationError(_))
    ));
}

/// Invalid hex is rejected before decoding begins.
#[test]
fn test_invalid_hex_rejected() {
    assert!(Transaction::from_hex("zzzz").is_err());
}

// ---------------------------------------------------------------------------
// Transaction id
// ---------------------------------------------------------------------------

/// The txid is the reversed double SHA-256 of the serialized bytes.
#[test]
fn test_txid_is_reversed_sha256d() {
    let tx = sample_transaction();
    let mut expected = sha256d(&tx.to_bytes());
    expected.reverse();
    assert_eq!(tx.txid(), hex::encode(expected));
    assert_eq!(tx.txid().len(), 64);
}

/// The txid changes when any field changes.
#[test]
fn test_txid_depends_on_content() {
    let tx = sample_transaction();
    let mut other = tx.clone();
    other.outputs[0].satoshis += 1;
    assert_ne!(tx.txid(), other.txid());
}

// ---------------------------------------------------------------------------
// Template signing flow
// ---------------------------------------------------------------------------

/// A test unlocker that produces a fixed push-only script, standing in
/// for a real signer behind the deferred handle.
struct FixedUnlocker {
    payload: Vec<u8>,
}

impl UnlockingScriptTemplate for FixedUnlocker {
    async fn sign(
        &self,
        tx: &Transaction,
        input_index: u32,
    ) -> Result<UnlockingScript, TransactionError> {
        if input_index as usize >= tx.inputs.len() {
            return Err(TransactionError::SigningError(format!(
                "no input at index {}",
                input_index
            )));
        }
        let mut script = UnlockingScript::new();
        script.push_data(&self.payload)?;
        Ok(script)
    }

    async fn estimate_length(&self) -> Result<u64, TransactionError> {
        Ok(1 + self.payload.len() as u64)
    }
}

/// sign_input awaits the handle and installs the produced script.
#[tokio::test]
async fn test_sign_input_installs_script() {
    let mut tx = Transaction::new();
    tx.add_input(TransactionInput::new([0x01; 32], 0));
    let unlocker = FixedUnlocker {
        payload: vec![0xde, 0xad],
    };

    tx.sign_input(0, &unlocker).await.expect("should sign");

    let script = tx.inputs[0]
        .unlocking_script
        .as_ref()
        .expect("script installed");
    assert_eq!(script.to_hex(), "02dead");
    assert!(script.is_push_only());
}

/// The estimate matches the script the handle later produces.
#[tokio::test]
async fn test_estimate_length_matches_signed_script() {
    let mut tx = Transaction::new();
    tx.add_input(TransactionInput::new([0x01; 32], 0));
    let unlocker = FixedUnlocker {
        payload: vec![0xaa; 8],
    };

    let estimate = unlocker.estimate_length().await.expect("should estimate");
    tx.sign_input(0, &unlocker).await.expect("should sign");
    let actual = tx.inputs[0].unlocking_script.as_ref().unwrap().len() as u64;
    assert_eq!(estimate, actual);
}

/// Signing an out-of-range input fails without touching the transaction.
#[tokio::test]
async fn test_sign_input_out_of_range() {
    let mut tx = Transaction::new();
    let unlocker = FixedUnlocker { payload: vec![1] };
    let result = tx.sign_input(0, &unlocker).await;
    assert!(matches!(
        result,
        Err(TransactionError::InvalidTransaction(_))
    ));
}

/// Distinct inputs of one transaction can be signed one after another,
/// each handle independent of the other.
#[tokio::test]
async fn test_sign_multiple_inputs() {
    let mut tx = Transaction::new();
    tx.add_input(TransactionInput::new([0x01; 32], 0));
    tx.add_input(TransactionInput::new([0x02; 32], 3));
    let first = FixedUnlocker { payload: vec![0x01] };
    let second = FixedUnlocker { payload: vec![0x02, 0x03] };

    tx.sign_input(0, &first).await.expect("should sign");
    tx.sign_input(1, &second).await.expect("should sign");

    assert_eq!(tx.inputs[0].unlocking_script.as_ref().unwrap().to_hex(), "0101");
    assert_eq!(
        tx.inputs[1].unlocking_script.as_ref().unwrap().to_hex(),
        "020203"
    );
}
