//! Transaction input referencing a previous output.

use quill_primitives::util::{ByteReader, ByteWriter, VarInt};
use quill_script::{Script, UnlockingScript};

use crate::TransactionError;

/// Default sequence number indicating a finalized input.
pub const DEFAULT_SEQUENCE_NUMBER: u32 = 0xFFFF_FFFF;

/// A single transaction input.
///
/// References an output of a previous transaction by transaction id and
/// output index. The unlocking script is `None` until the input is
/// signed; an unsigned input serializes with a zero-length script.
///
/// # Wire format
///
/// | Field               | Size          |
/// |---------------------|---------------|
/// | source_txid         | 32 bytes (LE) |
/// | source_tx_out_index | 4 bytes (LE)  |
/// | script length       | VarInt        |
/// | unlocking_script    | variable      |
/// | sequence_number     | 4 bytes (LE)  |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    /// The 32-byte id of the transaction whose output is being spent,
    /// in internal (little-endian) byte order.
    pub source_txid: [u8; 32],

    /// Index of the output within the source transaction.
    pub source_tx_out_index: u32,

    /// Sequence number. Defaults to `0xFFFFFFFF` (finalized).
    pub sequence_number: u32,

    /// The unlocking script satisfying the source output's conditions.
    /// `None` while the input is unsigned.
    pub unlocking_script: Option<UnlockingScript>,
}

impl TransactionInput {
    /// Create an unsigned input spending the given output.
    pub fn new(source_txid: [u8; 32], source_tx_out_index: u32) -> Self {
        TransactionInput {
            source_txid,
            source_tx_out_index,
            sequence_number: DEFAULT_SEQUENCE_NUMBER,
            unlocking_script: None,
        }
    }

    /// Deserialize an input from a reader.
    ///
    /// # Arguments
    /// * `reader` - The reader positioned at the start of an encoded input.
    ///
    /// # Returns
    /// The decoded input, or a serialization error on truncated data.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let txid_bytes = reader.read_bytes(32).map_err(|e| {
            TransactionError::SerializationError(format!("reading source txid: {}", e))
        })?;
        let mut source_txid = [0u8; 32];
        source_txid.copy_from_slice(txid_bytes);

        let source_tx_out_index = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading output index: {}", e))
        })?;

        let script_len = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading script length: {}", e))
        })?;

        let script_bytes = reader
            .read_bytes(script_len.value() as usize)
            .map_err(|e| {
                TransactionError::SerializationError(format!("reading unlocking script: {}", e))
            })?;

        let sequence_number = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading sequence number: {}", e))
        })?;

        let unlocking_script = if script_bytes.is_empty() {
            None
        } else {
            Some(Script::from_binary(script_bytes))
        };

        Ok(TransactionInput {
            source_txid,
            source_tx_out_index,
            sequence_number,
            unlocking_script,
        })
    }

    /// Serialize this input into a writer.
    ///
    /// An unsigned input is written with a zero-length unlocking script.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_bytes(&self.source_txid);
        writer.write_u32_le(self.source_tx_out_index);

        match &self.unlocking_script {
            Some(script) => {
                let script_bytes = script.to_binary();
                writer.write_varint(VarInt::from(script_bytes.len()));
                writer.write_bytes(&script_bytes);
            }
            None => {
                writer.write_varint(VarInt::from(0u64));
            }
        }

        writer.write_u32_le(self.sequence_number);
    }
}
