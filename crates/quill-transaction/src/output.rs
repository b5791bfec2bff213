//! Transaction output: a satoshi value and the locking script that
//! defines its spending conditions.

use quill_primitives::util::{ByteReader, ByteWriter, VarInt};
use quill_script::{LockingScript, Script};

use crate::TransactionError;

/// A single transaction output.
///
/// # Wire format
///
/// | Field          | Size         |
/// |----------------|--------------|
/// | satoshis       | 8 bytes (LE) |
/// | script length  | VarInt       |
/// | locking_script | variable     |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionOutput {
    /// The number of satoshis locked by this output.
    pub satoshis: u64,

    /// The locking script defining the spending conditions.
    pub locking_script: LockingScript,
}

impl TransactionOutput {
    /// Create an output with the given value and locking script.
    pub fn new(satoshis: u64, locking_script: LockingScript) -> Self {
        TransactionOutput {
            satoshis,
            locking_script,
        }
    }

    /// Deserialize an output from a reader.
    ///
    /// # Arguments
    /// * `reader` - The reader positioned at the start of an encoded output.
    ///
    /// # Returns
    /// The decoded output, or a serialization error on truncated data.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let satoshis = reader.read_u64_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading satoshis: {}", e))
        })?;

        let script_len = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading script length: {}", e))
        })?;

        let script_bytes = reader
            .read_bytes(script_len.value() as usize)
            .map_err(|e| {
                TransactionError::SerializationError(format!("reading locking script: {}", e))
            })?;

        Ok(TransactionOutput {
            satoshis,
            locking_script: Script::from_binary(script_bytes),
        })
    }

    /// Serialize this output into a writer.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_u64_le(self.satoshis);
        let script_bytes = self.locking_script.to_binary();
        writer.write_varint(VarInt::from(script_bytes.len()));
        writer.write_bytes(&script_bytes);
    }
}
