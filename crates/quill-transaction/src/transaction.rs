//! The transaction object: version, inputs, outputs, and lock time.
//!
//! Supports binary and hex serialization, transaction id computation,
//! and installing unlocking scripts through a template's deferred
//! signing handle.

use quill_primitives::hash::sha256d;
use quill_primitives::util::{ByteReader, ByteWriter, VarInt};

use crate::input::TransactionInput;
use crate::output::TransactionOutput;
use crate::template::UnlockingScriptTemplate;
use crate::TransactionError;

/// A transaction: a version, ordered inputs and outputs, and a lock time.
///
/// # Wire format
///
/// | Field        | Size                 |
/// |--------------|----------------------|
/// | version      | 4 bytes (LE)         |
/// | input count  | VarInt               |
/// | inputs       | variable (per input) |
/// | output count | VarInt               |
/// | outputs      | variable (per output)|
/// | lock_time    | 4 bytes (LE)         |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction format version.
    pub version: u32,

    /// Ordered list of inputs.
    pub inputs: Vec<TransactionInput>,

    /// Ordered list of outputs.
    pub outputs: Vec<TransactionOutput>,

    /// Lock time. If non-zero, the transaction is not valid until the
    /// given block height or Unix timestamp.
    pub lock_time: u32,
}

impl Transaction {
    /// Create an empty transaction with version 1 and lock time 0.
    pub fn new() -> Self {
        Transaction {
            version: 1,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }

    // -----------------------------------------------------------------
    // Deserialization
    // -----------------------------------------------------------------

    /// Parse a transaction from a hex-encoded string.
    ///
    /// # Arguments
    /// * `hex_str` - Hex encoding of the raw transaction bytes.
    ///
    /// # Returns
    /// The decoded transaction, or a serialization error.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(hex_str).map_err(|e| {
            TransactionError::SerializationError(format!("invalid hex: {}", e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse a transaction from raw bytes.
    ///
    /// The slice must contain exactly one transaction with no trailing
    /// data.
    ///
    /// # Arguments
    /// * `bytes` - The raw transaction bytes.
    ///
    /// # Returns
    /// The decoded transaction, or a serialization error if the data is
    /// truncated, malformed, or has trailing bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = ByteReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TransactionError::SerializationError(format!(
                "trailing {} bytes after transaction",
                reader.remaining()
            )));
        }
        Ok(tx)
    }

    /// Deserialize a transaction from a reader.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let version = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading version: {}", e))
        })?;

        let input_count = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading input count: {}", e))
        })?;
        let mut inputs = Vec::with_capacity(input_count.value() as usize);
        for _ in 0..input_count.value() {
            inputs.push(TransactionInput::read_from(reader)?);
        }

        let output_count = reader.read_varint().map_err(|e| {
            TransactionError::SerializationError(format!("reading output count: {}", e))
        })?;
        let mut outputs = Vec::with_capacity(output_count.value() as usize);
        for _ in 0..output_count.value() {
            outputs.push(TransactionOutput::read_from(reader)?);
        }

        let lock_time = reader.read_u32_le().map_err(|e| {
            TransactionError::SerializationError(format!("reading lock time: {}", e))
        })?;

        Ok(Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    /// Serialize this transaction to raw bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::with_capacity(256);
        writer.write_u32_le(self.version);

        writer.write_varint(VarInt::from(self.inputs.len()));
        for input in &self.inputs {
            input.write_to(&mut writer);
        }

        writer.write_varint(VarInt::from(self.outputs.len()));
        for output in &self.outputs {
            output.write_to(&mut writer);
        }

        writer.write_u32_le(self.lock_time);
        writer.into_bytes()
    }

    /// Serialize this transaction as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Compute the transaction id.
    ///
    /// The id is the double SHA-256 of the serialized transaction, shown
    /// in reversed (display) byte order as lowercase hex.
    pub fn txid(&self) -> String {
        let mut digest = sha256d(&self.to_bytes());
        digest.reverse();
        hex::encode(digest)
    }

    // -----------------------------------------------------------------
    // Building and signing
    // -----------------------------------------------------------------

    /// Append an input.
    pub fn add_input(&mut self, input: TransactionInput) {
        self.inputs.push(input);
    }

    /// Append an output.
    pub fn add_output(&mut self, output: TransactionOutput) {
        self.outputs.push(output);
    }

    /// Produce and install the unlocking script for one input.
    ///
    /// Awaits the template's deferred signing handle against this
    /// transaction, then stores the resulting script on the input.
    /// Handles for distinct inputs are independent, so a caller holding
    /// separate transaction copies may run them concurrently; this
    /// convenience method signs one input at a time.
    ///
    /// # Arguments
    /// * `input_index` - Index of the input to sign.
    /// * `template` - The unlocking template to sign with.
    ///
    /// # Returns
    /// `Ok(())` once the script is installed, or the template's error.
    pub async fn sign_input<T>(
        &mut self,
        input_index: u32,
        template: &T,
    ) -> Result<(), TransactionError>
    where
        T: UnlockingScriptTemplate,
    {
        let idx = input_index as usize;
        if idx >= self.inputs.len() {
            return Err(TransactionError::InvalidTransaction(format!(
                "input index {} out of range (tx has {} inputs)",
                idx,
                self.inputs.len()
            )));
        }
        let script = template.sign(&*self, input_index).await?;
        self.inputs[idx].unlocking_script = Some(script);
        Ok(())
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}
