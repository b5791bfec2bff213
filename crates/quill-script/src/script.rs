//! The script codec: ordered chunk sequences and their binary, hex, and
//! ASM forms.
//!
//! A script is held as its parsed chunk sequence rather than raw bytes,
//! because the decoding contract is chunk-level: binary input from the
//! wire is not guaranteed well formed, and the decoder must degrade
//! gracefully instead of failing. Serialization writes each chunk's
//! actual data length even when it disagrees with what the opcode alone
//! would imply; constructing consistent chunks is the caller's job.

use std::fmt;

use crate::chunk::{push_op_for_len, ScriptChunk};
use crate::opcodes::*;
use crate::ScriptError;

/// A script: an ordered sequence of chunks.
///
/// Order is the serialized order. Scripts are immutable value objects in
/// practice; the `push_*` builders exist for construction and the parse
/// and serialize operations are pure functions of the content.
#[derive(Clone, PartialEq, Eq)]
pub struct Script {
    chunks: Vec<ScriptChunk>,
}

/// A script attached to a transaction output, defining spending conditions.
///
/// Structurally identical to any other script; the alias records intent.
pub type LockingScript = Script;

/// A script attached to a transaction input, satisfying an output's
/// spending conditions.
pub type UnlockingScript = Script;

impl Script {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Create a new empty script.
    pub fn new() -> Self {
        Script { chunks: Vec::new() }
    }

    /// Create a script from an existing chunk sequence.
    pub fn from_chunks(chunks: Vec<ScriptChunk>) -> Self {
        Script { chunks }
    }

    /// Parse a script from its ASM text form.
    ///
    /// The input is split on single spaces. Each token is matched in
    /// order: the literal `0` (empty push), the literal `-1`, a known
    /// mnemonic, and finally canonical lowercase hex push data. A hex
    /// token must re-encode to itself exactly, which rejects odd-length
    /// strings, non-hex characters, and uppercase digits. The push opcode
    /// is derived from the decoded length, so PUSHDATA-class pushes
    /// cannot be expressed with an explicit width in this form.
    ///
    /// # Arguments
    /// * `asm` - A space-separated ASM string.
    ///
    /// # Returns
    /// The parsed `Script`, or `InvalidAsmToken` naming the first bad token.
    pub fn from_asm(asm: &str) -> Result<Self, ScriptError> {
        let mut chunks = Vec::new();
        if asm.is_empty() {
            return Ok(Script { chunks });
        }
        for token in asm.split(' ') {
            if token == "0" {
                chunks.push(ScriptChunk::op(OP_0));
            } else if token == "-1" {
                chunks.push(ScriptChunk::op(OP_1NEGATE));
            } else if let Some(op) = string_to_opcode(token) {
                chunks.push(ScriptChunk::op(op));
            } else {
                let data = hex::decode(token)
                    .map_err(|_| ScriptError::InvalidAsmToken(token.to_string()))?;
                if hex::encode(&data) != token {
                    return Err(ScriptError::InvalidAsmToken(token.to_string()));
                }
                let op = match data.len() {
                    len if len < OP_PUSHDATA1 as usize => len as u8,
                    len if len <= 0xff => OP_PUSHDATA1,
                    len if len <= 0xffff => OP_PUSHDATA2,
                    _ => OP_PUSHDATA4,
                };
                chunks.push(ScriptChunk::push(op, data));
            }
        }
        Ok(Script { chunks })
    }

    /// Parse a script from a hex string.
    ///
    /// # Arguments
    /// * `hex_str` - Hex encoding of the raw script bytes.
    ///
    /// # Returns
    /// The parsed `Script`, or `InvalidHex` if the string is not hex.
    pub fn from_hex(hex_str: &str) -> Result<Self, ScriptError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| ScriptError::InvalidHex(e.to_string()))?;
        Ok(Self::from_binary(&bytes))
    }

    /// Parse a script from raw bytes.
    ///
    /// This decoder is total: scripts found on the wire are not
    /// guaranteed well formed, so truncation is never an error. If a
    /// PUSHDATA length prefix cannot be fully read, the remaining input
    /// is consumed and the chunk's data is empty. If a declared payload
    /// runs past the end of the input, the chunk receives the bytes that
    /// are actually present. Decoding is a single left-to-right pass and
    /// always consumes the whole input.
    ///
    /// # Arguments
    /// * `bytes` - The raw script bytes.
    ///
    /// # Returns
    /// The parsed `Script`. Never fails.
    pub fn from_binary(bytes: &[u8]) -> Self {
        let mut chunks = Vec::new();
        let mut pos = 0;
        while pos < bytes.len() {
            let op = bytes[pos];
            pos += 1;
            match op {
                1..=0x4b => {
                    let data = read_clamped(bytes, &mut pos, op as usize);
                    chunks.push(ScriptChunk::push(op, data));
                }
                OP_PUSHDATA1 => {
                    let data = match read_le_length(bytes, &mut pos, 1) {
                        Some(len) => read_clamped(bytes, &mut pos, len),
                        None => Vec::new(),
                    };
                    chunks.push(ScriptChunk::push(op, data));
                }
                OP_PUSHDATA2 => {
                    let data = match read_le_length(bytes, &mut pos, 2) {
                        Some(len) => read_clamped(bytes, &mut pos, len),
                        None => Vec::new(),
                    };
                    chunks.push(ScriptChunk::push(op, data));
                }
                OP_PUSHDATA4 => {
                    let data = match read_le_length(bytes, &mut pos, 4) {
                        Some(len) => read_clamped(bytes, &mut pos, len),
                        None => Vec::new(),
                    };
                    chunks.push(ScriptChunk::push(op, data));
                }
                _ => {
                    chunks.push(ScriptChunk::op(op));
                }
            }
        }
        Script { chunks }
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Render the script in ASM text form.
    ///
    /// Tokens are space joined. Pushes render as payload hex only, so a
    /// push that carries an explicit PUSHDATA width loses that choice
    /// here: ASM to binary is not byte-exact for such pushes, only hex
    /// and binary round-trip exactly.
    pub fn to_asm(&self) -> String {
        self.chunks
            .iter()
            .map(|chunk| chunk.to_asm_token())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Encode the script as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_binary())
    }

    /// Serialize the script to raw bytes.
    ///
    /// Per chunk: the opcode byte, then, only if data is present, the
    /// length prefix its opcode class calls for (none for direct pushes,
    /// 1/2/4 little-endian bytes for the PUSHDATA variants) followed by
    /// the payload. The written length is always the actual data length;
    /// a chunk whose data disagrees with its opcode is written as is.
    /// Data attached to a non-push opcode has no encoding and is dropped.
    pub fn to_binary(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        for chunk in &self.chunks {
            out.push(chunk.op);
            if let Some(data) = &chunk.data {
                match chunk.op {
                    op if op < OP_PUSHDATA1 => {
                        out.extend_from_slice(data);
                    }
                    OP_PUSHDATA1 => {
                        out.push(data.len() as u8);
                        out.extend_from_slice(data);
                    }
                    OP_PUSHDATA2 => {
                        out.extend_from_slice(&(data.len() as u16).to_le_bytes());
                        out.extend_from_slice(data);
                    }
                    OP_PUSHDATA4 => {
                        out.extend_from_slice(&(data.len() as u32).to_le_bytes());
                        out.extend_from_slice(data);
                    }
                    _ => {}
                }
            }
        }
        out
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// Return the parsed chunk sequence.
    pub fn chunks(&self) -> &[ScriptChunk] {
        &self.chunks
    }

    /// Consume the script and return its chunk sequence.
    pub fn into_chunks(self) -> Vec<ScriptChunk> {
        self.chunks
    }

    /// Return the serialized byte length of the script.
    pub fn len(&self) -> usize {
        self.chunks
            .iter()
            .map(|chunk| {
                1 + match &chunk.data {
                    None => 0,
                    Some(data) => match chunk.op {
                        op if op < OP_PUSHDATA1 => data.len(),
                        OP_PUSHDATA1 => 1 + data.len(),
                        OP_PUSHDATA2 => 2 + data.len(),
                        OP_PUSHDATA4 => 4 + data.len(),
                        _ => 0,
                    },
                }
            })
            .sum()
    }

    /// Check whether the script has no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    // -----------------------------------------------------------------------
    // Classification
    // -----------------------------------------------------------------------

    /// Check if this is a Pay-to-Public-Key-Hash output script.
    ///
    /// Pattern: OP_DUP OP_HASH160 <20 bytes> OP_EQUALVERIFY OP_CHECKSIG
    pub fn is_p2pkh(&self) -> bool {
        let c = &self.chunks;
        c.len() == 5
            && c[0].op == OP_DUP
            && c[1].op == OP_HASH160
            && matches!(&c[2].data, Some(data) if data.len() == 20)
            && c[2].op == 20
            && c[3].op == OP_EQUALVERIFY
            && c[4].op == OP_CHECKSIG
    }

    /// Check if this is a data-carrier output script.
    ///
    /// True when the script begins with OP_RETURN or OP_0 OP_RETURN.
    pub fn is_data(&self) -> bool {
        let c = &self.chunks;
        (!c.is_empty() && c[0].op == OP_RETURN && c[0].data.is_none())
            || (c.len() > 1
                && c[0].op == OP_0
                && c[0].data.is_none()
                && c[1].op == OP_RETURN)
    }

    /// Check if the script consists solely of push operations.
    ///
    /// Opcodes through OP_16 count as pushes; anything above does not.
    pub fn is_push_only(&self) -> bool {
        self.chunks.iter().all(|chunk| chunk.op <= OP_16)
    }

    // -----------------------------------------------------------------------
    // Building
    // -----------------------------------------------------------------------

    /// Append a standalone opcode.
    ///
    /// Push-class opcodes (direct lengths and the PUSHDATA variants) are
    /// rejected; use `push_data` so the payload travels with its opcode.
    ///
    /// # Arguments
    /// * `op` - The opcode byte to append.
    ///
    /// # Returns
    /// `Ok(())`, or `InvalidOpcodeType` for a push-class opcode.
    pub fn push_opcode(&mut self, op: u8) -> Result<(), ScriptError> {
        if (1..=OP_PUSHDATA4).contains(&op) {
            let name = opcode_to_string(op)
                .map(String::from)
                .unwrap_or_else(|| format!("{:#04x}", op));
            return Err(ScriptError::InvalidOpcodeType(name));
        }
        self.chunks.push(ScriptChunk::op(op));
        Ok(())
    }

    /// Append a data push, choosing the minimal-width push opcode.
    ///
    /// # Arguments
    /// * `data` - The payload bytes to push.
    ///
    /// # Returns
    /// `Ok(())`, or `DataTooBig` if no length prefix can express the payload.
    pub fn push_data(&mut self, data: &[u8]) -> Result<(), ScriptError> {
        let op = push_op_for_len(data.len())?;
        self.chunks.push(ScriptChunk::push(op, data.to_vec()));
        Ok(())
    }
}

/// Read up to `len` bytes, clamped to what remains in the input.
fn read_clamped(bytes: &[u8], pos: &mut usize, len: usize) -> Vec<u8> {
    let end = pos.saturating_add(len).min(bytes.len());
    let data = bytes[*pos..end].to_vec();
    *pos = end;
    data
}

/// Read a little-endian length prefix of `width` bytes.
///
/// Returns `None` and consumes the remaining input when fewer than
/// `width` bytes are available.
fn read_le_length(bytes: &[u8], pos: &mut usize, width: usize) -> Option<usize> {
    if bytes.len() - *pos < width {
        *pos = bytes.len();
        return None;
    }
    let mut len = 0usize;
    for i in 0..width {
        len |= (bytes[*pos + i] as usize) << (8 * i);
    }
    *pos += width;
    Some(len)
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Script {
    /// Display the script as a lowercase hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", self.to_hex())
    }
}

impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Script::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
