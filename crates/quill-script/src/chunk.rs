//! Script chunks: one opcode plus its optional payload.
//!
//! A chunk is the unit of script serialization. Equality is structural
//! and chunks carry no identity beyond their position in a script.

use crate::opcodes::*;
use crate::ScriptError;

/// A single element of a script.
///
/// Either a standalone opcode (`data` absent) or a data push carrying the
/// opcode byte and the pushed bytes. By convention a direct push (op 1
/// through 75) has data of exactly `op` bytes and a PUSHDATA-class push
/// has data that fits its prefix width; the convention is not enforced at
/// construction, and serialization writes whatever lengths are actually
/// present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptChunk {
    /// The opcode byte. For direct pushes this is also the data length.
    pub op: u8,
    /// The data payload, if this chunk is a push operation.
    pub data: Option<Vec<u8>>,
}

impl ScriptChunk {
    /// Create a chunk for a standalone opcode.
    pub fn op(op: u8) -> Self {
        ScriptChunk { op, data: None }
    }

    /// Create a push chunk with an explicit opcode and payload.
    pub fn push(op: u8, data: Vec<u8>) -> Self {
        ScriptChunk {
            op,
            data: Some(data),
        }
    }

    /// Render this chunk as a single ASM token.
    ///
    /// A push chunk renders as the hex of its payload only; the opcode is
    /// not shown. A bare opcode renders as `0` for the empty push, `-1`
    /// for the negative-one push, its mnemonic when it has one, and
    /// otherwise as the two-digit hex of its byte value.
    pub fn to_asm_token(&self) -> String {
        match &self.data {
            Some(data) => hex::encode(data),
            None => match self.op {
                OP_0 => "0".to_string(),
                OP_1NEGATE => "-1".to_string(),
                op => match opcode_to_string(op) {
                    Some(name) => name.to_string(),
                    None => format!("{:02x}", op),
                },
            },
        }
    }
}

/// Compute the minimal push opcode for a payload of the given length.
///
/// Lengths under 76 push directly (the opcode is the length), longer
/// payloads use the narrowest PUSHDATA variant that can express them.
///
/// # Arguments
/// * `data_len` - The payload length in bytes.
///
/// # Returns
/// The push opcode, or an error if the payload exceeds the 4-byte
/// prefix range.
pub fn push_op_for_len(data_len: usize) -> Result<u8, ScriptError> {
    if data_len < OP_PUSHDATA1 as usize {
        Ok(data_len as u8)
    } else if data_len <= 0xff {
        Ok(OP_PUSHDATA1)
    } else if data_len <= 0xffff {
        Ok(OP_PUSHDATA2)
    } else if data_len <= 0xffff_ffff {
        Ok(OP_PUSHDATA4)
    } else {
        Err(ScriptError::DataTooBig(data_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A data push renders as payload hex with no opcode shown.
    #[test]
    fn test_asm_token_data() {
        let chunk = ScriptChunk::push(3, vec![0xab, 0xcd, 0xef]);
        assert_eq!(chunk.to_asm_token(), "abcdef");
    }

    /// The empty-push and negative-one opcodes render as 0 and -1.
    #[test]
    fn test_asm_token_specials() {
        assert_eq!(ScriptChunk::op(OP_0).to_asm_token(), "0");
        assert_eq!(ScriptChunk::op(OP_1NEGATE).to_asm_token(), "-1");
    }

    /// Named opcodes render by mnemonic.
    #[test]
    fn test_asm_token_mnemonic() {
        assert_eq!(ScriptChunk::op(OP_DUP).to_asm_token(), "OP_DUP");
        assert_eq!(ScriptChunk::op(OP_1).to_asm_token(), "OP_1");
    }

    /// Nameless opcodes render as two-digit hex of the byte value.
    #[test]
    fn test_asm_token_nameless() {
        assert_eq!(ScriptChunk::op(0x05).to_asm_token(), "05");
        assert_eq!(ScriptChunk::op(0xba).to_asm_token(), "ba");
    }

    /// A PUSHDATA chunk still renders as payload hex, losing the
    /// prefix-width choice.
    #[test]
    fn test_asm_token_pushdata_loses_width() {
        let chunk = ScriptChunk::push(OP_PUSHDATA1, vec![0x01, 0x02]);
        assert_eq!(chunk.to_asm_token(), "0102");
    }

    /// Minimal push opcode selection at each width boundary.
    #[test]
    fn test_push_op_for_len_boundaries() {
        assert_eq!(push_op_for_len(0).unwrap(), 0);
        assert_eq!(push_op_for_len(75).unwrap(), 75);
        assert_eq!(push_op_for_len(76).unwrap(), OP_PUSHDATA1);
        assert_eq!(push_op_for_len(255).unwrap(), OP_PUSHDATA1);
        assert_eq!(push_op_for_len(256).unwrap(), OP_PUSHDATA2);
        assert_eq!(push_op_for_len(65535).unwrap(), OP_PUSHDATA2);
        assert_eq!(push_op_for_len(65536).unwrap(), OP_PUSHDATA4);
    }

    /// Chunk equality is structural.
    #[test]
    fn test_structural_equality() {
        assert_eq!(
            ScriptChunk::push(2, vec![1, 2]),
            ScriptChunk::push(2, vec![1, 2])
        );
        assert_ne!(ScriptChunk::op(OP_DUP), ScriptChunk::op(OP_DROP));
        assert_ne!(
            ScriptChunk::op(2),
            ScriptChunk::push(2, vec![])
        );
    }
}
