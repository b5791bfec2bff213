/// Error types for script encoding and decoding.
///
/// Binary decoding is resilient and never fails; these errors cover the
/// text-form parsers and the construction helpers.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// An ASM token is neither a mnemonic nor canonical hex.
    #[error("invalid token in script asm: '{0}'")]
    InvalidAsmToken(String),

    /// Push data exceeds the largest expressible length prefix.
    #[error("push data too big: {0} bytes")]
    DataTooBig(usize),

    /// Attempted to append a push-class opcode without its payload.
    #[error("use push_data for push opcodes: {0}")]
    InvalidOpcodeType(String),
}
