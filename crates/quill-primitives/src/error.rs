/// Error types for primitive operations.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    /// The bytes do not encode a valid secp256k1 public key.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Invalid hex string.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// A read ran past the end of the input buffer.
    #[error("unexpected end of data")]
    UnexpectedEof,
}
