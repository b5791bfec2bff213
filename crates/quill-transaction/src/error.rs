/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// The transaction structure is invalid (e.g. an input index out of range).
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// An error occurred during binary/hex serialization or deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// An error occurred while producing an unlocking script.
    #[error("signing error: {0}")]
    SigningError(String),

    /// The script class named by a template has no spending path, so no
    /// unlocking handle can be produced. Distinct from codec and signing
    /// failures.
    #[error("unlock is not supported for {0} outputs")]
    UnlockNotSupported(&'static str),

    /// A data-carrier field is too long to encode its own length as a
    /// single push opcode byte.
    #[error("field of {0} bytes cannot be encoded as a single-byte push")]
    FieldTooLong(usize),

    /// An underlying script error.
    #[error("script error: {0}")]
    Script(#[from] quill_script::ScriptError),

    /// An underlying primitives error.
    #[error("primitives error: {0}")]
    Primitives(#[from] quill_primitives::PrimitivesError),
}
