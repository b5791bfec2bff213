/// Quill SDK - Hashing, wire-format, and public key primitives.
///
/// Provides the SHA-256 hash functions used for transaction ids, the
/// VarInt reader/writer plumbing for Bitcoin-style binary formats, and
/// a validated secp256k1 public key type.

pub mod hash;
pub mod keys;
pub mod util;

mod error;
pub use error::PrimitivesError;
pub use keys::PublicKey;
