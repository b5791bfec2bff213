//! Hash function primitives.
//!
//! SHA-256 and double SHA-256 are the two digests the wire format needs:
//! double SHA-256 is the standard hash for transaction ids.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute the double SHA-256 (SHA-256d) hash of the input data.
///
/// This is the hash used for transaction ids: SHA-256(SHA-256(data)).
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte double-SHA-256 digest.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify sha256 against the FIPS 180-2 "abc" test vector.
    #[test]
    fn test_sha256_abc() {
        let digest = sha256(b"abc");
        assert_eq!(
            hex::encode(digest),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    /// Verify sha256 of empty input.
    #[test]
    fn test_sha256_empty() {
        let digest = sha256(b"");
        assert_eq!(
            hex::encode(digest),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    /// Verify double SHA-256 of a short ASCII string.
    #[test]
    fn test_sha256d_hello() {
        let digest = sha256d(b"hello");
        assert_eq!(
            hex::encode(digest),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    /// sha256d must equal sha256 applied twice.
    #[test]
    fn test_sha256d_is_double_sha256() {
        let data = b"quill";
        assert_eq!(sha256d(data), sha256(&sha256(data)));
    }
}
