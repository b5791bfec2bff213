//! secp256k1 public key wrapper.
//!
//! Parsing validates that the encoded point is actually on the curve.
//! The `Display` form, compressed SEC1 as lowercase hex, is the canonical
//! string representation consumed verbatim by data-carrier script
//! templates.

use std::fmt;

use k256::ecdsa::VerifyingKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::PrimitivesError;

/// Length of a compressed public key in bytes (prefix + 32 byte x-coordinate).
const COMPRESSED_LEN: usize = 33;

/// A validated secp256k1 public key.
///
/// Wraps a k256 `VerifyingKey`. Construction rejects byte strings that do
/// not encode a point on the curve, so a `PublicKey` value is always valid.
#[derive(Clone, Debug)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create a public key from raw SEC1 encoded bytes.
    ///
    /// Accepts both compressed (33-byte) and uncompressed (65-byte) formats.
    ///
    /// # Arguments
    /// * `bytes` - SEC1-encoded public key bytes.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the bytes do not
    /// represent a valid curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "public key bytes are empty".to_string(),
            ));
        }
        let vk = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner: vk })
    }

    /// Create a public key from a hex-encoded SEC1 string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string of a compressed (66 chars) or
    ///   uncompressed (130 chars) key.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the hex or point is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| PrimitivesError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the public key in compressed SEC1 format (33 bytes).
    ///
    /// The first byte is 0x02 (even Y) or 0x03 (odd Y), followed by the
    /// 32-byte X coordinate.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key as a lowercase hexadecimal string of its
    /// compressed form.
    ///
    /// This is the canonical string representation; `Display` produces
    /// the same output.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_compressed() == other.to_compressed()
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPRESSED_EVEN: &str =
        "02ce0b14fb842b1ba549fdd675c98075f12e9c510f8ef52bd021a9a1f4809d3b4d";

    /// Parse a compressed key with even Y and round-trip it.
    #[test]
    fn test_compressed_roundtrip() {
        let pk = PublicKey::from_hex(COMPRESSED_EVEN).expect("valid key");
        assert_eq!(pk.to_hex(), COMPRESSED_EVEN);
        assert_eq!(hex::encode(pk.to_compressed()), COMPRESSED_EVEN);
    }

    /// Parse an uncompressed key and verify it compresses.
    #[test]
    fn test_uncompressed_accepted() {
        let uncompressed = "0411db93e1dcdb8a016b49840f8c53bc1eb68a382e97b1482ecad7b148a6909a5cb2e0eaddfb84ccf9744464f82e160bfa9b8b64f9d4c03f999b8643f656b412a3";
        let pk = PublicKey::from_hex(uncompressed).expect("valid key");
        // Y ends in ...a3 (odd), so the compressed prefix is 0x03.
        assert_eq!(pk.to_compressed()[0], 0x03);
    }

    /// An X coordinate not on the curve must be rejected.
    #[test]
    fn test_off_curve_rejected() {
        let tampered = "0415db93e1dcdb8a016b49840f8c53bc1eb68a382e97b1482ecad7b148a6909a5cb2e0eaddfb84ccf9744464f82e160bfa9b8b64f9d4c03f999b8643f656b412a3";
        assert!(PublicKey::from_hex(tampered).is_err());
    }

    /// Empty and wrong-length inputs must be rejected.
    #[test]
    fn test_bad_lengths_rejected() {
        assert!(PublicKey::from_bytes(&[]).is_err());
        assert!(PublicKey::from_bytes(&[0x05]).is_err());
        assert!(PublicKey::from_hex("02ce0b").is_err());
    }

    /// Invalid hex must surface as a hex error, not a panic.
    #[test]
    fn test_invalid_hex_rejected() {
        assert!(matches!(
            PublicKey::from_hex("zz"),
            Err(PrimitivesError::InvalidHex(_))
        ));
    }

    /// Display output equals the compressed hex form.
    #[test]
    fn test_display_is_compressed_hex() {
        let pk = PublicKey::from_hex(COMPRESSED_EVEN).expect("valid key");
        assert_eq!(format!("{}", pk), COMPRESSED_EVEN);
    }

    /// Equality is structural over the compressed encoding.
    #[test]
    fn test_equality() {
        let pk1 = PublicKey::from_hex(COMPRESSED_EVEN).expect("valid key");
        let pk2 = PublicKey::from_hex(COMPRESSED_EVEN).expect("valid key");
        assert_eq!(pk1, pk2);
    }
}
