//! Digest type for record hashing.
//!
//! Wraps Blake3 with a strong type so record hashes cannot be confused with
//! arbitrary byte arrays.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte Blake3 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest(pub [u8; 32]);

impl Digest {
    /// Compute the Blake3 digest of the given data.
    pub fn hash(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The zero digest. Used as the "no predecessor" marker on genesis.
    pub const ZERO: Self = Self([0u8; 32]);
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Digest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_deterministic() {
        let data = b"test data";
        let h1 = Digest::hash(data);
        let h2 = Digest::hash(data);
        assert_eq!(h1, h2);

        let different = b"different data";
        let h3 = Digest::hash(different);
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_digest_hex_roundtrip() {
        let d = Digest::hash(b"roundtrip");
        let hex = d.to_hex();
        let recovered = Digest::from_hex(&hex).unwrap();
        assert_eq!(d, recovered);
    }

    #[test]
    fn test_digest_from_hex_rejects_bad_length() {
        assert!(Digest::from_hex("abcd").is_err());
    }

    #[test]
    fn test_digest_display_truncated() {
        let d = Digest::from_bytes([0xab; 32]);
        assert_eq!(format!("{}", d), "abababababababab");
    }

    #[test]
    fn test_zero_marker() {
        assert_eq!(Digest::ZERO.as_bytes(), &[0u8; 32]);
    }
}
