//! Basic ledger types

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stored value type (the native integer domain of the ledger)
pub type Value = u128;

/// 20-byte caller identity type
///
/// Identities are opaque tokens supplied by the execution environment per
/// call; the ledger never mints or retires them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identity([u8; 20]);

impl Identity {
    /// Create a new identity from byte array
    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Create identity from slice (panics if length != 20)
    pub fn from_slice(slice: &[u8]) -> Self {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(slice);
        Self(bytes)
    }

    /// Get the underlying byte array
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Create from hex string
    pub fn from_hex(hex: &str) -> CoreResult<Self> {
        let bytes = hex::decode(hex)?;
        if bytes.len() != 20 {
            return Err(CoreError::InvalidIdentity(format!(
                "expected 20 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self::from_slice(&bytes))
    }

    /// Zero identity (all bytes are 0)
    pub fn zero() -> Self {
        Self([0u8; 20])
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl From<[u8; 20]> for Identity {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Identity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_creation() {
        let id = Identity::zero();
        assert_eq!(id.to_hex(), "0000000000000000000000000000000000000000");

        let bytes = [1u8; 20];
        let id2 = Identity::new(bytes);
        assert_eq!(id2.to_hex(), "0101010101010101010101010101010101010101");
    }

    #[test]
    fn test_identity_from_hex() {
        let hex = "1234567890abcdef1234567890abcdef12345678";
        let id = Identity::from_hex(hex).unwrap();
        assert_eq!(id.to_hex(), hex);
    }

    #[test]
    fn test_identity_from_hex_wrong_length() {
        assert!(matches!(
            Identity::from_hex("1234"),
            Err(CoreError::InvalidIdentity(_))
        ));
    }

    #[test]
    fn test_identity_from_hex_bad_digit() {
        assert!(matches!(
            Identity::from_hex("zz34567890abcdef1234567890abcdef12345678"),
            Err(CoreError::HexDecode(_))
        ));
    }

    #[test]
    fn test_identity_display() {
        let id = Identity::new([0xabu8; 20]);
        assert_eq!(
            id.to_string(),
            "0xabababababababababababababababababababab"
        );
    }

    #[test]
    fn test_identity_comparable() {
        let a = Identity::new([1u8; 20]);
        let b = Identity::new([2u8; 20]);
        assert_ne!(a, b);
        assert_eq!(a, Identity::new([1u8; 20]));
        assert!(a < b);
    }

    #[test]
    fn test_identity_serde_roundtrip() {
        let id = Identity::new([7u8; 20]);
        let json = serde_json::to_string(&id).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
