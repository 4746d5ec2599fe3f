//! Authentication keys and their derived addresses.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::address::AccountAddress;
use crate::error::TypesError;

type Blake2b256 = Blake2b<U32>;

/// Scheme byte appended to a single Ed25519 public key before hashing.
const SINGLE_KEY_SCHEME: u8 = 0x00;

/// A 32-byte authentication key.
///
/// Ordinary accounts live at the address equal to the key they were created
/// under. Legacy accounts predate that derivation and live elsewhere, so the
/// registry keeps an explicit key -> address lookup for them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AuthKey([u8; 32]);

impl AuthKey {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive the key for a single Ed25519 public key.
    pub fn from_public_key(public_key: &[u8; 32]) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update(public_key);
        hasher.update([SINGLE_KEY_SCHEME]);
        let result = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&result);
        Self(bytes)
    }

    /// Accept raw key bytes as exported from a legacy chain.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypesError> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| TypesError::InvalidAuthKeyLength(bytes.len()))?;
        Ok(Self(arr))
    }

    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| TypesError::InvalidHex(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The address an ordinary account created under this key receives.
    pub fn derived_address(&self) -> AccountAddress {
        AccountAddress::new(self.0)
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthKey({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for AuthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AuthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn public_key_derivation_is_deterministic() {
        let pk = [7u8; 32];
        assert_eq!(AuthKey::from_public_key(&pk), AuthKey::from_public_key(&pk));
        assert_ne!(AuthKey::from_public_key(&pk), AuthKey::from_public_key(&[8u8; 32]));
    }

    #[test]
    fn derivation_includes_scheme_byte() {
        let pk = [3u8; 32];
        let key = AuthKey::from_public_key(&pk);
        assert_ne!(key.as_bytes(), &pk);
    }

    #[test]
    fn legacy_bytes_must_be_32_long() {
        assert_eq!(
            AuthKey::from_bytes(&[1u8; 16]),
            Err(TypesError::InvalidAuthKeyLength(16))
        );
        assert!(AuthKey::from_bytes(&[1u8; 32]).is_ok());
    }

    #[test]
    fn hex_accepts_prefix() {
        let hex_key = format!("0x{}", "ab".repeat(32));
        let key = AuthKey::from_hex(&hex_key).unwrap();
        assert_eq!(key.as_bytes(), &[0xab; 32]);
        assert_eq!(key.to_string(), hex_key);
    }

    proptest! {
        /// The derived address carries the key bytes unchanged.
        #[test]
        fn derived_address_matches_key_bytes(bytes in prop::array::uniform32(0u8..)) {
            let key = AuthKey::new(bytes);
            let derived = key.derived_address();
            prop_assert_eq!(derived.as_bytes(), &bytes);
        }
    }
}
