//! Account address type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// A 32-byte account address.
///
/// Displayed as `0x` followed by 64 lowercase hex digits. Parsing accepts the
/// short form used for framework addresses (`0x1`), left-padding with zeroes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountAddress([u8; 32]);

impl AccountAddress {
    pub const LENGTH: usize = 32;

    pub const ZERO: Self = Self([0u8; 32]);

    /// The framework address (`0x1`) the system signer acts as.
    pub const SYSTEM: Self = {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        Self(bytes)
    };

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Short-hand constructor for tests and fixtures: the address whose last
    /// eight bytes hold `n` big-endian.
    pub fn from_u64(n: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&n.to_be_bytes());
        Self(bytes)
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex_literal(s: &str) -> Result<Self, TypesError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() || digits.len() > Self::LENGTH * 2 {
            return Err(TypesError::InvalidAddress(s.to_string()));
        }
        let padded = format!("{:0>64}", digits);
        let decoded = hex::decode(&padded).map_err(|e| TypesError::InvalidHex(e.to_string()))?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }

    pub fn to_hex_literal(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountAddress({})", self.to_hex_literal())
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_literal())
    }
}

impl FromStr for AccountAddress {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_literal(s)
    }
}

impl Serialize for AccountAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_literal())
    }
}

impl<'de> Deserialize<'de> for AccountAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex_literal(&s).map_err(serde::de::Error::custom)
    }
}
