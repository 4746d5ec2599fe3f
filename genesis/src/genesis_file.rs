//! Genesis description loaded from TOML.

use ol_account::AccountConfig;
use ol_types::AccountAddress;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::GenesisError;

/// Everything needed to build the initial account state.
///
/// ```toml
/// [config]
/// limit_check = "strict"
///
/// [[accounts]]
/// auth_key = "0x…"          # ordinary account, lives at the key's address
/// balance = 1000
///
/// [[accounts]]
/// address = "0x…"           # legacy account, migrated to this address
/// auth_key = "0x…"
/// balance = 5000
/// slow_unlocked = 200
/// validator = true
///
/// [[accounts]]
/// auth_key = "0x…"
/// balance = 700
/// donor_directed = true     # community wallet, reported apart
///
/// [[transfers]]
/// sender = "0x…"
/// recipient = "0x…"
/// amount = 10
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GenesisFile {
    #[serde(default)]
    pub config: AccountConfig,

    #[serde(default)]
    pub accounts: Vec<GenesisAccount>,

    #[serde(default)]
    pub transfers: Vec<GenesisTransfer>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    /// Hex-encoded authentication key bytes.
    pub auth_key: String,

    /// Explicit address. When set and different from the key's derived
    /// address, the account is migrated as a legacy account.
    #[serde(default)]
    pub address: Option<AccountAddress>,

    #[serde(default)]
    pub balance: u64,

    /// Makes the account a slow wallet with this much unlocked.
    #[serde(default)]
    pub slow_unlocked: Option<u64>,

    #[serde(default)]
    pub donor_directed: bool,

    #[serde(default)]
    pub validator: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisTransfer {
    pub sender: AccountAddress,
    pub recipient: AccountAddress,
    pub amount: u64,
}

impl GenesisAccount {
    pub fn auth_key_bytes(&self, index: usize) -> Result<Vec<u8>, GenesisError> {
        let digits = self.auth_key.strip_prefix("0x").unwrap_or(&self.auth_key);
        hex::decode(digits).map_err(|e| GenesisError::InvalidAccount {
            index,
            reason: format!("auth_key is not hex: {e}"),
        })
    }
}

impl GenesisFile {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GenesisError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, GenesisError> {
        toml::from_str(s).map_err(|e| GenesisError::Parse(e.to_string()))
    }
}
