//! Account-layer configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::AccountError;

/// How an ordinary transfer amount is compared with the unlocked limit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitCheck {
    /// `amount < unlocked`. An amount exactly equal to the limit is rejected.
    #[default]
    Strict,
    /// `amount <= unlocked`.
    Inclusive,
}

impl LimitCheck {
    pub fn permits(&self, amount: u64, unlocked: u64) -> bool {
        match self {
            Self::Strict => amount < unlocked,
            Self::Inclusive => amount <= unlocked,
        }
    }
}

/// Configuration for the account layer.
///
/// Can be loaded from a TOML file via [`AccountConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Comparison used by every limit-checked operation.
    #[serde(default)]
    pub limit_check: LimitCheck,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl AccountConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, AccountError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AccountError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, AccountError> {
        toml::from_str(s).map_err(|e| AccountError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, AccountError> {
        toml::to_string_pretty(self).map_err(|e| AccountError::Config(e.to_string()))
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            limit_check: LimitCheck::default(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
