use ol_store::StoreError;
use ol_types::{AccountAddress, TypesError};
use thiserror::Error;

/// Abort reasons for every account-layer entry point.
///
/// None of these are caught or retried here; the host discards the whole
/// transaction and reports [`AccountError::code`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("account not found: {0}")]
    AccountNotFound(AccountAddress),

    #[error("account not registered for the coin: {0}")]
    AccountNotRegisteredForToken(AccountAddress),

    #[error("insufficient unlocked balance: requested {requested}, unlocked {unlocked}")]
    InsufficientBalance { requested: u64, unlocked: u64 },

    #[error("batch has {recipients} recipients but {amounts} amounts")]
    LengthMismatch { recipients: usize, amounts: usize },

    #[error("caller is not the system signer")]
    PermissionDenied,

    #[error("legacy key lookup resolved to {resolved}, expected {expected}")]
    MigrationLookupMismatch {
        expected: AccountAddress,
        resolved: AccountAddress,
    },

    #[error("invalid authentication key: {0}")]
    InvalidAuthKey(#[from] TypesError),

    #[error("supply total overflowed")]
    SupplyOverflow,

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AccountError {
    /// Stable numeric abort code reported by the host.
    pub fn code(&self) -> u64 {
        match self {
            Self::AccountNotFound(_) => 1,
            Self::AccountNotRegisteredForToken(_) => 2,
            Self::LengthMismatch { .. } => 5,
            Self::InsufficientBalance { .. } => 6,
            Self::MigrationLookupMismatch { .. } => 7,
            Self::PermissionDenied => 8,
            Self::InvalidAuthKey(_) => 9,
            Self::SupplyOverflow => 10,
            Self::Config(_) => 11,
            Self::Store(e) => match e {
                StoreError::NotFound(_) => 100,
                StoreError::AlreadyExists(_) => 101,
                StoreError::AlreadyRegistered(_) => 102,
                StoreError::NotRegistered(_) => 103,
                StoreError::InsufficientFunds { .. } => 104,
                StoreError::Overflow => 105,
                StoreError::CapabilityExtracted(_) => 106,
            },
        }
    }
}
