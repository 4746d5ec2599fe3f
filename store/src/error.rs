use ol_types::AccountAddress;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("account already exists: {0}")]
    AlreadyExists(AccountAddress),

    #[error("account already registered for the coin: {0}")]
    AlreadyRegistered(AccountAddress),

    #[error("account not registered for the coin: {0}")]
    NotRegistered(AccountAddress),

    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },

    #[error("withdraw capability already extracted for {0}")]
    CapabilityExtracted(AccountAddress),

    #[error("balance overflow")]
    Overflow,
}
