use ol_account::AccountError;
use ol_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenesisError {
    #[error("failed to read genesis file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse genesis file: {0}")]
    Parse(String),

    #[error("genesis account #{index}: {reason}")]
    InvalidAccount { index: usize, reason: String },

    #[error("genesis account #{index}: {source}")]
    Account {
        index: usize,
        #[source]
        source: AccountError,
    },

    #[error("building report failed: {0}")]
    Report(#[source] AccountError),

    #[error("seeding balance failed: {0}")]
    Store(#[from] StoreError),
}
