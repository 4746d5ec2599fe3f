//! Offline genesis tool.
//!
//! Reads a TOML genesis description, creates ordinary accounts and migrates
//! legacy ones through the account layer, seeds balances and vesting
//! records, replays any listed transfers, and reports the resulting supply.

pub mod apply;
pub mod error;
pub mod genesis_file;

pub use apply::{apply, AccountReport, GenesisReport, RejectedTransfer};
pub use error::GenesisError;
pub use genesis_file::{GenesisAccount, GenesisFile, GenesisTransfer};
