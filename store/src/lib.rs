//! Collaborator traits for the account layer.
//!
//! The account core never stores balances or account records itself. It
//! talks to these traits, and every backend (the chain's state store, the
//! in-memory nullables for testing) implements them. [`CoinTable`] is the
//! one place coins are minted and capabilities issued; coin backends build
//! on it.

pub mod coin;
pub mod error;
pub mod receipts;
pub mod registry;
pub mod table;

pub use coin::{Coin, CoinStore, WithdrawCapability};
pub use error::StoreError;
pub use receipts::ReceiptBook;
pub use registry::Registry;
pub use table::CoinTable;
