//! Nullable infrastructure for deterministic testing.
//!
//! Every collaborator the account layer consumes (registry, coin store,
//! receipts, slow-wallet oracle, wallet roles) has an in-memory implementation here that:
//! - Returns deterministic values
//! - Can be seeded and inspected programmatically
//! - Never touches the filesystem or network
//!
//! [`NullHost`] bundles them into an [`ol_account::AccountContext`], and
//! [`transact`] gives tests the host's all-or-nothing commit.

pub mod coin;
pub mod host;
pub mod receipts;
pub mod registry;
pub mod roles;
pub mod slow_wallet;

pub use coin::NullCoinStore;
pub use host::{transact, NullHost};
pub use receipts::{NullReceipts, UserReceipts};
pub use registry::NullRegistry;
pub use roles::NullWalletRoles;
pub use slow_wallet::NullSlowWallets;
