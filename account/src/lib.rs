//! Account layer for the native coin.
//!
//! Every ordinary movement of funds is checked against the sender's unlocked
//! ("slow wallet") limit: an amount is allowed only while it stays strictly
//! below what the vesting schedule has released. The system signer has its
//! own best-effort transfer path that skips that limit and never aborts on a
//! bad target.
//!
//! Balances, account records and receipts belong to collaborators reached
//! through [`AccountContext`]; this crate only owns the direct-transfer
//! policy records.

pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod policy;
pub mod provision;
pub mod supply;
pub mod system;
pub mod transfer;

pub use config::{AccountConfig, LimitCheck};
pub use context::AccountContext;
pub use engine::{assert_system_signer, OlAccount};
pub use error::AccountError;
pub use policy::{DirectTransferConfig, DirectTransferConfigUpdated, DirectTransferPolicies, EventHandle};
pub use supply::Supply;
