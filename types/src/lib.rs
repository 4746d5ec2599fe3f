//! Fundamental types for the account layer.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! account addresses, authentication keys, and the caller roles the host
//! authenticates before any entry point runs.

pub mod address;
pub mod auth_key;
pub mod caller;
pub mod error;

pub use address::AccountAddress;
pub use auth_key::AuthKey;
pub use caller::{Caller, SystemSigner};
pub use error::TypesError;
