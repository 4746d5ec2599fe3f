//! Account-existence and key-lookup registry.

use crate::StoreError;
use ol_types::{AccountAddress, AuthKey, SystemSigner};

/// Tracks which addresses exist and which authentication key resolves to which address.
pub trait Registry {
    fn exists(&self, address: &AccountAddress) -> bool;

    /// Create an account at the address derived from `auth_key`.
    /// Fails with [`StoreError::AlreadyExists`] on duplicates.
    fn create_account(&mut self, auth_key: &AuthKey) -> Result<AccountAddress, StoreError>;

    /// Create an account at an explicit address, bypassing derivation.
    fn create_account_privileged(
        &mut self,
        system: &SystemSigner,
        address: AccountAddress,
        auth_key: &AuthKey,
    ) -> Result<AccountAddress, StoreError>;

    /// Set `address`'s authentication key and record `auth_key -> address`
    /// in the reverse lookup.
    fn rewrite_identity_key(
        &mut self,
        system: &SystemSigner,
        address: &AccountAddress,
        auth_key: &AuthKey,
    ) -> Result<(), StoreError>;

    /// Resolve the address that owns `auth_key`. Keys without a recorded
    /// rewrite resolve to [`AuthKey::derived_address`].
    fn resolve_by_identity_key(&self, auth_key: &AuthKey) -> AccountAddress;
}
