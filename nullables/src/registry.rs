//! Nullable registry: in-memory account existence and key lookup.

use ol_store::{Registry, StoreError};
use ol_types::{AccountAddress, AuthKey, SystemSigner};
use std::collections::HashMap;

/// An in-memory registry for testing.
///
/// Mirrors the chain's behavior: plain creation does not touch the reverse
/// lookup, only key rewrites do.
#[derive(Clone, Debug, Default)]
pub struct NullRegistry {
    accounts: HashMap<AccountAddress, AuthKey>,
    originating: HashMap<AuthKey, AccountAddress>,
}

impl NullRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The authentication key currently set on `address`.
    pub fn auth_key(&self, address: &AccountAddress) -> Option<AuthKey> {
        self.accounts.get(address).copied()
    }

    pub fn addresses(&self) -> impl Iterator<Item = &AccountAddress> {
        self.accounts.keys()
    }

    fn insert(&mut self, address: AccountAddress, auth_key: AuthKey) -> Result<(), StoreError> {
        if self.accounts.contains_key(&address) {
            return Err(StoreError::AlreadyExists(address));
        }
        self.accounts.insert(address, auth_key);
        Ok(())
    }
}

impl Registry for NullRegistry {
    fn exists(&self, address: &AccountAddress) -> bool {
        self.accounts.contains_key(address)
    }

    fn create_account(&mut self, auth_key: &AuthKey) -> Result<AccountAddress, StoreError> {
        let address = auth_key.derived_address();
        self.insert(address, *auth_key)?;
        Ok(address)
    }

    fn create_account_privileged(
        &mut self,
        _system: &SystemSigner,
        address: AccountAddress,
        auth_key: &AuthKey,
    ) -> Result<AccountAddress, StoreError> {
        self.insert(address, *auth_key)?;
        Ok(address)
    }

    fn rewrite_identity_key(
        &mut self,
        _system: &SystemSigner,
        address: &AccountAddress,
        auth_key: &AuthKey,
    ) -> Result<(), StoreError> {
        let current = self
            .accounts
            .get_mut(address)
            .ok_or_else(|| StoreError::NotFound(address.to_string()))?;
        let previous = std::mem::replace(current, *auth_key);
        if self.originating.get(&previous) == Some(address) {
            self.originating.remove(&previous);
        }
        self.originating.insert(*auth_key, *address);
        Ok(())
    }

    fn resolve_by_identity_key(&self, auth_key: &AuthKey) -> AccountAddress {
        self.originating
            .get(auth_key)
            .copied()
            .unwrap_or_else(|| auth_key.derived_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ol_types::Caller;

    fn system() -> SystemSigner {
        Caller::System.authorize_system().unwrap()
    }

    #[test]
    fn create_derives_address_from_key() {
        let mut registry = NullRegistry::new();
        let key = AuthKey::new([4u8; 32]);
        let addr = registry.create_account(&key).unwrap();
        assert_eq!(addr, key.derived_address());
        assert!(registry.exists(&addr));
        assert_eq!(registry.resolve_by_identity_key(&key), addr);
    }

    #[test]
    fn duplicate_creation_fails() {
        let mut registry = NullRegistry::new();
        let key = AuthKey::new([4u8; 32]);
        registry.create_account(&key).unwrap();
        assert_eq!(
            registry.create_account(&key),
            Err(StoreError::AlreadyExists(key.derived_address()))
        );
    }

    #[test]
    fn privileged_creation_does_not_populate_lookup() {
        let mut registry = NullRegistry::new();
        let key = AuthKey::new([9u8; 32]);
        let legacy = AccountAddress::from_u64(0xbeef);
        registry
            .create_account_privileged(&system(), legacy, &key)
            .unwrap();
        assert_ne!(registry.resolve_by_identity_key(&key), legacy);

        registry.rewrite_identity_key(&system(), &legacy, &key).unwrap();
        assert_eq!(registry.resolve_by_identity_key(&key), legacy);
    }

    #[test]
    fn rewrite_replaces_previous_lookup() {
        let mut registry = NullRegistry::new();
        let old_key = AuthKey::new([1u8; 32]);
        let new_key = AuthKey::new([2u8; 32]);
        let addr = AccountAddress::from_u64(77);
        registry
            .create_account_privileged(&system(), addr, &old_key)
            .unwrap();
        registry.rewrite_identity_key(&system(), &addr, &old_key).unwrap();
        registry.rewrite_identity_key(&system(), &addr, &new_key).unwrap();

        assert_eq!(registry.resolve_by_identity_key(&new_key), addr);
        assert_eq!(registry.resolve_by_identity_key(&old_key), old_key.derived_address());
        assert_eq!(registry.auth_key(&addr), Some(new_key));
    }

    #[test]
    fn rewrite_unknown_account_fails() {
        let mut registry = NullRegistry::new();
        let err = registry
            .rewrite_identity_key(&system(), &AccountAddress::from_u64(1), &AuthKey::new([0u8; 32]))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
