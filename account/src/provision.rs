//! Account provisioning: funded creation, privileged creation, legacy migration.

use ol_store::{CoinStore, ReceiptBook, Registry};
use ol_types::{AccountAddress, AuthKey, Caller};

use crate::context::AccountContext;
use crate::engine::{assert_system_signer, OlAccount};
use crate::error::AccountError;

impl<C: AccountContext> OlAccount<C> {
    /// Create the account under `auth_key`, register it for the coin and
    /// initialize its receipt record. Duplicate creation fails in the registry.
    pub(crate) fn provision_account(
        &mut self,
        auth_key: &AuthKey,
    ) -> Result<AccountAddress, AccountError> {
        let address = self.ctx.registry_mut().create_account(auth_key)?;
        self.ctx.coins_mut().register(&address)?;
        self.ctx.receipts_mut().initialize_for_account(&address)?;
        Ok(address)
    }

    /// Create a new account and fund it with `amount` from `sender`.
    ///
    /// The amount is limit-checked before anything is created.
    pub fn create_account_by_funding(
        &mut self,
        sender: &Caller,
        auth_key: &AuthKey,
        amount: u64,
    ) -> Result<AccountAddress, AccountError> {
        let from = sender.address();
        self.check_limit(&from, amount)?;

        let address = self.provision_account(auth_key)?;
        self.ctx.coins_mut().transfer(&from, &address, amount)?;
        self.ctx.spend_unlocked(&from, amount);

        tracing::info!(%from, account = %address, amount, "account created by funding");
        Ok(address)
    }

    /// Create an account without funding. System signer only.
    pub fn create_account_privileged(
        &mut self,
        root: &Caller,
        auth_key: &AuthKey,
    ) -> Result<AccountAddress, AccountError> {
        assert_system_signer(root)?;
        let address = self.provision_account(auth_key)?;
        tracing::info!(account = %address, "account created by system");
        Ok(address)
    }

    /// Recreate a legacy account at its original address.
    ///
    /// Legacy addresses are not derived from their authentication key, so the
    /// key is rewritten onto the account to populate the reverse lookup, and
    /// the lookup must then resolve back to `new_account`.
    pub fn migrate_legacy_account(
        &mut self,
        root: &Caller,
        new_account: AccountAddress,
        legacy_auth_key: &[u8],
    ) -> Result<AccountAddress, AccountError> {
        let system = assert_system_signer(root)?;
        let auth_key = AuthKey::from_bytes(legacy_auth_key)?;

        let registry = self.ctx.registry_mut();
        let address = registry.create_account_privileged(&system, new_account, &auth_key)?;
        registry.rewrite_identity_key(&system, &address, &auth_key)?;

        let resolved = self.ctx.registry().resolve_by_identity_key(&auth_key);
        if resolved != address {
            tracing::warn!(expected = %address, %resolved, "legacy key lookup mismatch");
            return Err(AccountError::MigrationLookupMismatch {
                expected: address,
                resolved,
            });
        }

        self.ctx.coins_mut().register(&address)?;
        tracing::info!(account = %address, %auth_key, "legacy account migrated");
        Ok(address)
    }
}
