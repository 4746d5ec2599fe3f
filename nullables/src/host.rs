//! Nullable host: all collaborators in one context, with snapshot commits.

use ol_account::{AccountContext, AccountError, OlAccount};
use ol_store::{CoinStore, StoreError};
use ol_types::{AccountAddress, SystemSigner};

use crate::coin::NullCoinStore;
use crate::receipts::NullReceipts;
use crate::registry::NullRegistry;
use crate::roles::NullWalletRoles;
use crate::slow_wallet::NullSlowWallets;

/// In-memory host state implementing [`AccountContext`].
#[derive(Clone, Debug, Default)]
pub struct NullHost {
    pub registry: NullRegistry,
    pub coins: NullCoinStore,
    pub receipts: NullReceipts,
    pub slow_wallets: NullSlowWallets,
    pub roles: NullWalletRoles,
}

impl NullHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` of freshly minted coin to a registered account.
    pub fn fund(
        &mut self,
        system: &SystemSigner,
        account: &AccountAddress,
        amount: u64,
    ) -> Result<(), StoreError> {
        self.coins.mint(system, account, amount)
    }
}

impl AccountContext for NullHost {
    type Registry = NullRegistry;
    type Coins = NullCoinStore;
    type Receipts = NullReceipts;

    fn registry(&self) -> &NullRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut NullRegistry {
        &mut self.registry
    }

    fn coins(&self) -> &NullCoinStore {
        &self.coins
    }

    fn coins_mut(&mut self) -> &mut NullCoinStore {
        &mut self.coins
    }

    fn receipts(&self) -> &NullReceipts {
        &self.receipts
    }

    fn receipts_mut(&mut self) -> &mut NullReceipts {
        &mut self.receipts
    }

    fn unlocked_amount(&self, address: &AccountAddress) -> u64 {
        let balance = self.coins.balance(address).unwrap_or(0);
        self.slow_wallets.unlocked_of(address, balance)
    }

    fn spend_unlocked(&mut self, address: &AccountAddress, amount: u64) {
        self.slow_wallets.spend(address, amount);
    }

    fn is_slow_wallet(&self, address: &AccountAddress) -> bool {
        self.slow_wallets.is_slow(address)
    }

    fn is_donor_directed(&self, address: &AccountAddress) -> bool {
        self.roles.is_donor_directed(address)
    }

    fn is_validator(&self, address: &AccountAddress) -> bool {
        self.roles.is_validator(address)
    }
}

/// Run `f` as one transaction: its state changes are kept only if it succeeds.
///
/// Works on a snapshot of the engine, so an error partway through (for
/// example in the middle of a batch) leaves `engine` exactly as it was.
pub fn transact<C, T, F>(engine: &mut OlAccount<C>, f: F) -> Result<T, AccountError>
where
    C: AccountContext + Clone,
    F: FnOnce(&mut OlAccount<C>) -> Result<T, AccountError>,
{
    let mut working = engine.clone();
    match f(&mut working) {
        Ok(value) => {
            *engine = working;
            Ok(value)
        }
        Err(e) => {
            tracing::debug!(code = e.code(), error = %e, "transaction aborted");
            Err(e)
        }
    }
}
