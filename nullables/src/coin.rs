//! Nullable coin store: in-memory balances over a [`CoinTable`].

use ol_store::{Coin, CoinStore, CoinTable, StoreError, WithdrawCapability};
use ol_types::{AccountAddress, Caller, SystemSigner};

/// An in-memory coin store for testing.
///
/// Tracks total supply so tests can check that no operation creates or
/// destroys value. Privileged withdrawals can be made to come back empty to
/// exercise callers' handling of that case.
#[derive(Clone, Debug, Default)]
pub struct NullCoinStore {
    table: CoinTable,
    withhold_privileged: bool,
}

impl NullCoinStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit freshly minted coin to a registered account.
    pub fn mint(
        &mut self,
        system: &SystemSigner,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), StoreError> {
        self.table.mint(system, to, amount)
    }

    /// Destroy a coin, reducing total supply.
    pub fn burn(&mut self, coin: Coin) -> Result<(), StoreError> {
        self.table.burn(coin)
    }

    pub fn supply(&self) -> u64 {
        self.table.supply()
    }

    /// Make every later privileged withdrawal return nothing, whatever the balance.
    pub fn withhold_privileged_withdrawals(&mut self) {
        self.withhold_privileged = true;
    }
}

impl CoinStore for NullCoinStore {
    fn register(&mut self, account: &AccountAddress) -> Result<(), StoreError> {
        self.table.register(account)
    }

    fn is_registered(&self, account: &AccountAddress) -> bool {
        self.table.is_registered(account)
    }

    fn balance(&self, account: &AccountAddress) -> Result<u64, StoreError> {
        self.table.balance(account)
    }

    fn transfer(
        &mut self,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), StoreError> {
        self.table.transfer(from, to, amount)
    }

    fn withdraw(&mut self, from: &AccountAddress, amount: u64) -> Result<Coin, StoreError> {
        self.table.withdraw(from, amount)
    }

    fn privileged_withdraw(
        &mut self,
        _system: &SystemSigner,
        from: &AccountAddress,
        amount: u64,
    ) -> Option<Coin> {
        if self.withhold_privileged {
            return None;
        }
        self.table.withdraw(from, amount).ok()
    }

    fn deposit(&mut self, to: &AccountAddress, coin: Coin) -> Result<(), StoreError> {
        self.table.deposit(to, coin)
    }

    fn withdraw_with_capability(
        &mut self,
        capability: &WithdrawCapability,
        amount: u64,
    ) -> Result<Coin, StoreError> {
        self.table.withdraw_with_capability(capability, amount)
    }

    fn extract_withdraw_capability(
        &mut self,
        owner: &Caller,
    ) -> Result<WithdrawCapability, StoreError> {
        self.table.extract_withdraw_capability(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u64) -> AccountAddress {
        AccountAddress::from_u64(n)
    }

    fn system() -> SystemSigner {
        Caller::System.authorize_system().unwrap()
    }

    #[test]
    fn register_twice_fails() {
        let mut coins = NullCoinStore::new();
        coins.register(&addr(1)).unwrap();
        assert_eq!(
            coins.register(&addr(1)),
            Err(StoreError::AlreadyRegistered(addr(1)))
        );
    }

    #[test]
    fn unregistered_balance_is_an_error() {
        let coins = NullCoinStore::new();
        assert_eq!(coins.balance(&addr(1)), Err(StoreError::NotRegistered(addr(1))));
    }

    #[test]
    fn transfer_moves_value_and_preserves_supply() {
        let mut coins = NullCoinStore::new();
        coins.register(&addr(1)).unwrap();
        coins.register(&addr(2)).unwrap();
        coins.mint(&system(), &addr(1), 100).unwrap();

        coins.transfer(&addr(1), &addr(2), 40).unwrap();
        assert_eq!(coins.balance(&addr(1)), Ok(60));
        assert_eq!(coins.balance(&addr(2)), Ok(40));
        assert_eq!(coins.supply(), 100);
    }

    #[test]
    fn overdraw_fails_without_side_effects() {
        let mut coins = NullCoinStore::new();
        coins.register(&addr(1)).unwrap();
        coins.mint(&system(), &addr(1), 10).unwrap();
        assert_eq!(
            coins.withdraw(&addr(1), 11),
            Err(StoreError::InsufficientFunds {
                needed: 11,
                available: 10
            })
        );
        assert_eq!(coins.balance(&addr(1)), Ok(10));
    }

    #[test]
    fn privileged_withdraw_returns_none_on_shortfall() {
        let mut coins = NullCoinStore::new();
        coins.register(&addr(1)).unwrap();
        coins.mint(&system(), &addr(1), 10).unwrap();
        assert!(coins.privileged_withdraw(&system(), &addr(1), 11).is_none());
        assert!(coins.privileged_withdraw(&system(), &addr(2), 1).is_none());
        let coin = coins.privileged_withdraw(&system(), &addr(1), 10).unwrap();
        coins.burn(coin).unwrap();
        assert_eq!(coins.supply(), 0);
    }

    #[test]
    fn withheld_privileged_withdrawals_leave_balances_alone() {
        let mut coins = NullCoinStore::new();
        coins.register(&addr(1)).unwrap();
        coins.mint(&system(), &addr(1), 10).unwrap();
        coins.withhold_privileged_withdrawals();

        assert!(coins.privileged_withdraw(&system(), &addr(1), 5).is_none());
        assert_eq!(coins.balance(&addr(1)), Ok(10));
        // Ordinary withdrawals are unaffected.
        let coin = coins.withdraw(&addr(1), 5).unwrap();
        coins.deposit(&addr(1), coin).unwrap();
    }

    #[test]
    fn capability_requires_registration() {
        let mut coins = NullCoinStore::new();
        let owner = Caller::Ordinary(addr(3));
        assert!(coins.extract_withdraw_capability(&owner).is_err());
        coins.register(&addr(3)).unwrap();
        let cap = coins.extract_withdraw_capability(&owner).unwrap();
        assert_eq!(cap.account(), addr(3));
    }
}
