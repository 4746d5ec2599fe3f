//! Balance table: the only issuer of coins and withdraw capabilities.

use std::collections::{HashMap, HashSet};

use ol_types::{AccountAddress, Caller, SystemSigner};

use crate::coin::{Coin, WithdrawCapability};
use crate::StoreError;

/// Registered balance slots plus the total supply they add up to.
///
/// Value enters only through [`CoinTable::mint`], which needs the system
/// signer, and leaves only through [`CoinTable::burn`]. Every other operation
/// moves value between slots and coins, so `supply` always equals the sum of
/// all slots and all live coins.
#[derive(Clone, Debug, Default)]
pub struct CoinTable {
    balances: HashMap<AccountAddress, u64>,
    supply: u64,
    capabilities: HashSet<AccountAddress>,
}

impl CoinTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, account: &AccountAddress) -> Result<(), StoreError> {
        if self.balances.contains_key(account) {
            return Err(StoreError::AlreadyRegistered(*account));
        }
        self.balances.insert(*account, 0);
        Ok(())
    }

    pub fn is_registered(&self, account: &AccountAddress) -> bool {
        self.balances.contains_key(account)
    }

    pub fn balance(&self, account: &AccountAddress) -> Result<u64, StoreError> {
        self.balances
            .get(account)
            .copied()
            .ok_or(StoreError::NotRegistered(*account))
    }

    pub fn supply(&self) -> u64 {
        self.supply
    }

    /// Create `amount` of new coin in `to`'s slot.
    pub fn mint(
        &mut self,
        _system: &SystemSigner,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), StoreError> {
        let balance = self.balance(to)?;
        let credited = balance.checked_add(amount).ok_or(StoreError::Overflow)?;
        self.supply = self.supply.checked_add(amount).ok_or(StoreError::Overflow)?;
        self.balances.insert(*to, credited);
        Ok(())
    }

    /// Destroy a coin, reducing total supply by its value.
    pub fn burn(&mut self, coin: Coin) -> Result<(), StoreError> {
        self.supply = self
            .supply
            .checked_sub(coin.into_value())
            .ok_or(StoreError::Overflow)?;
        Ok(())
    }

    pub fn withdraw(&mut self, from: &AccountAddress, amount: u64) -> Result<Coin, StoreError> {
        let balance = self
            .balances
            .get_mut(from)
            .ok_or(StoreError::NotRegistered(*from))?;
        if *balance < amount {
            return Err(StoreError::InsufficientFunds {
                needed: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(Coin::new(amount))
    }

    /// Credit `coin` to `to`. A coin that cannot be credited is burned.
    pub fn deposit(&mut self, to: &AccountAddress, coin: Coin) -> Result<(), StoreError> {
        let value = coin.into_value();
        let credited = self
            .balance(to)
            .and_then(|balance| balance.checked_add(value).ok_or(StoreError::Overflow));
        match credited {
            Ok(credited) => {
                self.balances.insert(*to, credited);
                Ok(())
            }
            Err(e) => {
                self.supply = self.supply.saturating_sub(value);
                Err(e)
            }
        }
    }

    /// Move `amount` between two registered slots. Nothing changes on failure.
    pub fn transfer(
        &mut self,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), StoreError> {
        let to_balance = self.balance(to)?;
        if from != to && to_balance.checked_add(amount).is_none() {
            return Err(StoreError::Overflow);
        }
        let coin = self.withdraw(from, amount)?;
        self.deposit(to, coin)
    }

    /// Issue `owner`'s withdraw capability. At most one per account.
    pub fn extract_withdraw_capability(
        &mut self,
        owner: &Caller,
    ) -> Result<WithdrawCapability, StoreError> {
        let account = owner.address();
        self.balance(&account)?;
        if !self.capabilities.insert(account) {
            return Err(StoreError::CapabilityExtracted(account));
        }
        Ok(WithdrawCapability::new(account))
    }

    pub fn withdraw_with_capability(
        &mut self,
        capability: &WithdrawCapability,
        amount: u64,
    ) -> Result<Coin, StoreError> {
        self.withdraw(&capability.account(), amount)
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

    fn table_with(account: u64, amount: u64) -> CoinTable {
        let mut table = CoinTable::new();
        table.register(&addr(account)).unwrap();
        table.mint(&system(), &addr(account), amount).unwrap();
        table
    }

    #[test]
    fn mint_requires_a_slot() {
        let mut table = CoinTable::new();
        assert_eq!(
            table.mint(&system(), &addr(1), 5),
            Err(StoreError::NotRegistered(addr(1)))
        );
        assert_eq!(table.supply(), 0);
    }

    #[test]
    fn withdraw_and_burn_reduce_supply() {
        let mut table = table_with(1, 100);
        let coin = table.withdraw(&addr(1), 40).unwrap();
        assert_eq!(table.supply(), 100);
        table.burn(coin).unwrap();
        assert_eq!(table.supply(), 60);
        assert_eq!(table.balance(&addr(1)), Ok(60));
    }

    #[test]
    fn failed_transfer_changes_nothing() {
        let mut table = table_with(1, 10);
        table.register(&addr(2)).unwrap();

        assert_eq!(
            table.transfer(&addr(1), &addr(3), 5),
            Err(StoreError::NotRegistered(addr(3)))
        );
        assert_eq!(
            table.transfer(&addr(1), &addr(2), 11),
            Err(StoreError::InsufficientFunds {
                needed: 11,
                available: 10
            })
        );
        assert_eq!(table.balance(&addr(1)), Ok(10));
        assert_eq!(table.balance(&addr(2)), Ok(0));
    }

    #[test]
    fn failed_deposit_burns_the_coin() {
        let mut table = table_with(1, 10);
        let coin = table.withdraw(&addr(1), 4).unwrap();
        assert_eq!(
            table.deposit(&addr(2), coin),
            Err(StoreError::NotRegistered(addr(2)))
        );
        assert_eq!(table.supply(), 6);
    }

    #[test]
    fn self_transfer_keeps_balance() {
        let mut table = table_with(1, 10);
        table.transfer(&addr(1), &addr(1), 4).unwrap();
        assert_eq!(table.balance(&addr(1)), Ok(10));
    }

    #[test]
    fn capability_is_issued_once_to_its_owner() {
        let mut table = table_with(1, 10);
        let owner = Caller::Ordinary(addr(1));

        let cap = table.extract_withdraw_capability(&owner).unwrap();
        assert_eq!(cap.account(), addr(1));
        assert_eq!(
            table.extract_withdraw_capability(&owner),
            Err(StoreError::CapabilityExtracted(addr(1)))
        );
        assert!(table
            .extract_withdraw_capability(&Caller::Ordinary(addr(9)))
            .is_err());
    }
}
