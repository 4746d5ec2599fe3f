//! The generic coin-balance ledger primitive and its move-only values.

use crate::StoreError;
use ol_types::{AccountAddress, Caller, SystemSigner};

/// A quantity of coin withdrawn from an account and not yet deposited.
///
/// `Coin` is neither `Clone` nor `Copy`: value can only be split off with
/// [`Coin::extract`], combined with [`Coin::merge`], or handed to a
/// [`CoinStore::deposit`]. Only a zero-valued coin may be discarded, through
/// [`Coin::destroy_zero`].
///
/// Non-zero coins are only ever created by [`CoinTable`](crate::CoinTable)
/// debiting a balance, so every coin in existence is backed by supply.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "coins must be deposited, merged or burned"]
pub struct Coin {
    value: u64,
}

impl Coin {
    pub(crate) fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Absorb `other` into this coin.
    pub fn merge(&mut self, other: Coin) -> Result<(), StoreError> {
        self.value = self
            .value
            .checked_add(other.into_value())
            .ok_or(StoreError::Overflow)?;
        Ok(())
    }

    /// Split `amount` off into a new coin.
    pub fn extract(&mut self, amount: u64) -> Result<Coin, StoreError> {
        if amount > self.value {
            return Err(StoreError::InsufficientFunds {
                needed: amount,
                available: self.value,
            });
        }
        self.value -= amount;
        Ok(Coin { value: amount })
    }

    /// Discard a coin that holds nothing. Returns the coin back if it is not empty.
    pub fn destroy_zero(self) -> Result<(), Coin> {
        if self.value == 0 {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub(crate) fn into_value(self) -> u64 {
        self.value
    }
}

/// Authorization to withdraw from one account without the owner signing.
///
/// Issued once per account by [`CoinStore::extract_withdraw_capability`] to
/// the account's own caller; not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct WithdrawCapability {
    account: AccountAddress,
}

impl WithdrawCapability {
    pub(crate) fn new(account: AccountAddress) -> Self {
        Self { account }
    }

    pub fn account(&self) -> AccountAddress {
        self.account
    }
}

/// Generic balance store for the native coin.
///
/// Raw-balance sufficiency is the store's own responsibility: `transfer` and
/// `withdraw` fail with [`StoreError::InsufficientFunds`] when the balance
/// does not cover the amount.
pub trait CoinStore {
    /// Publish a balance slot for `account`.
    fn register(&mut self, account: &AccountAddress) -> Result<(), StoreError>;

    fn is_registered(&self, account: &AccountAddress) -> bool;

    fn balance(&self, account: &AccountAddress) -> Result<u64, StoreError>;

    fn transfer(
        &mut self,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), StoreError>;

    fn withdraw(&mut self, from: &AccountAddress, amount: u64) -> Result<Coin, StoreError>;

    /// Withdraw on behalf of the system. Never fails loudly: returns `None`
    /// when `from` cannot cover `amount` or holds no balance slot.
    fn privileged_withdraw(
        &mut self,
        system: &SystemSigner,
        from: &AccountAddress,
        amount: u64,
    ) -> Option<Coin>;

    fn deposit(&mut self, to: &AccountAddress, coin: Coin) -> Result<(), StoreError>;

    fn withdraw_with_capability(
        &mut self,
        capability: &WithdrawCapability,
        amount: u64,
    ) -> Result<Coin, StoreError>;

    /// Issue the withdraw capability for `owner`'s own balance. Fails with
    /// [`StoreError::CapabilityExtracted`] if it was already issued.
    fn extract_withdraw_capability(
        &mut self,
        owner: &Caller,
    ) -> Result<WithdrawCapability, StoreError>;
}
