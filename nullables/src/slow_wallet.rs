//! Nullable slow-wallet oracle: settable unlocked amounts.

use ol_types::AccountAddress;
use std::collections::HashMap;

/// Vesting records for testing: each slow wallet carries the amount its
/// schedule has unlocked so far. Accounts without a record are unrestricted.
#[derive(Clone, Debug, Default)]
pub struct NullSlowWallets {
    unlocked: HashMap<AccountAddress, u64>,
}

impl NullSlowWallets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `account` a slow wallet with `unlocked` released so far.
    pub fn set_unlocked(&mut self, account: AccountAddress, unlocked: u64) {
        self.unlocked.insert(account, unlocked);
    }

    pub fn is_slow(&self, account: &AccountAddress) -> bool {
        self.unlocked.contains_key(account)
    }

    /// Reduce `account`'s unlocked amount by `amount`, stopping at zero.
    /// No-op for accounts that are not slow wallets.
    pub fn spend(&mut self, account: &AccountAddress, amount: u64) {
        if let Some(unlocked) = self.unlocked.get_mut(account) {
            *unlocked = unlocked.saturating_sub(amount);
        }
    }

    /// Unlocked amount given the account's current total balance.
    pub fn unlocked_of(&self, account: &AccountAddress, balance: u64) -> u64 {
        match self.unlocked.get(account) {
            Some(unlocked) => (*unlocked).min(balance),
            None => balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u64) -> AccountAddress {
        AccountAddress::from_u64(n)
    }

    #[test]
    fn unrestricted_accounts_are_fully_unlocked() {
        let wallets = NullSlowWallets::new();
        assert!(!wallets.is_slow(&addr(1)));
        assert_eq!(wallets.unlocked_of(&addr(1), 70), 70);
    }

    #[test]
    fn unlocked_is_capped_at_balance() {
        let mut wallets = NullSlowWallets::new();
        wallets.set_unlocked(addr(1), 100);
        assert_eq!(wallets.unlocked_of(&addr(1), 40), 40);
        assert_eq!(wallets.unlocked_of(&addr(1), 400), 100);
    }

    #[test]
    fn spending_draws_down_the_unlocked_amount() {
        let mut wallets = NullSlowWallets::new();
        wallets.set_unlocked(addr(1), 100);
        wallets.spend(&addr(1), 30);
        assert_eq!(wallets.unlocked_of(&addr(1), 1000), 70);
        wallets.spend(&addr(1), 500);
        assert_eq!(wallets.unlocked_of(&addr(1), 1000), 0);

        wallets.spend(&addr(2), 5);
        assert!(!wallets.is_slow(&addr(2)));
    }
}
