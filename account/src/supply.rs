//! Supply report: total coin split into ordinary, slow-wallet and
//! donor-directed holdings, with the validator share of slow wallets.
//!
//! This may not be the whole circulating supply: coins escrowed outside
//! account balances are not counted.

use ol_store::CoinStore;
use ol_types::AccountAddress;
use serde::{Deserialize, Serialize};

use crate::context::AccountContext;
use crate::engine::OlAccount;
use crate::error::AccountError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supply {
    pub total: u64,
    /// Held by accounts with no vesting schedule.
    pub normal: u64,
    /// Slow-wallet validators still holding locked coin. Overlaps `slow_*`.
    pub validator: u64,
    pub validator_locked: u64,
    pub slow_total: u64,
    pub slow_locked: u64,
    pub slow_unlocked: u64,
    /// Community wallets, counted in neither `normal` nor `slow_*`.
    pub donor_directed: u64,
}

impl Supply {
    fn add(acc: u64, amount: u64) -> Result<u64, AccountError> {
        acc.checked_add(amount).ok_or(AccountError::SupplyOverflow)
    }
}

impl<C: AccountContext> OlAccount<C> {
    /// Sum the balances of `accounts`. Accounts without a balance slot count as zero.
    pub fn supply<'a>(
        &self,
        accounts: impl IntoIterator<Item = &'a AccountAddress>,
    ) -> Result<Supply, AccountError> {
        accounts.into_iter().try_fold(Supply::default(), |mut acc, address| {
            let amount = self.ctx.coins().balance(address).unwrap_or(0);
            acc.total = Supply::add(acc.total, amount)?;

            if self.ctx.is_donor_directed(address) {
                acc.donor_directed = Supply::add(acc.donor_directed, amount)?;
            } else if self.ctx.is_slow_wallet(address) {
                let unlocked = self.ctx.unlocked_amount(address).min(amount);
                let locked = amount - unlocked;
                acc.slow_total = Supply::add(acc.slow_total, amount)?;
                acc.slow_unlocked = Supply::add(acc.slow_unlocked, unlocked)?;
                acc.slow_locked = Supply::add(acc.slow_locked, locked)?;
                if locked > 0 && self.ctx.is_validator(address) {
                    acc.validator = Supply::add(acc.validator, amount)?;
                    acc.validator_locked = Supply::add(acc.validator_locked, locked)?;
                }
            } else {
                acc.normal = Supply::add(acc.normal, amount)?;
            }
            Ok(acc)
        })
    }
}
