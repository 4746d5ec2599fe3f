//! Best-effort transfers on behalf of the system signer.
//!
//! Unlike every other entry point, soft failures here are early returns:
//! protocol-level batches (fee distribution, slashing, rebalancing) call this
//! once per target and one bad target must not abort the rest.

use ol_store::CoinStore;
use ol_types::{AccountAddress, Caller};

use crate::context::AccountContext;
use crate::engine::{assert_system_signer, OlAccount};
use crate::error::AccountError;

impl<C: AccountContext> OlAccount<C> {
    /// Move `amount` from `from` to `to` without the unlocked-limit check.
    ///
    /// Returns `Ok(())` without moving anything when the recipient is not
    /// registered, the sender's raw balance is short, or the privileged
    /// withdrawal yields nothing.
    ///
    /// Only the signer check is meant to abort. The one deviation: a failing
    /// deposit of the already withdrawn coin is returned as an error, so the
    /// host discards the withdrawal with it instead of committing a debit
    /// with no matching credit.
    pub fn system_transfer(
        &mut self,
        caller: &Caller,
        from: &AccountAddress,
        to: &AccountAddress,
        amount: u64,
    ) -> Result<(), AccountError> {
        let system = assert_system_signer(caller)?;

        if !self.ctx.coins().is_registered(to) {
            tracing::warn!(%from, %to, amount, "system transfer skipped: recipient not registered");
            return Ok(());
        }

        let balance = match self.ctx.coins().balance(from) {
            Ok(balance) => balance,
            Err(e) => {
                tracing::warn!(%from, %to, amount, error = %e, "system transfer skipped: no sender balance");
                return Ok(());
            }
        };
        if balance < amount {
            tracing::warn!(%from, %to, amount, balance, "system transfer skipped: insufficient balance");
            return Ok(());
        }

        let coin = match self.ctx.coins_mut().privileged_withdraw(&system, from, amount) {
            Some(coin) => coin,
            None => {
                tracing::warn!(%from, %to, amount, "system transfer skipped: withdrawal returned nothing");
                return Ok(());
            }
        };

        self.ctx.coins_mut().deposit(to, coin)?;
        tracing::debug!(%from, %to, amount, "system transfer");
        Ok(())
    }
}
