//! Limit-checked transfers and withdrawals.

use ol_store::{Coin, CoinStore, ReceiptBook, Registry, WithdrawCapability};
use ol_types::{AccountAddress, AuthKey, Caller};

use crate::context::AccountContext;
use crate::engine::OlAccount;
use crate::error::AccountError;

impl<C: AccountContext> OlAccount<C> {
    /// Move `amount` from `sender` to `recipient`.
    ///
    /// A recipient with no account is created under the key equal to its
    /// address and funded with `amount`; that is the only way a plain
    /// transfer creates accounts. An existing recipient must already be
    /// registered for the coin.
    pub fn transfer(
        &mut self,
        sender: &Caller,
        recipient: &AccountAddress,
        amount: u64,
    ) -> Result<(), AccountError> {
        if !self.ctx.registry().exists(recipient) {
            let auth_key = AuthKey::new(*recipient.as_bytes());
            self.create_account_by_funding(sender, &auth_key, amount)?;
            return Ok(());
        }

        let from = sender.address();
        self.check_limit(&from, amount)?;
        self.assert_account_is_registered_for_token(recipient)?;

        self.ctx.coins_mut().transfer(&from, recipient, amount)?;
        self.ctx.spend_unlocked(&from, amount);
        self.ctx.receipts_mut().notify_deposit(&from, recipient, amount);

        tracing::debug!(%from, to = %recipient, amount, "transfer");
        Ok(())
    }

    /// Transfer to each `(recipients[i], amounts[i])` pair in order.
    ///
    /// Stops at the first failing pair. Earlier pairs are not rolled back
    /// here; the host's commit discards them along with everything else.
    pub fn batch_transfer(
        &mut self,
        sender: &Caller,
        recipients: &[AccountAddress],
        amounts: &[u64],
    ) -> Result<(), AccountError> {
        if recipients.len() != amounts.len() {
            return Err(AccountError::LengthMismatch {
                recipients: recipients.len(),
                amounts: amounts.len(),
            });
        }
        for (recipient, amount) in recipients.iter().zip(amounts) {
            self.transfer(sender, recipient, *amount)?;
        }
        Ok(())
    }

    /// Withdraw `amount` from `sender` as a coin the caller must dispose of.
    pub fn withdraw(&mut self, sender: &Caller, amount: u64) -> Result<Coin, AccountError> {
        let from = sender.address();
        self.check_limit(&from, amount)?;
        let coin = self.ctx.coins_mut().withdraw(&from, amount)?;
        self.ctx.spend_unlocked(&from, amount);
        tracing::debug!(%from, amount, "withdraw");
        Ok(coin)
    }

    /// Issue the withdraw capability for `owner`'s own balance. The coin
    /// store hands it out at most once per account.
    pub fn extract_withdraw_capability(
        &mut self,
        owner: &Caller,
    ) -> Result<WithdrawCapability, AccountError> {
        let address = owner.address();
        self.assert_account_is_registered_for_token(&address)?;
        let capability = self.ctx.coins_mut().extract_withdraw_capability(owner)?;
        tracing::info!(account = %address, "withdraw capability extracted");
        Ok(capability)
    }

    /// Withdraw through a previously issued capability. Not limit-checked.
    pub fn withdraw_with_capability(
        &mut self,
        capability: &WithdrawCapability,
        amount: u64,
    ) -> Result<Coin, AccountError> {
        Ok(self.ctx.coins_mut().withdraw_with_capability(capability, amount)?)
    }

    /// Deposit a coin into an existing, registered account.
    pub fn deposit_coins(&mut self, to: &AccountAddress, coin: Coin) -> Result<(), AccountError> {
        self.assert_account_exists(to)?;
        self.assert_account_is_registered_for_token(to)?;
        self.ctx.coins_mut().deposit(to, coin)?;
        Ok(())
    }
}
