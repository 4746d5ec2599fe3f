//! The account engine: shared state, limit lookups and precondition assertions.

use ol_store::{CoinStore, Registry};
use ol_types::{AccountAddress, Caller, SystemSigner};

use crate::config::AccountConfig;
use crate::context::AccountContext;
use crate::error::AccountError;
use crate::policy::DirectTransferPolicies;

/// Account-layer engine over a host context `C`.
///
/// Every entry point runs to completion or returns an error; on error the
/// host is expected to discard all state changes made during the call.
/// `OlAccount` is `Clone` whenever the context is, which is how the
/// in-memory host snapshots state for all-or-nothing commits.
#[derive(Clone, Debug)]
pub struct OlAccount<C> {
    pub(crate) ctx: C,
    pub(crate) policies: DirectTransferPolicies,
    pub(crate) config: AccountConfig,
}

impl<C: AccountContext> OlAccount<C> {
    pub fn new(ctx: C) -> Self {
        Self::with_config(ctx, AccountConfig::default())
    }

    pub fn with_config(ctx: C, config: AccountConfig) -> Self {
        Self {
            ctx,
            policies: DirectTransferPolicies::default(),
            config,
        }
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    pub fn policies(&self) -> &DirectTransferPolicies {
        &self.policies
    }

    /// The amount `address` may currently move through ordinary paths.
    pub fn get_available_limit(&self, address: &AccountAddress) -> u64 {
        self.ctx.unlocked_amount(address)
    }

    /// `(unlocked, total)` balance of a registered account.
    pub fn balance(&self, address: &AccountAddress) -> Result<(u64, u64), AccountError> {
        let total = self.ctx.coins().balance(address)?;
        let unlocked = self.ctx.unlocked_amount(address).min(total);
        Ok((unlocked, total))
    }

    pub fn assert_account_exists(&self, address: &AccountAddress) -> Result<(), AccountError> {
        if !self.ctx.registry().exists(address) {
            return Err(AccountError::AccountNotFound(*address));
        }
        Ok(())
    }

    pub fn assert_account_is_registered_for_token(
        &self,
        address: &AccountAddress,
    ) -> Result<(), AccountError> {
        if !self.ctx.coins().is_registered(address) {
            return Err(AccountError::AccountNotRegisteredForToken(*address));
        }
        Ok(())
    }

    /// Fail with `InsufficientBalance` unless `amount` passes the configured
    /// comparison against `sender`'s unlocked limit.
    pub(crate) fn check_limit(
        &self,
        sender: &AccountAddress,
        amount: u64,
    ) -> Result<(), AccountError> {
        let unlocked = self.get_available_limit(sender);
        if !self.config.limit_check.permits(amount, unlocked) {
            tracing::debug!(%sender, amount, unlocked, "amount exceeds unlocked limit");
            return Err(AccountError::InsufficientBalance {
                requested: amount,
                unlocked,
            });
        }
        Ok(())
    }
}

/// Check that `caller` is the system signer and return its proof.
pub fn assert_system_signer(caller: &Caller) -> Result<SystemSigner, AccountError> {
    caller.authorize_system().ok_or_else(|| {
        tracing::warn!(caller = %caller.address(), "privileged call from ordinary caller");
        AccountError::PermissionDenied
    })
}
