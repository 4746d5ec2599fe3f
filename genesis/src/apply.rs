//! Build genesis state through the account layer.

use ol_account::{assert_system_signer, AccountContext, AccountError, OlAccount, Supply};
use ol_nullables::{transact, NullHost};
use ol_types::{AccountAddress, AuthKey, Caller};
use serde::Serialize;

use crate::genesis_file::{GenesisAccount, GenesisFile};
use crate::GenesisError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccountReport {
    pub address: AccountAddress,
    pub unlocked: u64,
    pub total: u64,
    pub slow_wallet: bool,
    pub donor_directed: bool,
    pub validator: bool,
}

/// A listed transfer the account layer refused, with the host abort code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RejectedTransfer {
    pub index: usize,
    pub code: u64,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenesisReport {
    pub accounts: Vec<AccountReport>,
    pub supply: Supply,
    pub applied_transfers: usize,
    pub rejected_transfers: Vec<RejectedTransfer>,
}

/// Create every account, seed balances, then replay transfers one
/// transaction at a time. Account setup errors are fatal; a rejected
/// transfer is recorded and leaves state untouched.
pub fn apply(genesis: &GenesisFile) -> Result<(OlAccount<NullHost>, GenesisReport), GenesisError> {
    let mut engine = OlAccount::with_config(NullHost::new(), genesis.config.clone());
    let system = assert_system_signer(&Caller::System).map_err(GenesisError::Report)?;

    for (index, account) in genesis.accounts.iter().enumerate() {
        let address = create_account(&mut engine, index, account)?;
        let host = engine.context_mut();
        if account.balance > 0 {
            host.fund(&system, &address, account.balance)?;
        }
        if let Some(unlocked) = account.slow_unlocked {
            host.slow_wallets.set_unlocked(address, unlocked);
        }
        if account.donor_directed {
            host.roles.mark_donor_directed(address);
        }
        if account.validator {
            host.roles.mark_validator(address);
        }
    }
    tracing::info!(accounts = genesis.accounts.len(), "genesis accounts created");

    let mut applied_transfers = 0;
    let mut rejected_transfers = Vec::new();
    for (index, t) in genesis.transfers.iter().enumerate() {
        let sender = Caller::Ordinary(t.sender);
        match transact(&mut engine, |e| e.transfer(&sender, &t.recipient, t.amount)) {
            Ok(()) => applied_transfers += 1,
            Err(e) => {
                tracing::warn!(index, code = e.code(), error = %e, "genesis transfer rejected");
                rejected_transfers.push(RejectedTransfer {
                    index,
                    code: e.code(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let report = report(&engine, applied_transfers, rejected_transfers)?;
    Ok((engine, report))
}

fn create_account(
    engine: &mut OlAccount<NullHost>,
    index: usize,
    account: &GenesisAccount,
) -> Result<AccountAddress, GenesisError> {
    let key_bytes = account.auth_key_bytes(index)?;
    let wrap = |source: AccountError| GenesisError::Account { index, source };
    let derived = AuthKey::from_bytes(&key_bytes)
        .ok()
        .map(|key| key.derived_address());

    match account.address {
        Some(address) if derived != Some(address) => {
            engine
                .migrate_legacy_account(&Caller::System, address, &key_bytes)
                .map_err(wrap)
        }
        _ => {
            let auth_key = AuthKey::from_bytes(&key_bytes).map_err(|e| wrap(e.into()))?;
            engine
                .create_account_privileged(&Caller::System, &auth_key)
                .map_err(wrap)
        }
    }
}

fn report(
    engine: &OlAccount<NullHost>,
    applied_transfers: usize,
    rejected_transfers: Vec<RejectedTransfer>,
) -> Result<GenesisReport, GenesisError> {
    let mut addresses: Vec<AccountAddress> =
        engine.context().registry().addresses().copied().collect();
    addresses.sort();

    let mut accounts = Vec::with_capacity(addresses.len());
    for address in &addresses {
        let (unlocked, total) = engine.balance(address).unwrap_or((0, 0));
        accounts.push(AccountReport {
            address: *address,
            unlocked,
            total,
            slow_wallet: engine.context().is_slow_wallet(address),
            donor_directed: engine.context().is_donor_directed(address),
            validator: engine.context().is_validator(address),
        });
    }

    let supply = engine.supply(&addresses).map_err(GenesisError::Report)?;

    Ok(GenesisReport {
        accounts,
        supply,
        applied_transfers,
        rejected_transfers,
    })
}
