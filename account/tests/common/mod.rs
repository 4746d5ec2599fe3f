#![allow(dead_code)]

use ol_account::{AccountConfig, OlAccount};
use ol_nullables::NullHost;
use ol_store::{CoinStore, Registry};
use ol_types::{AccountAddress, AuthKey, Caller};

pub fn key(n: u8) -> AuthKey {
    AuthKey::new([n; 32])
}

pub fn engine() -> OlAccount<NullHost> {
    OlAccount::new(NullHost::new())
}

pub fn engine_with(config: AccountConfig) -> OlAccount<NullHost> {
    OlAccount::with_config(NullHost::new(), config)
}

/// Create a registered account under `key(n)` holding `balance`.
pub fn funded(engine: &mut OlAccount<NullHost>, n: u8, balance: u64) -> AccountAddress {
    let address = engine
        .create_account_privileged(&Caller::System, &key(n))
        .unwrap();
    let system = Caller::System.authorize_system().unwrap();
    engine.context_mut().fund(&system, &address, balance).unwrap();
    address
}

/// Create an account that exists but is not registered for the coin.
pub fn resource_account(engine: &mut OlAccount<NullHost>, n: u8) -> AccountAddress {
    engine
        .context_mut()
        .registry
        .create_account(&key(n))
        .unwrap()
}

pub fn balance_of(engine: &OlAccount<NullHost>, address: &AccountAddress) -> u64 {
    engine.context().coins.balance(address).unwrap()
}

pub fn slow(engine: &mut OlAccount<NullHost>, address: AccountAddress, unlocked: u64) {
    engine
        .context_mut()
        .slow_wallets
        .set_unlocked(address, unlocked);
}

pub fn ordinary(address: AccountAddress) -> Caller {
    Caller::Ordinary(address)
}
