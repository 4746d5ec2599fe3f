//! Per-account opt-in/opt-out for unsolicited (direct) coin transfers.
//!
//! Records are created lazily on the first explicit setting and mutated in
//! place afterwards; they are never deleted. Accounts without a record accept
//! direct transfers.

use std::collections::HashMap;

use ol_types::{AccountAddress, Caller};
use serde::{Deserialize, Serialize};

use crate::context::AccountContext;
use crate::engine::OlAccount;

/// Emitted whenever an account's direct-transfer setting actually changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectTransferConfigUpdated {
    pub new_allow_direct_transfers: bool,
}

/// Append-only event stream attached to a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventHandle<T> {
    counter: u64,
    events: Vec<T>,
}

impl<T> EventHandle<T> {
    pub fn new() -> Self {
        Self {
            counter: 0,
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: T) {
        self.counter += 1;
        self.events.push(event);
    }

    /// Number of events emitted so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn events(&self) -> &[T] {
        &self.events
    }
}

impl<T> Default for EventHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectTransferConfig {
    pub allow_arbitrary_coin_transfers: bool,
    pub update_events: EventHandle<DirectTransferConfigUpdated>,
}

/// All direct-transfer records, keyed by account.
#[derive(Clone, Debug, Default)]
pub struct DirectTransferPolicies {
    records: HashMap<AccountAddress, DirectTransferConfig>,
}

impl DirectTransferPolicies {
    /// Store `allow` for `account`. Returns whether an event was emitted,
    /// which happens on record creation and on every actual change.
    pub fn set(&mut self, account: AccountAddress, allow: bool) -> bool {
        match self.records.get_mut(&account) {
            Some(record) => {
                if record.allow_arbitrary_coin_transfers == allow {
                    return false;
                }
                record.allow_arbitrary_coin_transfers = allow;
                record.update_events.emit(DirectTransferConfigUpdated {
                    new_allow_direct_transfers: allow,
                });
            }
            None => {
                let mut update_events = EventHandle::new();
                update_events.emit(DirectTransferConfigUpdated {
                    new_allow_direct_transfers: allow,
                });
                self.records.insert(
                    account,
                    DirectTransferConfig {
                        allow_arbitrary_coin_transfers: allow,
                        update_events,
                    },
                );
            }
        }
        true
    }

    pub fn can_receive(&self, account: &AccountAddress) -> bool {
        self.records
            .get(account)
            .map_or(true, |record| record.allow_arbitrary_coin_transfers)
    }

    pub fn get(&self, account: &AccountAddress) -> Option<&DirectTransferConfig> {
        self.records.get(account)
    }
}

impl<C: AccountContext> OlAccount<C> {
    /// Opt `account` in to or out of unsolicited deposits.
    pub fn set_allow_direct_transfers(&mut self, account: &Caller, allow: bool) {
        let address = account.address();
        if self.policies.set(address, allow) {
            tracing::debug!(account = %address, allow, "direct transfer config updated");
        }
    }

    pub fn can_receive_direct_transfers(&self, address: &AccountAddress) -> bool {
        self.policies.can_receive(address)
    }
}
