//! Nullable receipts: per-account payment and cumulative-deposit records.

use ol_store::{ReceiptBook, StoreError};
use ol_types::AccountAddress;
use serde::Serialize;
use std::collections::HashMap;

/// Receipt record kept for one account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserReceipts {
    /// Total ever sent by this account, per recipient.
    pub sent: HashMap<AccountAddress, u64>,
    /// Total ever received by this account.
    pub cumulative_deposits: u64,
}

/// An in-memory receipt book for testing.
#[derive(Clone, Debug, Default)]
pub struct NullReceipts {
    records: HashMap<AccountAddress, UserReceipts>,
}

impl NullReceipts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, account: &AccountAddress) -> Option<&UserReceipts> {
        self.records.get(account)
    }

    pub fn is_initialized(&self, account: &AccountAddress) -> bool {
        self.records.contains_key(account)
    }
}

impl ReceiptBook for NullReceipts {
    fn initialize_for_account(&mut self, account: &AccountAddress) -> Result<(), StoreError> {
        if self.records.contains_key(account) {
            return Err(StoreError::AlreadyExists(*account));
        }
        self.records.insert(*account, UserReceipts::default());
        Ok(())
    }

    fn notify_deposit(&mut self, sender: &AccountAddress, recipient: &AccountAddress, amount: u64) {
        // Accounts created before receipts existed (migrated ones) get a record on first use.
        let sent = self.records.entry(*sender).or_default().sent.entry(*recipient).or_default();
        *sent = sent.saturating_add(amount);
        let received = self.records.entry(*recipient).or_default();
        received.cumulative_deposits = received.cumulative_deposits.saturating_add(amount);
    }
}
