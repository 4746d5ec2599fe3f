//! Per-account receipt and cumulative-deposit bookkeeping.

use crate::StoreError;
use ol_types::AccountAddress;

pub trait ReceiptBook {
    /// Create the receipt record for a freshly provisioned account.
    fn initialize_for_account(&mut self, account: &AccountAddress) -> Result<(), StoreError>;

    /// Record a completed movement. Best-effort: implementations must not fail.
    fn notify_deposit(&mut self, sender: &AccountAddress, recipient: &AccountAddress, amount: u64);
}
