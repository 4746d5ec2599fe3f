//! Nullable wallet roles: donor-directed and validator markers.

use ol_types::AccountAddress;
use std::collections::HashSet;

/// Which accounts are community (donor-directed) wallets and which belong to
/// validators. Both default to empty.
#[derive(Clone, Debug, Default)]
pub struct NullWalletRoles {
    donor_directed: HashSet<AccountAddress>,
    validators: HashSet<AccountAddress>,
}

impl NullWalletRoles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_donor_directed(&mut self, account: AccountAddress) {
        self.donor_directed.insert(account);
    }

    pub fn mark_validator(&mut self, account: AccountAddress) {
        self.validators.insert(account);
    }

    pub fn is_donor_directed(&self, account: &AccountAddress) -> bool {
        self.donor_directed.contains(account)
    }

    pub fn is_validator(&self, account: &AccountAddress) -> bool {
        self.validators.contains(account)
    }
}
