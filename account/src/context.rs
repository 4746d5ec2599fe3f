//! Host state seam: the collaborators every account operation reaches through.

use ol_store::{CoinStore, ReceiptBook, Registry};
use ol_types::AccountAddress;

/// Access to the registry, the coin store, receipt bookkeeping and the
/// unlocked-balance oracle.
///
/// Implementors own the state; the account engine borrows it for the
/// duration of one call and never caches anything across calls.
pub trait AccountContext {
    type Registry: Registry;
    type Coins: CoinStore;
    type Receipts: ReceiptBook;

    fn registry(&self) -> &Self::Registry;
    fn registry_mut(&mut self) -> &mut Self::Registry;
    fn coins(&self) -> &Self::Coins;
    fn coins_mut(&mut self) -> &mut Self::Coins;
    fn receipts(&self) -> &Self::Receipts;
    fn receipts_mut(&mut self) -> &mut Self::Receipts;

    /// The portion of `address`'s balance the vesting schedule has released.
    /// Must never exceed the account's total balance.
    fn unlocked_amount(&self, address: &AccountAddress) -> u64;

    /// Record that `amount` of `address`'s unlocked balance left through an
    /// ordinary path. Called after the coin store has moved the funds; the
    /// next [`unlocked_amount`](Self::unlocked_amount) must reflect it.
    fn spend_unlocked(&mut self, address: &AccountAddress, amount: u64);

    /// Whether `address` is subject to a vesting schedule at all.
    fn is_slow_wallet(&self, _address: &AccountAddress) -> bool {
        false
    }

    /// Community wallets, reported apart from ordinary and slow holdings.
    fn is_donor_directed(&self, _address: &AccountAddress) -> bool {
        false
    }

    fn is_validator(&self, _address: &AccountAddress) -> bool {
        false
    }
}
