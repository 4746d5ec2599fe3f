//! Caller roles, authenticated by the host before any entry point runs.

use crate::address::AccountAddress;

/// Who is invoking an entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Caller {
    /// An end user acting for their own account.
    Ordinary(AccountAddress),
    /// The protocol itself (validator/VM-level logic).
    System,
}

impl Caller {
    /// The address this caller acts as.
    pub fn address(&self) -> AccountAddress {
        match self {
            Self::Ordinary(addr) => *addr,
            Self::System => AccountAddress::SYSTEM,
        }
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Self::System)
    }

    /// Obtain the proof required by privileged collaborator calls.
    /// Returns `None` for ordinary callers.
    pub fn authorize_system(&self) -> Option<SystemSigner> {
        match self {
            Self::System => Some(SystemSigner { _private: () }),
            Self::Ordinary(_) => None,
        }
    }
}

/// Proof that the current caller is the system signer.
///
/// Only [`Caller::authorize_system`] can construct one. Not `Clone`;
/// privileged operations borrow it for one call.
#[derive(Debug)]
pub struct SystemSigner {
    _private: (),
}

impl SystemSigner {
    pub fn address(&self) -> AccountAddress {
        AccountAddress::SYSTEM
    }
}
