//! Parse errors for the fundamental types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid account address: {0}")]
    InvalidAddress(String),

    #[error("authentication key must be 32 bytes, got {0}")]
    InvalidAuthKeyLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}
