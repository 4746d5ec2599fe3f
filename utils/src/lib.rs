//! Shared utilities for the account layer tooling.

pub mod logging;

pub use logging::{init_logging, LogFormat, UnknownLogFormat};
