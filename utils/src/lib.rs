//! Shared utilities for the dispute record ledger.

pub mod logging;

pub use logging::{init_logging, LogFormat};
