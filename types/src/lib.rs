//! Fundamental types for the dispute record ledger.
//!
//! This crate defines the single record type managed by the contract, the
//! `Transaction`, together with its JSON wire codec. Field names on the wire
//! are kept verbatim so existing world-state data stays readable.

pub mod error;
pub mod transaction;

pub use error::TypesError;
pub use transaction::Transaction;
