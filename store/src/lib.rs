//! Abstract world-state storage for the dispute record ledger.
//!
//! Every storage backend (LMDB, in-memory for testing) implements
//! [`StateStore`]. The contract depends only on the trait.

pub mod error;
pub mod state;

pub use error::StoreError;
pub use state::{validate_key, StateStore, MAX_KEY_LEN};
