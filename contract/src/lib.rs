//! Transaction record contract.
//!
//! A create/read/update/exists cycle over [`Transaction`] records keyed by
//! their id, persisted through an injected [`dispute_store::StateStore`].
//! Records are never deleted.

pub mod error;
pub mod key_lock;
pub mod record_store;
pub mod seed;

pub use dispute_types::Transaction;
pub use error::ContractError;
pub use key_lock::{KeyGuard, KeyLocks};
pub use record_store::RecordStore;
pub use seed::seed_transactions;
