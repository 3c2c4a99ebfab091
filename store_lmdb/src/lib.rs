//! LMDB world-state backend for the dispute record ledger.
//!
//! Implements [`dispute_store::StateStore`] using the `heed` LMDB bindings.
//! World state lives in a single named database within one environment.

pub mod environment;
pub mod error;
pub mod state;

pub use environment::LmdbEnvironment;
pub use error::LmdbError;
pub use state::LmdbStateStore;
