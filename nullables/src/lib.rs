//! Nullable infrastructure for deterministic testing.
//!
//! The world-state backend is abstracted behind `dispute_store::StateStore`.
//! This crate provides a test-friendly implementation that:
//! - Keeps everything in memory
//! - Can be told to fail reads or writes on demand
//! - Counts writes so tests can assert that nothing was persisted
//!
//! Usage: swap the LMDB backend for a nullable in tests, or run the daemon
//! with the `memory` backend for throwaway environments.

pub mod store;

pub use store::NullStateStore;
