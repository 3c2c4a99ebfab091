//! HTTP/JSON server exposing the transaction record contract.
//!
//! Provides endpoints for:
//! - Seeding world state with the base transactions
//! - Creating, reading and replacing transactions
//! - Existence checks
//! - Liveness

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use server::{router, RpcServer};
