//! Codec error type shared across crates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypesError {
    #[error("failed to encode transaction {id}: {reason}")]
    Serialization { id: String, reason: String },

    #[error("failed to decode transaction: {0}")]
    Deserialization(String),
}
