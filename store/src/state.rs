//! World-state storage trait.

use std::sync::Arc;

use crate::StoreError;

/// Largest key accepted by any backend, in bytes (LMDB's default limit).
pub const MAX_KEY_LEN: usize = 511;

/// Reject keys no backend can hold: empty keys and keys over [`MAX_KEY_LEN`].
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey("key must not be empty".into()));
    }
    if key.len() > MAX_KEY_LEN {
        return Err(StoreError::InvalidKey(format!(
            "key is {} bytes, limit is {MAX_KEY_LEN}",
            key.len()
        )));
    }
    Ok(())
}

/// Key-value world state consumed by the record contract.
///
/// Single-key operations are atomic. There is no compare-and-swap:
/// `put_state` always overwrites.
pub trait StateStore {
    /// Retrieve the value stored under `key`, or `None` when the key is unset.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Check whether a value is stored under `key`.
    fn state_exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get_state(key)?.is_some())
    }
}

impl<S: StateStore + ?Sized> StateStore for Arc<S> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get_state(key)
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).put_state(key, value)
    }

    fn state_exists(&self, key: &str) -> Result<bool, StoreError> {
        (**self).state_exists(key)
    }
}
