//! LMDB implementation of StateStore.

use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env};
use tracing::debug;

use dispute_store::{validate_key, StateStore, StoreError};

use crate::LmdbError;

/// World state backed by one LMDB database.
///
/// Each call runs in its own LMDB transaction, so a single `put_state` is
/// atomic and durable once it returns.
#[derive(Clone)]
pub struct LmdbStateStore {
    pub(crate) env: Arc<Env>,
    pub(crate) world_state_db: Database<Bytes, Bytes>,
}

impl StateStore for LmdbStateStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        validate_key(key)?;
        let rtxn = self.env.read_txn().map_err(LmdbError::from)?;
        let val = self
            .world_state_db
            .get(&rtxn, key.as_bytes())
            .map_err(LmdbError::from)?;
        Ok(val.map(<[u8]>::to_vec))
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;
        let mut wtxn = self.env.write_txn().map_err(LmdbError::from)?;
        self.world_state_db
            .put(&mut wtxn, key.as_bytes(), value)
            .map_err(LmdbError::from)?;
        wtxn.commit().map_err(LmdbError::from)?;
        debug!(key, bytes = value.len(), "world state written");
        Ok(())
    }
}
