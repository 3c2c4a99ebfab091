//! LMDB environment setup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use heed::types::Bytes;
use heed::{Database, Env, EnvOpenOptions};
use tracing::info;

use crate::state::LmdbStateStore;
use crate::LmdbError;

/// Name of the database holding world state.
pub const WORLD_STATE_DB: &str = "world_state";

const MAX_DBS: u32 = 4;

/// Wraps the LMDB environment and the world-state database handle.
pub struct LmdbEnvironment {
    env: Arc<Env>,
    world_state_db: Database<Bytes, Bytes>,
    path: PathBuf,
}

impl LmdbEnvironment {
    /// Open or create an LMDB environment at the given directory.
    ///
    /// The directory is created if missing. `map_size` is the maximum size
    /// of the memory map in bytes.
    pub fn open(path: &Path, map_size: usize) -> Result<Self, LmdbError> {
        std::fs::create_dir_all(path)?;

        // SAFETY: the environment is opened once per path by this process and
        // the memory map is never modified outside of LMDB transactions.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(MAX_DBS)
                .open(path)?
        };

        let mut wtxn = env.write_txn()?;
        let world_state_db: Database<Bytes, Bytes> =
            env.create_database(&mut wtxn, Some(WORLD_STATE_DB))?;
        wtxn.commit()?;

        info!(path = %path.display(), map_size, "opened LMDB environment");

        Ok(Self {
            env: Arc::new(env),
            world_state_db,
            path: path.to_path_buf(),
        })
    }

    /// A world-state handle sharing this environment.
    pub fn state_store(&self) -> LmdbStateStore {
        LmdbStateStore {
            env: Arc::clone(&self.env),
            world_state_db: self.world_state_db,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of keys currently held in world state.
    pub fn state_count(&self) -> Result<u64, LmdbError> {
        let rtxn = self.env.read_txn()?;
        Ok(self.world_state_db.len(&rtxn)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let env = LmdbEnvironment::open(&nested, 8 * 1024 * 1024).unwrap();
        assert!(nested.join("data.mdb").exists());
        assert_eq!(env.path(), nested.as_path());
        assert_eq!(env.state_count().unwrap(), 0);
    }
}
