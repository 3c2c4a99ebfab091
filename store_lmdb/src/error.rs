use thiserror::Error;

#[derive(Debug, Error)]
pub enum LmdbError {
    #[error("LMDB error: {0}")]
    Heed(String),

    #[error("LMDB database is corrupted: {0}")]
    Corrupted(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<heed::Error> for LmdbError {
    fn from(e: heed::Error) -> Self {
        match e {
            heed::Error::Mdb(heed::MdbError::Corrupted) => LmdbError::Corrupted(e.to_string()),
            other => LmdbError::Heed(other.to_string()),
        }
    }
}

impl From<LmdbError> for dispute_store::StoreError {
    fn from(e: LmdbError) -> Self {
        match e {
            LmdbError::Corrupted(msg) => dispute_store::StoreError::Corruption(msg),
            other => dispute_store::StoreError::Backend(other.to_string()),
        }
    }
}
