use dispute_types::TypesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("failed to access world state: {0}")]
    Backend(#[from] dispute_store::StoreError),

    #[error("the transaction {0} already exists")]
    AlreadyExists(String),

    #[error("the transaction {0} does not exist")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl From<TypesError> for ContractError {
    fn from(e: TypesError) -> Self {
        match e {
            TypesError::Serialization { .. } => ContractError::Serialization(e.to_string()),
            TypesError::Deserialization(_) => ContractError::Deserialization(e.to_string()),
        }
    }
}
