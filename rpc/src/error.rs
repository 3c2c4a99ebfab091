//! RPC error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use dispute_contract::ContractError;
use dispute_store::StoreError;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("background task failed: {0}")]
    Task(String),

    #[error("server error: {0}")]
    Server(String),
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl RpcError {
    /// Stable, machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            RpcError::Contract(e) => match e {
                ContractError::AlreadyExists(_) => "already_exists",
                ContractError::NotFound(_) => "not_found",
                ContractError::Backend(StoreError::InvalidKey(_)) => "invalid_key",
                ContractError::Backend(_) => "backend",
                ContractError::Serialization(_) => "serialization",
                ContractError::Deserialization(_) => "deserialization",
            },
            RpcError::Task(_) | RpcError::Server(_) => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RpcError::Contract(e) => match e {
                ContractError::AlreadyExists(_) => StatusCode::CONFLICT,
                ContractError::NotFound(_) => StatusCode::NOT_FOUND,
                ContractError::Backend(StoreError::InvalidKey(_)) => StatusCode::BAD_REQUEST,
                ContractError::Backend(_) => StatusCode::SERVICE_UNAVAILABLE,
                ContractError::Serialization(_) | ContractError::Deserialization(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            RpcError::Task(_) | RpcError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
