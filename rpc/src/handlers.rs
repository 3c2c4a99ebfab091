//! RPC request handlers.
//!
//! Contract calls touch the world-state backend synchronously, so each one
//! runs on the blocking pool.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use dispute_contract::{ContractError, RecordStore};
use dispute_store::StateStore;
use dispute_types::Transaction;

use crate::error::RpcError;

/// Record store shared by every handler.
pub type SharedStore<S> = Arc<RecordStore<S>>;

// ── Requests & responses ─────────────────────────────────────────────────

/// Body of `PUT /transactions/:id`. The id comes from the path.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTransactionRequest {
    pub approval_code: String,
    pub bill_details: String,
    pub customer_details: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

async fn run_blocking<S, T, F>(store: SharedStore<S>, op: F) -> Result<T, RpcError>
where
    S: StateStore + Send + Sync + 'static,
    T: Send + 'static,
    F: FnOnce(&RecordStore<S>) -> Result<T, ContractError> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| RpcError::Task(e.to_string()))?;
    Ok(result?)
}

// ── Handlers ─────────────────────────────────────────────────────────────

/// `POST /ledger/init`
pub async fn initialize<S>(State(store): State<SharedStore<S>>) -> Result<StatusCode, RpcError>
where
    S: StateStore + Send + Sync + 'static,
{
    run_blocking(store, |s| s.initialize()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /transactions`
pub async fn create_transaction<S>(
    State(store): State<SharedStore<S>>,
    Json(tran): Json<Transaction>,
) -> Result<StatusCode, RpcError>
where
    S: StateStore + Send + Sync + 'static,
{
    run_blocking(store, move |s| {
        s.create(
            &tran.tran_id,
            &tran.approval_code,
            &tran.bill_details,
            &tran.customer_details,
            &tran.status,
        )
    })
    .await?;
    Ok(StatusCode::CREATED)
}

/// `GET /transactions/:id`
pub async fn read_transaction<S>(
    State(store): State<SharedStore<S>>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, RpcError>
where
    S: StateStore + Send + Sync + 'static,
{
    let tran = run_blocking(store, move |s| s.read(&id)).await?;
    Ok(Json(tran))
}

/// `PUT /transactions/:id`
pub async fn update_transaction<S>(
    State(store): State<SharedStore<S>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTransactionRequest>,
) -> Result<StatusCode, RpcError>
where
    S: StateStore + Send + Sync + 'static,
{
    run_blocking(store, move |s| {
        s.update(
            &id,
            &req.approval_code,
            &req.bill_details,
            &req.customer_details,
            &req.status,
        )
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /transactions/:id/exists`
pub async fn transaction_exists<S>(
    State(store): State<SharedStore<S>>,
    Path(id): Path<String>,
) -> Result<Json<ExistsResponse>, RpcError>
where
    S: StateStore + Send + Sync + 'static,
{
    let exists = run_blocking(store, move |s| s.exists(&id)).await?;
    Ok(Json(ExistsResponse { exists }))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
