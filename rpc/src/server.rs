//! Axum-based RPC server.

use std::future::Future;
use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use dispute_store::StateStore;

use crate::error::RpcError;
use crate::handlers::{
    create_transaction, health, initialize, read_transaction, transaction_exists,
    update_transaction, SharedStore,
};

/// Build the router exposing every contract operation.
pub fn router<S>(store: SharedStore<S>) -> Router
where
    S: StateStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/ledger/init", post(initialize::<S>))
        .route("/transactions", post(create_transaction::<S>))
        .route(
            "/transactions/:id",
            get(read_transaction::<S>).put(update_transaction::<S>),
        )
        .route("/transactions/:id/exists", get(transaction_exists::<S>))
        .with_state(store)
}

pub struct RpcServer {
    listener: TcpListener,
}

impl RpcServer {
    /// Bind the listening socket. Port `0` picks a free port.
    pub async fn bind(addr: SocketAddr) -> Result<Self, RpcError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| RpcError::Server(format!("failed to bind {addr}: {e}")))?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, RpcError> {
        self.listener
            .local_addr()
            .map_err(|e| RpcError::Server(e.to_string()))
    }

    /// Serve requests until `shutdown` resolves, then drain in-flight requests.
    pub async fn serve<S, F>(self, store: SharedStore<S>, shutdown: F) -> Result<(), RpcError>
    where
        S: StateStore + Send + Sync + 'static,
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        info!("RPC server listening on {}", addr);
        axum::serve(self.listener, router(store))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| RpcError::Server(e.to_string()))?;
        info!("RPC server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use dispute_contract::{RecordStore, Transaction};
    use dispute_nullables::NullStateStore;

    use crate::error::ErrorResponse;
    use crate::handlers::ExistsResponse;

    fn app() -> (Router, SharedStore<NullStateStore>) {
        let store = Arc::new(RecordStore::new(NullStateStore::new()));
        (router(Arc::clone(&store)), store)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    const CREATE_T1: &str = r#"{"TranId":"t-1","ApprovalCode":"A1","BillDetails":"store:1,items:x","CustomerDetails":"Cname:Bob","Status":"Successful"}"#;

    #[tokio::test]
    async fn health_reports_ok() {
        let (app, _) = app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn create_read_update_cycle() {
        let (app, _) = app();

        let (status, _) = send(&app, Method::POST, "/transactions", Some(CREATE_T1)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, Method::GET, "/transactions/t-1/exists", None).await;
        assert_eq!(status, StatusCode::OK);
        let exists: ExistsResponse = serde_json::from_slice(&body).unwrap();
        assert!(exists.exists);

        let (status, body) = send(&app, Method::GET, "/transactions/t-1", None).await;
        assert_eq!(status, StatusCode::OK);
        let tran: Transaction = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            tran,
            Transaction::new("t-1", "A1", "store:1,items:x", "Cname:Bob", "Successful")
        );

        let update = r#"{"ApprovalCode":"A2","BillDetails":"store:2,items:y","CustomerDetails":"Cname:Bob","Status":"disputed"}"#;
        let (status, _) = send(&app, Method::PUT, "/transactions/t-1", Some(update)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, body) = send(&app, Method::GET, "/transactions/t-1", None).await;
        let tran: Transaction = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            tran,
            Transaction::new("t-1", "A2", "store:2,items:y", "Cname:Bob", "disputed")
        );
    }

    #[tokio::test]
    async fn duplicate_create_is_conflict() {
        let (app, _) = app();
        send(&app, Method::POST, "/transactions", Some(CREATE_T1)).await;
        let (status, body) = send(&app, Method::POST, "/transactions", Some(CREATE_T1)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.error, "already_exists");
        assert_eq!(err.message, "the transaction t-1 already exists");
    }

    #[tokio::test]
    async fn missing_transaction_is_not_found() {
        let (app, store) = app();

        let (status, body) = send(&app, Method::GET, "/transactions/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.error, "not_found");

        let update = r#"{"ApprovalCode":"A","BillDetails":"b","CustomerDetails":"c","Status":"s"}"#;
        let (status, _) = send(&app, Method::PUT, "/transactions/nope", Some(update)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(store.state().write_count(), 0);

        let (_, body) = send(&app, Method::GET, "/transactions/nope/exists", None).await;
        let exists: ExistsResponse = serde_json::from_slice(&body).unwrap();
        assert!(!exists.exists);
    }

    #[tokio::test]
    async fn init_seeds_ledger() {
        let (app, _) = app();
        let (status, _) = send(&app, Method::POST, "/ledger/init", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, "/transactions/transaction-3", None).await;
        assert_eq!(status, StatusCode::OK);
        let tran: Transaction = serde_json::from_slice(&body).unwrap();
        assert_eq!(tran.status, "disputed");
    }

    #[tokio::test]
    async fn backend_failure_is_service_unavailable() {
        let (app, store) = app();
        store.state().fail_reads(true);
        let (status, body) = send(&app, Method::GET, "/transactions/t-1", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.error, "backend");
    }

    #[tokio::test]
    async fn empty_id_is_bad_request() {
        let (app, _) = app();
        let body = r#"{"TranId":"","ApprovalCode":"","BillDetails":"","CustomerDetails":"","Status":""}"#;
        let (status, body) = send(&app, Method::POST, "/transactions", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.error, "invalid_key");
    }

    #[tokio::test]
    async fn corrupt_record_is_internal_error() {
        let (app, store) = app();
        store.state().insert_raw("t-1", b"garbage");
        let (status, body) = send(&app, Method::GET, "/transactions/t-1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let err: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(err.error, "deserialization");
    }

    #[tokio::test]
    async fn create_without_all_fields_is_rejected() {
        let (app, store) = app();
        let (status, _) = send(
            &app,
            Method::POST,
            "/transactions",
            Some(r#"{"TranId":"t-1","Status":"disputed"}"#),
        )
        .await;
        assert!(status.is_client_error());
        assert!(store.state().is_empty());
    }

    #[tokio::test]
    async fn server_serves_and_shuts_down() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let store = Arc::new(RecordStore::new(NullStateStore::new()));
        let server = RpcServer::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = server.local_addr().unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve(store, async {
            let _ = rx.await;
        }));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.ends_with(r#"{"status":"ok"}"#));

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
