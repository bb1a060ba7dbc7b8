//! Fake Content Delivery API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /spaces/{space}/environments/{env}/entries` — the configured entries,
//!   or the configured failure
//!
//! Every request is recorded (path, query pairs in order, `Authorization`
//! header) so tests can assert on exactly what went over the wire.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_delivery_api::FakeDeliveryApi;
//!
//! let api = FakeDeliveryApi::start().await.unwrap();
//! api.add_entry(EntryBuilder::new("r1", "o2S2PARC").build()).await;
//!
//! // Point DeliveryClient at api.base_url()
//! let url = api.base_url();
//! # });
//! ```

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What the server saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub space: String,
    pub environment: String,
    pub params: Vec<(String, String)>,
    pub authorization: Option<String>,
}

impl RecordedRequest {
    /// Value of the first query pair named `key`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.params.iter().map(|(k, _)| k.as_str()).collect()
    }
}

/// State shared between the router and test code.
#[derive(Default)]
struct ApiState {
    entries: Vec<serde_json::Value>,
    requests: Vec<RecordedRequest>,
    /// When set, every request is answered with this status and an error body.
    fail_with: Option<StatusCode>,
    /// When set, returned verbatim with 200 instead of the entries page.
    raw_body: Option<String>,
}

/// Handle to the running fake Content Delivery API server.
pub struct FakeDeliveryApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeDeliveryApi {
    /// Start the fake server on a random port. Returns once the server is
    /// listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route(
                "/spaces/{space}/environments/{env}/entries",
                get(list_entries),
            )
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Add an entry to every subsequent entries page.
    pub async fn add_entry(&self, entry: serde_json::Value) {
        self.state.lock().await.entries.push(entry);
    }

    /// Answer every subsequent request with `status`.
    pub async fn fail_with(&self, status: StatusCode) {
        self.state.lock().await.fail_with = Some(status);
    }

    /// Answer every subsequent request with `body` and a 200.
    pub async fn respond_raw(&self, body: &str) {
        self.state.lock().await.raw_body = Some(body.to_string());
    }

    /// All requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }

    /// The most recent request. Panics if none arrived.
    pub async fn last_request(&self) -> RecordedRequest {
        self.requests()
            .await
            .pop()
            .expect("fake delivery API received no requests")
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn list_entries(
    Path((space, environment)): Path<(String, String)>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    State(state): State<Arc<Mutex<ApiState>>>,
) -> Response {
    let mut state = state.lock().await;
    let authorization = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.push(RecordedRequest {
        space,
        environment,
        params: params.clone(),
        authorization,
    });

    if let Some(status) = state.fail_with {
        let body = serde_json::json!({
            "sys": { "type": "Error", "id": "ServerError" },
            "message": "fake delivery API failure"
        });
        return (status, axum::Json(body)).into_response();
    }

    if let Some(raw) = &state.raw_body {
        return (StatusCode::OK, raw.clone()).into_response();
    }

    let number = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.parse::<u64>().ok())
    };
    let skip = number("skip").unwrap_or(0);
    let limit = number("limit").unwrap_or(100);

    axum::Json(serde_json::json!({
        "sys": { "type": "Array" },
        "total": state.entries.len(),
        "skip": skip,
        "limit": limit,
        "items": state.entries,
    }))
    .into_response()
}
