//! Shared test fixtures: an in-process mock API server and a recording
//! navigator.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use parking_lot::Mutex;
use tokio::net::TcpListener;

use quotedeck_client::api::RegistrationResponse;
use quotedeck_client::error::ApiError;
use quotedeck_client::flow::Navigator;
use quotedeck_client::http::{HeaderAccessor, HeaderSet};

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("captured body is not JSON")
    }
}

/// A canned response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": "{}"}}"#, message).into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone, Default)]
struct ServerState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// In-process API server that captures requests and replays canned
/// responses.
pub struct MockApiServer {
    pub addr: SocketAddr,
    state: ServerState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApiServer {
    pub async fn start() -> Self {
        let state = ServerState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn enqueue(&self, response: MockResponse) {
        self.state.responses.lock().push_back(response);
    }

    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().clone()
    }
}

impl Drop for MockApiServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle(State(state): State<ServerState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();
    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    state.requests.lock().push(CapturedRequest {
        method,
        path,
        headers,
        body,
    });

    let response = state
        .responses
        .lock()
        .pop_front()
        .unwrap_or_else(|| MockResponse::json(r#"{"ok": true}"#));

    if response.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(response.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(response.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(response.body))
        .unwrap()
}

/// Header accessor backed by a fixed map.
pub struct StaticHeaders(pub HeaderSet);

impl StaticHeaders {
    pub fn of(pairs: &[(&str, &str)]) -> Arc<Self> {
        let mut set = HeaderSet::new();
        for (name, value) in pairs {
            set.insert((*name).to_string(), (*value).to_string());
        }
        Arc::new(Self(set))
    }
}

impl HeaderAccessor for StaticHeaders {
    fn get(&self) -> HeaderSet {
        self.0.clone()
    }
}

/// One navigator callback, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    ToLogin,
    ShowProgress,
    HideProgress,
    Error(String),
    Registered(String),
}

/// Navigator that records every callback for assertions.
#[derive(Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn to_login(&self) {
        self.events.lock().push(NavEvent::ToLogin);
    }

    fn show_progress(&self) {
        self.events.lock().push(NavEvent::ShowProgress);
    }

    fn hide_progress(&self) {
        self.events.lock().push(NavEvent::HideProgress);
    }

    fn to_error(&self, error: &ApiError) {
        self.events.lock().push(NavEvent::Error(error.kind().to_string()));
    }

    fn registered(&self, response: RegistrationResponse) {
        self.events.lock().push(NavEvent::Registered(response.login));
    }
}
