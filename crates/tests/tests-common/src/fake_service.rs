//! A stand-in for the hosted REST service.
//!
//! It listens on a loopback port, records every request it receives and
//! answers with queued responses, or `200 []` once the queue is empty.

use std::collections::{BTreeMap, VecDeque};
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;

/// A request as the service saw it. Query parameters are decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<serde_json::Value>,
}

impl RecordedRequest {
    /// The decoded query string, for compact snapshots.
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    body: String,
}

#[derive(Default)]
struct Shared {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<CannedResponse>>,
}

/// A running fake service. It stops with the test's runtime.
#[derive(Clone)]
pub struct FakeService {
    address: SocketAddr,
    shared: Arc<Shared>,
}

impl FakeService {
    /// Bind a loopback port and start serving.
    pub async fn start() -> FakeService {
        let shared = Arc::new(Shared::default());

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let address = listener.local_addr().unwrap();

        let router = Router::new()
            .fallback(record_request)
            .with_state(shared.clone());
        let server = axum::Server::from_tcp(listener)
            .unwrap()
            .serve(router.into_make_service());
        tokio::spawn(async move {
            let _ = server.await;
        });

        FakeService { address, shared }
    }

    /// The project URL, as written in configuration.
    pub fn base_url(&self) -> url::Url {
        url::Url::parse(&format!("http://{}/", self.address)).unwrap()
    }

    /// The REST root below the project URL.
    pub fn rest_url(&self) -> url::Url {
        url::Url::parse(&format!("http://{}/rest/v1/", self.address)).unwrap()
    }

    /// Queue a response for the next request.
    pub fn respond_with(&self, status: u16, body: impl Into<String>) -> &Self {
        self.shared
            .responses
            .lock()
            .unwrap()
            .push_back(CannedResponse {
                status: StatusCode::from_u16(status).unwrap(),
                body: body.into(),
            });
        self
    }

    /// Queue a JSON response for the next request.
    pub fn respond_with_json(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.respond_with(status, body.to_string())
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.shared.requests.lock().unwrap().clone()
    }

    /// The only request received so far.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

/// Headers worth asserting on.
const RECORDED_HEADERS: [&str; 6] = [
    "accept",
    "accept-profile",
    "apikey",
    "authorization",
    "content-profile",
    "prefer",
];

async fn record_request(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let query: Vec<(String, String)> = uri
        .query()
        .map(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default();

    let headers: BTreeMap<String, String> = RECORDED_HEADERS
        .iter()
        .filter_map(|name| {
            headers
                .get(*name)
                .and_then(|value| value.to_str().ok())
                .map(|value| ((*name).to_string(), value.to_string()))
        })
        .collect();

    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };

    shared.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        headers,
        body,
    });

    let canned = shared
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or(CannedResponse {
            status: StatusCode::OK,
            body: "[]".to_string(),
        });

    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}
