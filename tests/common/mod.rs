#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use pak_translate::popup::view::PopupView;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct CannedState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// A server that answers every POST on `path` with the same status and body.
pub struct MockServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub async fn start(path: &str, status: StatusCode, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = CannedState {
            status,
            body: body.into(),
            requests: requests.clone(),
        };

        let app = Router::new().route(path, post(canned)).with_state(state);
        let addr = spawn(app).await;

        Self {
            url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

async fn canned(
    State(state): State<CannedState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { content_type, body });

    (state.status, state.body.clone())
}

/// Translation backend whose latency depends on the text: "slow" waits
/// 300ms, everything else 20ms. Replies with `<text>:<language>`.
pub async fn start_delayed_backend() -> String {
    async fn delayed(body: String) -> String {
        let request: serde_json::Value = serde_json::from_str(&body).unwrap();
        let text = request["text"].as_str().unwrap_or_default().to_string();
        let language = request["language"].as_str().unwrap_or_default().to_string();

        let delay = if text == "slow" { 300 } else { 20 };
        tokio::time::sleep(Duration::from_millis(delay)).await;

        serde_json::json!({ "translation": format!("{}:{}", text, language) }).to_string()
    }

    let app = Router::new().route("/translate", post(delayed));
    let addr = spawn(app).await;

    format!("http://{}/translate", addr)
}

#[derive(Default)]
pub struct RecordingView {
    text: Mutex<String>,
    language: Mutex<String>,
    outputs: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl RecordingView {
    pub fn with_inputs(text: &str, language: &str) -> Self {
        let view = Self::default();
        view.set_inputs(text, language);
        view
    }

    pub fn set_inputs(&self, text: &str, language: &str) {
        *self.text.lock().unwrap() = text.to_string();
        *self.language.lock().unwrap() = language.to_string();
    }

    pub fn displayed(&self) -> Option<String> {
        self.outputs.lock().unwrap().last().cloned()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl PopupView for RecordingView {
    fn input_text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    fn selected_language(&self) -> String {
        self.language.lock().unwrap().clone()
    }

    fn show_translation(&self, translation: &str) {
        self.outputs.lock().unwrap().push(translation.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
