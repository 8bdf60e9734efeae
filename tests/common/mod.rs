#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// How the fake Trip Mate server answers `POST /query`
#[derive(Clone)]
pub enum Reply {
    /// 200 with `{"answer": ...}`
    Answer(&'static str),
    /// Given status with an error body
    Status(u16),
    /// 200 with a body that is not the expected shape
    Garbage,
}

struct ServerState {
    reply: Reply,
    requests: Mutex<Vec<Value>>,
}

/// A fake Trip Mate server bound to an ephemeral local port
pub struct TestServer {
    pub url: String,
    state: Arc<ServerState>,
}

impl TestServer {
    /// Bodies of every `POST /query` received so far
    pub fn requests(&self) -> Vec<Value> {
        self.state.requests.lock().expect("requests lock").clone()
    }
}

/// Start a server on the current tokio runtime
pub async fn spawn(reply: Reply) -> TestServer {
    let state = Arc::new(ServerState {
        reply,
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/query", post(query))
        .route("/health", get(health))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    TestServer {
        url: format!("http://{}", addr),
        state,
    }
}

async fn query(State(state): State<Arc<ServerState>>, Json(body): Json<Value>) -> Response {
    state.requests.lock().expect("requests lock").push(body);

    match &state.reply {
        Reply::Answer(markdown) => Json(json!({ "answer": markdown })).into_response(),
        Reply::Status(code) => (
            StatusCode::from_u16(*code).expect("valid status"),
            Json(json!({ "error": "agent failed" })),
        )
            .into_response(),
        Reply::Garbage => Json(json!({ "unexpected": true })).into_response(),
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
