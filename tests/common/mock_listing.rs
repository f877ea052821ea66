//! Mock listing server for exercising the resources client.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

/// A canned response to return for every request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"error": "unavailable"}"#.to_string(),
        }
    }
}

struct MockState {
    response: MockResponse,
    hits: AtomicUsize,
}

/// A running mock server; counts requests to `/codingResources`.
pub struct MockListing {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockListing {
    pub async fn start(response: MockResponse) -> Self {
        let state = Arc::new(MockState {
            response,
            hits: AtomicUsize::new(0),
        });
        let app = Router::new()
            .route("/codingResources", get(serve_listing))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock listing");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/codingResources", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }
}

async fn serve_listing(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let status = StatusCode::from_u16(state.response.status).unwrap_or(StatusCode::OK);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        state.response.body.clone(),
    )
}
