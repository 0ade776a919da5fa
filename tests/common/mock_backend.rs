//! In-process posts API for exercising the HTTP client and store.
//!
//! Serves a collection the way json-server does: `GET /posts` returns the
//! whole array, `GET /posts?_page=N&_limit=M` returns the Nth slice of M.
//! One-shot [`MockReply`] overrides can replace the next answer.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A request seen by the mock, for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub query: Option<String>,
}

/// How to answer one request instead of serving the collection.
#[derive(Debug, Clone, Default)]
pub struct MockReply {
    status: Option<u16>,
    body: Option<String>,
    delay: Duration,
}

impl MockReply {
    /// Answer with `status` and a JSON error body.
    pub fn status(status: u16) -> Self {
        Self {
            status: Some(status),
            body: Some(format!(r#"{{"error": "status {}"}}"#, status)),
            ..Self::default()
        }
    }

    /// Answer 200 with a raw body.
    pub fn body(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            ..Self::default()
        }
    }

    /// Serve the collection normally, but only after `ms` milliseconds.
    pub fn delayed(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
            ..Self::default()
        }
    }
}

#[derive(Debug, Deserialize)]
struct PageParams {
    #[serde(rename = "_page")]
    page: Option<usize>,
    #[serde(rename = "_limit")]
    limit: Option<usize>,
}

#[derive(Clone, Default)]
struct ApiState {
    posts: Arc<Mutex<Vec<serde_json::Value>>>,
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Running mock posts API. Shuts down when dropped.
pub struct MockPostsApi {
    pub addr: SocketAddr,
    state: ApiState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockPostsApi {
    /// Start serving `count` placeholder posts with ids `1..=count`.
    pub async fn start(count: u64) -> Self {
        let state = ApiState::default();
        *state.posts.lock().await = placeholder_posts(count);

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/posts", get(list_posts))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock posts API");
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

    /// Replace the served collection with `count` placeholder posts.
    pub async fn set_post_count(&self, count: u64) {
        *self.state.posts.lock().await = placeholder_posts(count);
    }

    /// Queue an override for the next unanswered request.
    pub async fn push_reply(&self, reply: MockReply) {
        self.state.replies.lock().await.push_back(reply);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Wait until at least `count` requests have arrived.
    pub async fn wait_for_requests(&self, count: usize) {
        while self.state.requests.lock().await.len() < count {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockPostsApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

/// Placeholder posts shaped like jsonplaceholder's `/posts`.
pub fn placeholder_posts(count: u64) -> Vec<serde_json::Value> {
    (1..=count)
        .map(|id| {
            serde_json::json!({
                "userId": (id - 1) / 10 + 1,
                "id": id,
                "title": format!("post {}", id),
                "body": format!("body of post {}", id),
            })
        })
        .collect()
}

async fn list_posts(
    State(state): State<ApiState>,
    Query(params): Query<PageParams>,
    uri: Uri,
) -> Response {
    // Record and claim the override together so overrides follow arrival order.
    let reply = {
        let mut replies = state.replies.lock().await;
        state.requests.lock().await.push(CapturedRequest {
            path: uri.path().to_string(),
            query: uri.query().map(String::from),
        });
        replies.pop_front().unwrap_or_default()
    };

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    let status = reply
        .status
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::OK);
    let body = match reply.body {
        Some(body) => body,
        None => {
            let posts = state.posts.lock().await;
            let served: Vec<_> = match (params.page, params.limit) {
                (Some(page), Some(limit)) => posts
                    .iter()
                    .skip(page.saturating_sub(1) * limit)
                    .take(limit)
                    .cloned()
                    .collect(),
                _ => posts.clone(),
            };
            serde_json::Value::Array(served).to_string()
        }
    };

    (status, [("content-type", "application/json")], body).into_response()
}
