//! Common test utilities: an app over in-memory SQLite plus HTTP helpers

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use money_market_service::app;
use money_market_service::config::DatabaseConfig;

/// Spin up the full router over a fresh in-memory database. One connection
/// only, so every request sees the same SQLite instance.
pub async fn test_app() -> Router {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let db = app::connect_and_migrate(&config)
        .await
        .expect("test database setup failed");
    let (state, _mirror_task) = app::build_state(db);
    app::build_router(state)
}

static COUNTER: AtomicI64 = AtomicI64::new(1);

/// Monotonic per-test-run counter for unique names, tokens, and numbers
pub fn next_value() -> i64 {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    send(app, method, uri, body, "application/json").await
}

/// PATCH with the merge-patch media type
pub async fn merge_patch(app: &Router, uri: &str, body: Value) -> (StatusCode, HeaderMap, Value) {
    send(app, Method::PATCH, uri, Some(body), "application/merge-patch+json").await
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    content_type: &str,
) -> (StatusCode, HeaderMap, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, content_type);
            builder.body(Body::from(value.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, headers, json)
}

pub fn total_count(headers: &HeaderMap) -> u64 {
    headers
        .get("x-total-count")
        .expect("X-Total-Count header missing")
        .to_str()
        .unwrap()
        .parse()
        .unwrap()
}

/// Poll a `_search` endpoint until the predicate holds; panics after five
/// seconds, the mirror's visibility bound.
pub async fn await_search<F>(app: &Router, uri: &str, predicate: F) -> Value
where
    F: Fn(&Value) -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        let (status, _, body) = request(app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "search endpoint failed: {body}");
        if predicate(&body) {
            return body;
        }
        if tokio::time::Instant::now() >= deadline {
            panic!("search mirror did not converge within 5s for {uri}: {body}");
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
