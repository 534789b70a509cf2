//! BI notification bridge: publish, register (SSE), unregister

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

mod common;
use common::test_app;

async fn call(app: &axum::Router, method: Method, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn publish_echoes_the_message() {
    let app = test_app().await;
    let response = call(
        &app,
        Method::POST,
        "/api/money-market-bi-kafka/publish?message=batch%20ready",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"batch ready");
}

#[tokio::test]
async fn publish_without_message_is_rejected() {
    let app = test_app().await;
    let response = call(&app, Method::POST, "/api/money-market-bi-kafka/publish").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn registered_stream_receives_published_messages() {
    let app = test_app().await;

    let response = call(&app, Method::GET, "/api/money-market-bi-kafka/register").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "text/event-stream"
    );
    let mut stream = response.into_body();

    // The subscription exists as soon as register returns, so the broadcast
    // channel buffers anything published before the body is polled.
    let publish = call(
        &app,
        Method::POST,
        "/api/money-market-bi-kafka/publish?message=rates%20updated",
    )
    .await;
    assert_eq!(publish.status(), StatusCode::OK);

    let frame = stream.frame().await.unwrap().unwrap();
    let data = frame.into_data().unwrap();
    let text = std::str::from_utf8(&data).unwrap();
    assert!(text.contains("rates updated"), "unexpected event: {text}");
}

#[tokio::test]
async fn unregister_ends_open_streams() {
    let app = test_app().await;

    let response = call(&app, Method::GET, "/api/money-market-bi-kafka/register").await;
    let mut stream = response.into_body();

    let response = call(&app, Method::GET, "/api/money-market-bi-kafka/unregister").await;
    assert_eq!(response.status(), StatusCode::OK);

    // The generation bump closes the stream without delivering anything.
    let ended = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        while let Some(frame) = stream.frame().await {
            frame.unwrap();
        }
    })
    .await;
    assert!(ended.is_ok(), "stream did not end after unregister");
}
