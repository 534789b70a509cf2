//! Lists, report batches, and upload notifications

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

mod common;
use common::{await_search, merge_patch, next_value, request, test_app, total_count};

#[tokio::test]
async fn list_lifecycle_and_status_validation() {
    let app = test_app().await;

    let (status, _, created) = request(
        &app,
        Method::POST,
        "/api/money-market-lists",
        Some(json!({
            "reportDate": "2026-08-28",
            "status": "PENDING",
            "description": "overnight repo book"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["status"], "PENDING");
    assert_eq!(created["uploadTimestamp"], Value::Null);

    // Unknown status values never reach storage
    let (status, _, problem) = request(
        &app,
        Method::POST,
        "/api/money-market-lists",
        Some(json!({ "reportDate": "2026-08-28", "status": "SHIPPED" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(problem["detail"].as_str().unwrap().contains("SHIPPED"));

    let (status, _, patched) = merge_patch(
        &app,
        &format!("/api/money-market-lists/{id}"),
        json!({ "id": id, "status": "PROCESSED", "description": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["status"], "PROCESSED");
    assert_eq!(patched["description"], Value::Null);

    let (_, headers, page) = request(
        &app,
        Method::GET,
        "/api/money-market-lists?status.equals=PROCESSED",
        None,
    )
    .await;
    assert_eq!(page.as_array().unwrap().len(), 1);
    assert_eq!(total_count(&headers), 1);
}

#[tokio::test]
async fn batch_uploaded_by_filter() {
    let app = test_app().await;
    let alice = "0b7e2f6a-9e0d-4a55-8c2e-3f1d2a4b5c6d";
    let bob = "c2a1d4e7-1234-4f00-9abc-7e8f90a1b2c3";

    for (who, status) in [(alice, "PENDING"), (alice, "PROCESSED"), (bob, "FAILED")] {
        let (code, _, body) = request(
            &app,
            Method::POST,
            "/api/report-batches",
            Some(json!({
                "uploadTimestamp": "2026-08-28T09:30:00Z",
                "status": status,
                "uploadedBy": who
            })),
        )
        .await;
        assert_eq!(code, StatusCode::CREATED, "{body}");
    }

    let (_, headers, mine) = request(
        &app,
        Method::GET,
        &format!("/api/report-batches?uploadedBy.equals={alice}"),
        None,
    )
    .await;
    assert_eq!(mine.as_array().unwrap().len(), 2);
    assert_eq!(total_count(&headers), 2);
    assert!(mine
        .as_array()
        .unwrap()
        .iter()
        .all(|b| b["uploadedBy"] == alice));

    let (_, _, count) = request(
        &app,
        Method::GET,
        &format!("/api/report-batches/count?uploadedBy.equals={bob}&status.equals=FAILED"),
        None,
    )
    .await;
    assert_eq!(count, json!(1));

    // specified=false finds batches without an uploader
    let (code, _, _) = request(
        &app,
        Method::POST,
        "/api/report-batches",
        Some(json!({ "uploadTimestamp": "2026-08-28T10:00:00Z", "status": "PENDING" })),
    )
    .await;
    assert_eq!(code, StatusCode::CREATED);
    let (_, _, anonymous) = request(
        &app,
        Method::GET,
        "/api/report-batches?uploadedBy.specified=false",
        None,
    )
    .await;
    assert_eq!(anonymous.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn batch_checksum_clears_via_patch() {
    let app = test_app().await;
    let (_, _, created) = request(
        &app,
        Method::POST,
        "/api/report-batches",
        Some(json!({
            "uploadTimestamp": "2026-08-28T09:30:00Z",
            "status": "PENDING",
            "checksum": "sha256:deadbeef"
        })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _, patched) = merge_patch(
        &app,
        &format!("/api/report-batches/{id}"),
        json!({ "id": id, "checksum": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["checksum"], Value::Null);
    // Untouched fields survive the merge
    assert_eq!(patched["status"], "PENDING");
}

#[tokio::test]
async fn notification_timestamp_range_filters() {
    let app = test_app().await;
    let stamps = [
        "2026-08-28T08:00:00Z",
        "2026-08-28T09:00:00Z",
        "2026-08-28T10:00:00Z",
    ];
    for (i, stamp) in stamps.iter().enumerate() {
        let (code, _, body) = request(
            &app,
            Method::POST,
            "/api/money-market-upload-notifications",
            Some(json!({
                "uploadTimestamp": stamp,
                "fileName": format!("mm-{i}.csv"),
                "recordCount": (i as i32 + 1) * 100
            })),
        )
        .await;
        assert_eq!(code, StatusCode::CREATED, "{body}");
    }

    let cases = [
        ("uploadTimestamp.greaterThan=2026-08-28T08:00:00Z", 2),
        ("uploadTimestamp.greaterThanOrEqual=2026-08-28T08:00:00Z", 3),
        ("uploadTimestamp.lessThan=2026-08-28T10:00:00Z", 2),
        ("uploadTimestamp.lessThanOrEqual=2026-08-28T08:00:00Z", 1),
        ("recordCount.greaterThan=150&recordCount.lessThan=250", 1),
    ];
    for (filter, expected) in cases {
        let (_, headers, list) = request(
            &app,
            Method::GET,
            &format!("/api/money-market-upload-notifications?{filter}"),
            None,
        )
        .await;
        assert_eq!(list.as_array().unwrap().len(), expected, "filter {filter}");
        assert_eq!(total_count(&headers), expected as u64, "header {filter}");

        let (_, _, count) = request(
            &app,
            Method::GET,
            &format!("/api/money-market-upload-notifications/count?{filter}"),
            None,
        )
        .await;
        assert_eq!(count, json!(expected), "count {filter}");
    }

    // uploadTimestamp is required
    let (code, _, _) = request(
        &app,
        Method::POST,
        "/api/money-market-upload-notifications",
        Some(json!({ "fileName": "mm-late.csv" })),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_descriptions_reach_the_search_mirror() {
    let app = test_app().await;
    let token = format!("quarterly-{}", next_value());

    let (_, _, created) = request(
        &app,
        Method::POST,
        "/api/money-market-lists",
        Some(json!({
            "reportDate": "2026-08-28",
            "status": "PENDING",
            "description": token
        })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    await_search(
        &app,
        &format!("/api/money-market-lists/_search?query={token}"),
        |body| {
            body.as_array()
                .is_some_and(|a| a.len() == 1 && a[0]["id"] == id)
        },
    )
    .await;

    // Status text is searchable too
    await_search(&app, "/api/money-market-lists/_search?query=pending", |b| {
        b.as_array().is_some_and(|a| !a.is_empty())
    })
    .await;
}
