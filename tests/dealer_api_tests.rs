//! Dealer CRUD surface: lifecycle, filters, count agreement, search mirror

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

mod common;
use common::{await_search, merge_patch, next_value, request, test_app, total_count};

async fn create_dealer(app: &axum::Router, name: &str, dealer_type: Option<&str>) -> Value {
    let (status, _, body) = request(
        app,
        Method::POST,
        "/api/dealers",
        Some(json!({ "dealerName": name, "dealerType": dealer_type })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body
}

#[tokio::test]
async fn full_lifecycle() {
    let app = test_app().await;
    let name = format!("Dealer-{}", next_value());

    let created = create_dealer(&app, &name, Some("BANK")).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["dealerName"], name.as_str());
    assert_eq!(created["dealerType"], "BANK");

    let (status, _, fetched) =
        request(&app, Method::GET, &format!("/api/dealers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    // Full replace
    let renamed = format!("Dealer-{}", next_value());
    let (status, _, updated) = request(
        &app,
        Method::PUT,
        &format!("/api/dealers/{id}"),
        Some(json!({ "id": id, "dealerName": renamed, "dealerType": "BROKER" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["dealerName"], renamed.as_str());
    assert_eq!(updated["dealerType"], "BROKER");

    let (status, _, _) =
        request(&app, Method::DELETE, &format!("/api/dealers/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, _) = request(&app, Method::GET, &format!("/api/dealers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Delete is idempotent
    let (status, _, _) =
        request(&app, Method::DELETE, &format!("/api/dealers/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn create_with_preset_id_is_rejected_and_counts_unchanged() {
    let app = test_app().await;

    let (_, _, before) = request(&app, Method::GET, "/api/dealers/count", None).await;

    let (status, _, body) = request(
        &app,
        Method::POST,
        "/api/dealers",
        Some(json!({ "id": 999, "dealerName": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (_, _, after) = request(&app, Method::GET, "/api/dealers/count", None).await;
    assert_eq!(before, after);

    // The rejected document never reaches the mirror. Change events are
    // applied in order, so once a later create is visible the rejected
    // name would be too, were it ever emitted.
    let sentinel = format!("Sentinel-{}", next_value());
    create_dealer(&app, &sentinel, None).await;
    await_search(&app, &format!("/api/dealers/_search?query={sentinel}"), |b| {
        b.as_array().is_some_and(|a| a.len() == 1)
    })
    .await;
    let (_, _, hits) = request(&app, Method::GET, "/api/dealers/_search?query=X", None).await;
    assert!(hits.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_required_field_is_rejected() {
    let app = test_app().await;

    let (status, _, body) = request(
        &app,
        Method::POST,
        "/api/dealers",
        Some(json!({ "dealerName": null, "dealerType": "BANK" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Validation Error");
}

#[tokio::test]
async fn equals_filter_partitions_the_dataset() {
    let app = test_app().await;
    create_dealer(&app, "AAAAAAAAAA", None).await;

    let (status, headers, body) = request(
        &app,
        Method::GET,
        "/api/dealers?dealerName.equals=AAAAAAAAAA",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["dealerName"], "AAAAAAAAAA");
    assert_eq!(total_count(&headers), 1);

    let (_, headers, body) = request(
        &app,
        Method::GET,
        "/api/dealers?dealerName.equals=BBBBBBBBBB",
        None,
    )
    .await;
    assert!(body.as_array().unwrap().is_empty());
    assert_eq!(total_count(&headers), 0);

    // count endpoint agrees with the list for the same filter
    let (_, _, count) = request(
        &app,
        Method::GET,
        "/api/dealers/count?dealerName.equals=AAAAAAAAAA",
        None,
    )
    .await;
    assert_eq!(count, json!(1));
}

#[tokio::test]
async fn string_filter_operators() {
    let app = test_app().await;
    let marker = format!("M{}", next_value());
    let name_a = format!("Alpha-{marker}");
    let name_b = format!("Beta-{marker}");
    create_dealer(&app, &name_a, Some("BANK")).await;
    create_dealer(&app, &name_b, None).await;

    let cases = [
        (format!("dealerName.contains={marker}"), 2),
        (format!("dealerName.contains={marker}&dealerName.doesNotContain=Beta"), 1),
        (format!("dealerName.in={name_a},{name_b}"), 2),
        (format!("dealerName.contains={marker}&dealerName.notIn={name_b}"), 1),
        (format!("dealerName.contains={marker}&dealerType.specified=true"), 1),
        (format!("dealerName.contains={marker}&dealerType.specified=false"), 1),
        (format!("dealerName.contains={marker}&dealerName.notEquals={name_a}"), 1),
    ];

    for (filter, expected) in cases {
        let (status, _, list) =
            request(&app, Method::GET, &format!("/api/dealers?{filter}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            list.as_array().unwrap().len(),
            expected,
            "filter {filter} returned the wrong rows: {list}"
        );

        let (_, _, count) = request(
            &app,
            Method::GET,
            &format!("/api/dealers/count?{filter}"),
            None,
        )
        .await;
        assert_eq!(count, json!(expected), "count disagrees for {filter}");
    }
}

#[tokio::test]
async fn merge_patch_updates_and_clears_fields() {
    let app = test_app().await;
    let name = format!("Dealer-{}", next_value());
    let created = create_dealer(&app, &name, Some("BANK")).await;
    let id = created["id"].as_i64().unwrap();

    // Absent field untouched, null clears
    let (status, _, patched) = merge_patch(
        &app,
        &format!("/api/dealers/{id}"),
        json!({ "id": id, "dealerType": null }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["dealerName"], name.as_str());
    assert_eq!(patched["dealerType"], Value::Null);

    let renamed = format!("Dealer-{}", next_value());
    let (status, _, patched) = merge_patch(
        &app,
        &format!("/api/dealers/{id}"),
        json!({ "id": id, "dealerName": renamed }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["dealerName"], renamed.as_str());
}

#[tokio::test]
async fn update_id_rules() {
    let app = test_app().await;
    let created = create_dealer(&app, &format!("Dealer-{}", next_value()), None).await;
    let id = created["id"].as_i64().unwrap();

    // Body id missing
    let (status, _, _) = request(
        &app,
        Method::PUT,
        &format!("/api/dealers/{id}"),
        Some(json!({ "dealerName": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Body id differs from path id
    let (status, _, _) = request(
        &app,
        Method::PUT,
        &format!("/api/dealers/{id}"),
        Some(json!({ "id": id + 1, "dealerName": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown id
    let (status, _, _) = request(
        &app,
        Method::PUT,
        "/api/dealers/999999",
        Some(json!({ "id": 999999, "dealerName": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // PATCH carries the same body id rules as PUT
    let (status, _, _) = merge_patch(
        &app,
        &format!("/api/dealers/{id}"),
        json!({ "dealerName": "X" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = merge_patch(
        &app,
        &format!("/api/dealers/{id}"),
        json!({ "id": id + 1, "dealerName": "Hijack" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // A rejected patch leaves the row untouched
    let (_, _, current) = request(&app, Method::GET, &format!("/api/dealers/{id}"), None).await;
    assert_eq!(current["dealerName"], created["dealerName"]);

    // PATCH without an id segment is not a routable method
    let (status, _, _) = merge_patch(&app, "/api/dealers", json!({ "dealerName": "X" })).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn writes_reach_the_search_mirror() {
    let app = test_app().await;
    let name = format!("Searchable-{}", next_value());
    let created = create_dealer(&app, &name, None).await;
    let id = created["id"].as_i64().unwrap();

    let uri = format!("/api/dealers/_search?query={name}");
    let hits = await_search(&app, &uri, |body| {
        body.as_array().is_some_and(|a| a.len() == 1)
    })
    .await;
    assert_eq!(hits[0]["id"], json!(id));

    // Star query sees the document too
    await_search(&app, "/api/dealers/_search?query=*", |body| {
        body.as_array()
            .is_some_and(|a| a.iter().any(|d| d["id"] == json!(id)))
    })
    .await;

    let (status, _, _) =
        request(&app, Method::DELETE, &format!("/api/dealers/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    await_search(&app, &uri, |body| {
        body.as_array().is_some_and(|a| a.is_empty())
    })
    .await;
}
