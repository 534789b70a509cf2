//! Money market deal surface: required fields, placeholder attachments,
//! range filters, pagination, and mirror visibility

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

mod common;
use common::{await_search, merge_patch, next_value, request, test_app, total_count};

fn deal_body(deal_number: &str) -> Value {
    json!({
        "dealNumber": deal_number,
        "tradeDate": "2026-01-02",
        "settlementDate": "2026-01-05",
        "maturityDate": "2026-04-05",
        "principalAmount": "1000000.00",
        "interestRate": "0.045000",
        "currency": "USD",
        "counterparty": "First National",
        "active": true
    })
}

async fn create_deal(app: &axum::Router, body: Value) -> Value {
    let (status, _, created) =
        request(app, Method::POST, "/api/money-market-deals", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    created
}

async fn create_placeholder(app: &axum::Router, token: &str) -> Value {
    let (status, _, created) = request(
        app,
        Method::POST,
        "/api/placeholders",
        Some(json!({ "token": token })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    created
}

#[tokio::test]
async fn each_required_field_nulled_is_rejected() {
    let app = test_app().await;
    let (_, _, before) =
        request(&app, Method::GET, "/api/money-market-deals/count", None).await;

    for field in ["dealNumber", "settlementDate", "maturityDate", "active"] {
        let mut body = deal_body(&format!("MMD-{}", next_value()));
        body[field] = Value::Null;
        let (status, _, problem) =
            request(&app, Method::POST, "/api/money-market-deals", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{field} accepted as null");
        assert_eq!(problem["title"], "Validation Error");
    }

    let (_, _, after) =
        request(&app, Method::GET, "/api/money-market-deals/count", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn placeholders_attach_and_replace() {
    let app = test_app().await;
    let tag_a = create_placeholder(&app, &format!("tag-{}", next_value())).await;
    let tag_b = create_placeholder(&app, &format!("tag-{}", next_value())).await;

    let mut body = deal_body(&format!("MMD-{}", next_value()));
    body["placeholders"] = json!([{ "id": tag_a["id"] }]);
    let created = create_deal(&app, body).await;
    let id = created["id"].as_i64().unwrap();

    // Read-back embeds the attached placeholder with its token
    let (_, _, fetched) = request(
        &app,
        Method::GET,
        &format!("/api/money-market-deals/{id}"),
        None,
    )
    .await;
    let attached = fetched["placeholders"].as_array().unwrap();
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0]["id"], tag_a["id"]);
    assert_eq!(attached[0]["token"], tag_a["token"]);

    // PUT replaces the association set
    let mut replacement = fetched.clone();
    replacement["placeholders"] = json!([{ "id": tag_b["id"] }]);
    let (status, _, updated) = request(
        &app,
        Method::PUT,
        &format!("/api/money-market-deals/{id}"),
        Some(replacement),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let attached = updated["placeholders"].as_array().unwrap();
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0]["id"], tag_b["id"]);

    // Merge-patch with an empty set detaches everything
    let (status, _, patched) = merge_patch(
        &app,
        &format!("/api/money-market-deals/{id}"),
        json!({ "id": id, "placeholders": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(patched["placeholders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn range_and_boolean_filters() {
    let app = test_app().await;
    let marker = format!("RNG{}", next_value());

    let mut early = deal_body(&format!("{marker}-A"));
    early["settlementDate"] = json!("2026-01-05");
    early["principalAmount"] = json!("500000.00");
    create_deal(&app, early).await;

    let mut late = deal_body(&format!("{marker}-B"));
    late["settlementDate"] = json!("2026-02-05");
    late["principalAmount"] = json!("2000000.00");
    late["active"] = json!(false);
    create_deal(&app, late).await;

    let base = format!("dealNumber.contains={marker}");
    let cases = [
        (format!("{base}&settlementDate.greaterThan=2026-01-31"), 1),
        (format!("{base}&settlementDate.greaterThanOrEqual=2026-01-05"), 2),
        (format!("{base}&settlementDate.lessThan=2026-01-06"), 1),
        (format!("{base}&settlementDate.lessThanOrEqual=2026-01-04"), 0),
        (format!("{base}&principalAmount.greaterThan=1000000"), 1),
        (format!("{base}&active.equals=true"), 1),
        (format!("{base}&active.notEquals=true"), 1),
        (format!("{base}&settlementDate.equals=2026-02-05"), 1),
    ];

    for (filter, expected) in cases {
        let (status, headers, list) = request(
            &app,
            Method::GET,
            &format!("/api/money-market-deals?{filter}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            list.as_array().unwrap().len(),
            expected,
            "filter {filter}: {list}"
        );
        assert_eq!(total_count(&headers), expected as u64);

        let (_, _, count) = request(
            &app,
            Method::GET,
            &format!("/api/money-market-deals/count?{filter}"),
            None,
        )
        .await;
        assert_eq!(count, json!(expected), "count disagrees for {filter}");
    }
}

#[tokio::test]
async fn sorting_and_pagination() {
    let app = test_app().await;
    let marker = format!("PAGE{}", next_value());
    for suffix in ["C", "A", "B"] {
        create_deal(&app, deal_body(&format!("{marker}-{suffix}"))).await;
    }

    let (_, headers, page) = request(
        &app,
        Method::GET,
        &format!(
            "/api/money-market-deals?dealNumber.contains={marker}&sort=dealNumber,desc&page=0&size=2"
        ),
        None,
    )
    .await;
    let rows = page.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["dealNumber"], format!("{marker}-C"));
    assert_eq!(rows[1]["dealNumber"], format!("{marker}-B"));
    // Header carries the total across pages, not the page length
    assert_eq!(total_count(&headers), 3);

    let (_, _, page) = request(
        &app,
        Method::GET,
        &format!(
            "/api/money-market-deals?dealNumber.contains={marker}&sort=dealNumber,desc&page=1&size=2"
        ),
        None,
    )
    .await;
    let rows = page.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["dealNumber"], format!("{marker}-A"));
}

#[tokio::test]
async fn merge_patch_clears_optional_fields() {
    let app = test_app().await;
    let created = create_deal(&app, deal_body(&format!("MMD-{}", next_value()))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, _, patched) = merge_patch(
        &app,
        &format!("/api/money-market-deals/{id}"),
        json!({ "id": id, "counterparty": null, "interestRate": "0.050000" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["counterparty"], Value::Null);
    let rate: f64 = patched["interestRate"].as_str().unwrap().parse().unwrap();
    assert!((rate - 0.05).abs() < 1e-9);
    assert_eq!(patched["currency"], "USD");
}

#[tokio::test]
async fn updates_reach_the_search_mirror() {
    let app = test_app().await;
    let number = format!("MIRROR-{}", next_value());
    let created = create_deal(&app, deal_body(&number)).await;
    let id = created["id"].as_i64().unwrap();

    await_search(
        &app,
        &format!("/api/money-market-deals/_search?query={number}"),
        |body| body.as_array().is_some_and(|a| a.len() == 1),
    )
    .await;

    let renumbered = format!("MIRROR-{}", next_value());
    let (status, _, _) = merge_patch(
        &app,
        &format!("/api/money-market-deals/{id}"),
        json!({ "id": id, "dealNumber": renumbered }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Old number gone, new one visible
    await_search(
        &app,
        &format!("/api/money-market-deals/_search?query={renumbered}"),
        |body| body.as_array().is_some_and(|a| a.len() == 1),
    )
    .await;
    await_search(
        &app,
        &format!("/api/money-market-deals/_search?query={number}"),
        |body| body.as_array().is_some_and(|a| a.is_empty()),
    )
    .await;
}
