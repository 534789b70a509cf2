//! Fiscal calendar entities: year/quarter/month CRUD and linkage

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

mod common;
use common::{await_search, merge_patch, next_value, request, test_app};

async fn create(app: &axum::Router, path: &str, body: Value) -> Value {
    let (status, _, created) = request(app, Method::POST, path, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    created
}

#[tokio::test]
async fn calendar_hierarchy_round_trip() {
    let app = test_app().await;
    let year_number = 2000 + next_value() as i32;

    let year = create(
        &app,
        "/api/fiscal-years",
        json!({ "year": year_number, "startDate": "2026-07-01", "endDate": "2027-06-30" }),
    )
    .await;

    let quarter = create(
        &app,
        "/api/fiscal-quarters",
        json!({
            "quarterNumber": 1,
            "startDate": "2026-07-01",
            "endDate": "2026-09-30",
            "fiscalYearId": year["id"]
        }),
    )
    .await;
    assert_eq!(quarter["fiscalYearId"], year["id"]);

    let month = create(
        &app,
        "/api/fiscal-months",
        json!({ "monthNumber": 1, "fiscalQuarterId": quarter["id"] }),
    )
    .await;
    assert_eq!(month["fiscalQuarterId"], quarter["id"]);
    assert_eq!(month["startDate"], Value::Null);

    // Quarters are filterable by their parent year
    let (_, _, quarters) = request(
        &app,
        Method::GET,
        &format!("/api/fiscal-quarters?fiscalYearId.equals={}", year["id"]),
        None,
    )
    .await;
    assert_eq!(quarters.as_array().unwrap().len(), 1);

    let (_, _, months) = request(
        &app,
        Method::GET,
        &format!("/api/fiscal-months?fiscalQuarterId.equals={}", quarter["id"]),
        None,
    )
    .await;
    assert_eq!(months.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn year_range_filters_and_count_agree() {
    let app = test_app().await;
    // Unique window so parallel tests cannot interfere within this app
    let base = 3000 + (next_value() as i32) * 10;
    for offset in 0..3 {
        create(&app, "/api/fiscal-years", json!({ "year": base + offset })).await;
    }

    let cases = [
        (format!("year.greaterThanOrEqual={base}&year.lessThan={}", base + 3), 3),
        (format!("year.greaterThan={base}&year.lessThanOrEqual={}", base + 2), 2),
        (format!("year.equals={}", base + 1), 1),
        (format!("year.in={},{}", base, base + 2), 2),
        (format!("year.greaterThanOrEqual={base}&year.notIn={}", base + 1), 2),
    ];

    for (filter, expected) in cases {
        let (_, _, list) = request(
            &app,
            Method::GET,
            &format!("/api/fiscal-years?{filter}"),
            None,
        )
        .await;
        assert_eq!(
            list.as_array().unwrap().len(),
            expected,
            "filter {filter}: {list}"
        );

        let (_, _, count) = request(
            &app,
            Method::GET,
            &format!("/api/fiscal-years/count?{filter}"),
            None,
        )
        .await;
        assert_eq!(count, json!(expected), "count disagrees for {filter}");
    }
}

#[tokio::test]
async fn missing_required_numbers_are_rejected() {
    let app = test_app().await;
    let cases = [
        ("/api/fiscal-years", json!({ "startDate": "2026-07-01" })),
        ("/api/fiscal-quarters", json!({ "startDate": "2026-07-01" })),
        ("/api/fiscal-months", json!({ "endDate": "2026-07-31" })),
    ];
    for (path, body) in cases {
        let (status, _, problem) = request(&app, Method::POST, path, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}: {problem}");
        assert_eq!(problem["status"], 400);
    }
}

#[tokio::test]
async fn patch_clears_dates() {
    let app = test_app().await;
    let year = create(
        &app,
        "/api/fiscal-years",
        json!({ "year": 2000 + next_value(), "startDate": "2026-07-01" }),
    )
    .await;
    let id = year["id"].as_i64().unwrap();

    let (status, _, patched) = merge_patch(
        &app,
        &format!("/api/fiscal-years/{id}"),
        json!({ "id": id, "startDate": null, "endDate": "2027-06-30" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["startDate"], Value::Null);
    assert_eq!(patched["endDate"], "2027-06-30");
}

#[tokio::test]
async fn years_are_searchable_by_number() {
    let app = test_app().await;
    let year_number = 9000 + next_value();
    create(&app, "/api/fiscal-years", json!({ "year": year_number })).await;

    await_search(
        &app,
        &format!("/api/fiscal-years/_search?query={year_number}"),
        |body| body.as_array().is_some_and(|a| a.len() == 1),
    )
    .await;
}
