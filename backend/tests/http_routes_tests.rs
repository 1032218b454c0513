//! Route-level tests driving the axum router in-process.

#![cfg(feature = "http-server")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use seat_vacancy::charts::LocalChartSource;
use seat_vacancy::http::{create_router, AppState};
use seat_vacancy::narrative::{FailingNarrator, NarrativeGenerator, StaticNarrator};
use seat_vacancy::services::{NarrativeFormatter, ADVICE_FAILURE, ADVICE_PLACEHOLDER};

mod support;

fn app_with(source: LocalChartSource, narrator: Arc<dyn NarrativeGenerator>) -> Router {
    create_router(AppState::new(
        Arc::new(source),
        narrator,
        NarrativeFormatter::default(),
    ))
}

fn seeded_source() -> LocalChartSource {
    let source = LocalChartSource::new();
    source.insert_chart("12802", support::chart_12802());
    source
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_find_seats_returns_table_and_advice() {
    let narrator = Arc::new(StaticNarrator::new("### 🛤️ RECOMMENDED ITINERARY"));
    let app = app_with(seeded_source(), narrator.clone());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/find_seats",
        Some(json!({
            "train_no": "12802",
            "date": "2026-10-16",
            "station": "DDU",
            "dest_station": "PNBE",
            "class_pref": "ALL"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["raw_data"],
        json!([
            {"Coach": "B3", "Seat": 12, "Type": "LB", "From": "DDU", "To": "GAYA"},
            {"Coach": "A1", "Seat": "5", "Type": "Unknown", "From": "CNB", "To": "PNBE"}
        ])
    );
    assert_eq!(body["ai_advice"], "### 🛤️ RECOMMENDED ITINERARY");
    assert_eq!(narrator.call_count(), 1);
}

#[tokio::test]
async fn test_find_seats_without_stations_skips_narrative() {
    let narrator = Arc::new(StaticNarrator::new("unused"));
    let app = app_with(seeded_source(), narrator.clone());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/find_seats",
        Some(json!({"train_no": "12802"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ai_advice"], ADVICE_PLACEHOLDER);
    assert_eq!(body["raw_data"].as_array().unwrap().len(), 2);
    assert_eq!(narrator.call_count(), 0);
}

#[tokio::test]
async fn test_find_seats_class_filter() {
    let app = app_with(seeded_source(), Arc::new(StaticNarrator::new("ok")));

    let (status, body) = send(
        app,
        Method::POST,
        "/api/find_seats",
        Some(json!({"train_no": "12802", "class_pref": "3A"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let rows = body["raw_data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Coach"], "B3");
}

#[tokio::test]
async fn test_find_seats_degrades_when_narrative_fails() {
    let app = app_with(seeded_source(), Arc::new(FailingNarrator));

    let (status, body) = send(
        app,
        Method::POST,
        "/api/find_seats",
        Some(json!({"train_no": "12802", "station": "DDU", "dest_station": "PNBE"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["ai_advice"], ADVICE_FAILURE);
    assert_eq!(body["raw_data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_train_is_no_data() {
    let app = app_with(seeded_source(), Arc::new(StaticNarrator::new("ok")));

    let (status, body) = send(
        app,
        Method::POST,
        "/api/find_seats",
        Some(json!({"train_no": "11111", "station": "DDU", "dest_station": "PNBE"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], "NO_DATA");
    assert_eq!(body["message"], "No data found.");
}

#[tokio::test]
async fn test_request_validation() {
    let app = app_with(seeded_source(), Arc::new(StaticNarrator::new("ok")));

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/api/find_seats",
        Some(json!({"train_no": "   "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, _) = send(
        app.clone(),
        Method::POST,
        "/api/find_seats",
        Some(json!({"train_no": "12802", "class_pref": "CC"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        app,
        Method::POST,
        "/api/find_seats",
        Some(json!({"train_no": "../12802"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_chart_aborts_request() {
    let source = LocalChartSource::new();
    source
        .insert_chart_json(
            "12802",
            r#"[{"scraped_coach_name": "B3", "bdd": [{"berthNo": 1, "bsd": [{"from": "DDU", "occupancy": false}]}]}]"#,
        )
        .unwrap();
    let narrator = Arc::new(StaticNarrator::new("unused"));
    let app = app_with(source, narrator.clone());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/find_seats",
        Some(json!({"train_no": "12802", "station": "DDU", "dest_station": "PNBE"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "MALFORMED_CHART");
    assert!(body["details"].as_str().unwrap().contains("missing 'to'"));
    assert_eq!(narrator.call_count(), 0);
}

#[tokio::test]
async fn test_unavailable_source_is_bad_gateway() {
    let source = seeded_source();
    source.set_healthy(false);
    let app = app_with(source, Arc::new(StaticNarrator::new("ok")));

    let (status, body) = send(
        app,
        Method::POST,
        "/api/find_seats",
        Some(json!({"train_no": "12802"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "CHART_SOURCE_ERROR");
}

#[tokio::test]
async fn test_compile_endpoint_returns_spans_and_fragments() {
    let app = app_with(LocalChartSource::new(), Arc::new(StaticNarrator::new("unused")));

    let (status, body) = send(
        app,
        Method::POST,
        "/v1/compile",
        Some(json!({
            "coaches": [
                {"scraped_coach_name": "B5", "bdd": [
                    {"berthNo": 40, "berthCode": "SL", "bsd": [
                        {"from": "A", "to": "B", "occupancy": false},
                        {"from": "B", "to": "C", "occupancy": true},
                        {"from": "C", "to": "D", "occupancy": false}
                    ]}
                ]}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["raw_data"],
        json!([
            {"Coach": "B5", "Seat": 40, "Type": "SL", "From": "A", "To": "B"},
            {"Coach": "B5", "Seat": 40, "Type": "SL", "From": "C", "To": "D"}
        ])
    );
    assert_eq!(body["fragments"], json!(["B5-40 (A->B)", "B5-40 (C->D)"]));
}

#[tokio::test]
async fn test_compile_endpoint_without_coaches_is_no_data() {
    let app = app_with(LocalChartSource::new(), Arc::new(StaticNarrator::new("unused")));

    let (status, body) = send(app, Method::POST, "/v1/compile", Some(json!({"coaches": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NO_DATA");
}

#[tokio::test]
async fn test_health_reports_collaborators() {
    let app = app_with(seeded_source(), Arc::new(StaticNarrator::new("ok")));

    let (status, body) = send(app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["chart_source"], "local");
    assert_eq!(body["chart_source_healthy"], true);
    assert_eq!(body["narrative_model"], "static");
}
