//! Integration tests for the API Server
//!
//! Tests health checks, metrics, ingestion, and the analysis endpoints.


use chrono::{Days, Utc};
use serde_json::{json, Value};

use test_utils::TestApiServer;

fn momentum_body(spy: f64, veu: f64, threshold: f64) -> Value {
    json!({
        "momentum": { "SPY": spy, "VEU": veu, "BND": 0.015, "THRESHOLD": threshold },
        "prices": { "SPY": 512.3, "VEU": 58.1, "BND": 72.4 },
        "last_updated": Utc::now().to_rfc3339()
    })
}

/// Descending history ending today, signals newest-first.
fn history_body(signals: &[&str]) -> Value {
    let today = Utc::now().date_naive();
    let records: Vec<Value> = signals
        .iter()
        .enumerate()
        .map(|(i, s)| {
            json!({
                "id": (signals.len() - i) as i64,
                "date": (today - Days::new(i as u64)).to_string(),
                "momentum": { "SPY": 0.05, "VEU": 0.02 },
                "signal": s
            })
        })
        .collect();
    json!(records)
}

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "gemdash-signal-engine");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let _ = app.server.get("/health").await;
    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(
        body.contains("http_requests_total"),
        "Expected http_requests_total metric"
    );
    assert!(
        body.contains("http_request_duration_seconds"),
        "Expected http_request_duration_seconds metric"
    );
    assert!(
        body.contains("http_requests_in_flight"),
        "Expected http_requests_in_flight metric"
    );
}

#[tokio::test]
async fn unknown_region_is_a_404() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/regions/MARS/momentum").await;
    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("MARS"));
}

#[tokio::test]
async fn momentum_before_ingestion_is_a_404() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/regions/US/momentum").await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn ingested_snapshot_is_ranked_and_interpreted() {
    let app = TestApiServer::new().await;

    let put = app
        .server
        .put("/api/regions/US/momentum")
        .json(&momentum_body(0.10, 0.05, 0.02))
        .await;
    assert_eq!(put.status_code(), 204);

    let response = app.server.get("/api/regions/US/momentum").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["signal"], "SPY");
    assert!(body["interpretation"].as_str().unwrap().contains("SPY"));
    assert_eq!(body["momentum"]["VEU"], 0.05);
    assert_eq!(body["prices"]["SPY"], 512.3);
}

#[tokio::test]
async fn defensive_snapshot_ranks_to_the_bond() {
    let app = TestApiServer::new().await;

    app.server
        .put("/api/regions/US/momentum")
        .json(&momentum_body(0.01, 0.03, 0.05))
        .await;

    let body: Value = app.server.get("/api/regions/US/momentum").await.json();
    assert_eq!(body["signal"], "BND");
}

#[tokio::test]
async fn regions_do_not_interfere() {
    let app = TestApiServer::new().await;

    app.server
        .put("/api/regions/US/momentum")
        .json(&momentum_body(0.10, 0.05, 0.02))
        .await;

    // EU never received a snapshot
    let response = app.server.get("/api/regions/EU/momentum").await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn malformed_history_is_rejected_with_422() {
    let app = TestApiServer::new().await;

    let today = Utc::now().date_naive();
    let dup = json!([
        { "id": 2, "date": today.to_string(), "momentum": {}, "signal": "SPY" },
        { "id": 1, "date": today.to_string(), "momentum": {}, "signal": "SPY" }
    ]);
    let response = app.server.put("/api/regions/US/history").json(&dup).await;
    assert_eq!(response.status_code(), 422);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("duplicate"));
}

#[tokio::test]
async fn allocation_changes_report_the_latest_shift() {
    let app = TestApiServer::new().await;

    // Newest first: two SPY days, two VEU days, one BND day
    let put = app
        .server
        .put("/api/regions/US/history")
        .json(&history_body(&["SPY", "SPY", "VEU", "VEU", "BND"]))
        .await;
    assert_eq!(put.status_code(), 204);

    let response = app.server.get("/api/regions/US/allocation-changes").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["has_history"], true);
    assert_eq!(body["no_change_in_history"], false);
    assert_eq!(body["current_signal"], "SPY");
    assert_eq!(body["previous_signal"], "VEU");
    // The SPY run started yesterday
    assert_eq!(body["days_since_change"], 1);
    assert_eq!(body["previous_signal_duration_days"], 2);
}

#[tokio::test]
async fn allocation_changes_on_empty_history_report_no_history() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/api/regions/US/allocation-changes").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["has_history"], false);
}

#[tokio::test]
async fn history_ranges_cap_the_table_and_chart_paths() {
    let app = TestApiServer::new().await;

    let signals = vec!["SPY"; 350];
    let put = app
        .server
        .put("/api/regions/US/history")
        .json(&history_body(&signals))
        .await;
    assert_eq!(put.status_code(), 204);

    let short: Value = app
        .server
        .get("/api/regions/US/history")
        .add_query_param("range", "3m")
        .await
        .json();
    assert_eq!(short.as_array().unwrap().len(), 100);

    // Default range is 1y (300 records); the chart path clips to 180
    let table: Value = app.server.get("/api/regions/US/history").await.json();
    assert_eq!(table.as_array().unwrap().len(), 300);

    let chart: Value = app.server.get("/api/regions/US/history/chart").await.json();
    assert_eq!(chart.as_array().unwrap().len(), 180);

    let max: Value = app
        .server
        .get("/api/regions/US/history")
        .add_query_param("range", "max")
        .await
        .json();
    assert_eq!(max.as_array().unwrap().len(), 350);
}
