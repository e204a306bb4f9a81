//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::core::store::MarketStore;
use crate::metrics::Metrics;
use crate::models::{AllocationChangeSummary, HistoryRecord, MomentumSnapshot, Region};
use crate::signals::{self, HistoryRange};

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub regions: Arc<Vec<Region>>,
    pub store: Arc<RwLock<MarketStore>>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "gemdash-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    #[serde(default)]
    range: HistoryRange,
}

#[derive(Debug, Serialize)]
struct MomentumResponse {
    signal: String,
    interpretation: String,
    momentum: std::collections::HashMap<String, f64>,
    prices: std::collections::HashMap<String, f64>,
    last_updated: chrono::DateTime<chrono::Utc>,
}

fn region_or_404(state: &AppState, name: &str) -> Result<Region, (StatusCode, Json<Value>)> {
    crate::config::find_region(&state.regions, name)
        .cloned()
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("unknown region '{}'", name) })),
            )
        })
}

/// Accept a fresh momentum snapshot pushed by the data pipeline.
async fn put_momentum(
    State(state): State<AppState>,
    Path(region): Path<String>,
    Json(snapshot): Json<MomentumSnapshot>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    region_or_404(&state, &region)?;
    let mut store = state.store.write().await;
    store.set_snapshot(&region, snapshot);
    info!(region = %region, "Momentum snapshot updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Accept a full descending history series pushed by the data pipeline.
/// Malformed series are rejected whole so readers never see bad streaks.
async fn put_history(
    State(state): State<AppState>,
    Path(region): Path<String>,
    Json(history): Json<Vec<HistoryRecord>>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    region_or_404(&state, &region)?;
    let record_count = history.len();
    let mut store = state.store.write().await;
    store.replace_history(&region, history).map_err(|e| {
        error!(region = %region, error = %e, "Rejected malformed history series");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": e.to_string() })),
        )
    })?;
    info!(region = %region, records = record_count, "History series replaced");
    Ok(StatusCode::NO_CONTENT)
}

/// Latest snapshot with the re-ranked signal and its rationale narrative.
async fn get_momentum(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<MomentumResponse>, (StatusCode, Json<Value>)> {
    let region = region_or_404(&state, &region)?;
    let store = state.store.read().await;
    let snapshot = store.snapshot(&region.name).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no snapshot ingested for region '{}'", region.name) })),
        )
    })?;

    state.metrics.signal_ranks_total.inc();
    let signal = signals::rank(snapshot, &region);
    let interpretation = signals::compose(&signal, snapshot, &region);

    Ok(Json(MomentumResponse {
        signal,
        interpretation,
        momentum: snapshot.momentum.clone(),
        prices: snapshot.prices.clone(),
        last_updated: snapshot.last_updated,
    }))
}

/// Windowed history for the table path.
async fn get_history(
    State(state): State<AppState>,
    Path(region): Path<String>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryRecord>>, (StatusCode, Json<Value>)> {
    let region = region_or_404(&state, &region)?;
    let store = state.store.read().await;
    let windowed = signals::window(store.history(&region.name), params.range);
    Ok(Json(windowed.to_vec()))
}

/// Windowed history further clipped to the fixed chart span.
async fn get_history_chart(
    State(state): State<AppState>,
    Path(region): Path<String>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryRecord>>, (StatusCode, Json<Value>)> {
    let region = region_or_404(&state, &region)?;
    let store = state.store.read().await;
    let windowed = signals::window(store.history(&region.name), params.range);
    Ok(Json(signals::chart_window(windowed).to_vec()))
}

/// Streak statistics for the region's full stored history.
async fn get_allocation_changes(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<AllocationChangeSummary>, (StatusCode, Json<Value>)> {
    let region = region_or_404(&state, &region)?;
    let store = state.store.read().await;

    state.metrics.streak_analyses_total.inc();
    let summary = signals::analyze(store.history(&region.name)).map_err(|e| {
        // History is validated at ingest, so this indicates an engine bug.
        error!(region = %region.name, error = %e, "Streak analysis failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
    })?;

    Ok(Json(summary))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/regions/{region}/momentum", put(put_momentum))
        .route("/api/regions/{region}/momentum", get(get_momentum))
        .route("/api/regions/{region}/history", put(put_history))
        .route("/api/regions/{region}/history", get(get_history))
        .route("/api/regions/{region}/history/chart", get(get_history_chart))
        .route(
            "/api/regions/{region}/allocation-changes",
            get(get_allocation_changes),
        )
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());
    let regions = Arc::new(crate::config::default_regions());

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics: metrics.clone(),
        start_time: start_time.clone(),
        regions,
        store: Arc::new(RwLock::new(MarketStore::new())),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
