//! Operational HTTP endpoints.
//!
//! - `/healthz`      : liveness
//! - `/metrics`      : plain-text counter dump
//! - `/metrics.json` : same snapshot as JSON
//!
//! The metrics handlers have no failure path: a snapshot always renders, so
//! every response is a 200.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::app_state::AppState;

/// Counter bumped once per served metrics request (self-instrumentation).
const REQUESTS_COUNTER: &str = "counterbox.http.requests";

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let metrics = state.metrics();
    metrics.counter(REQUESTS_COUNTER).increment();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        metrics.snapshot().http_body(),
    )
        .into_response()
}

pub async fn metrics_json(State(state): State<AppState>) -> Response {
    let metrics = state.metrics();
    metrics.counter(REQUESTS_COUNTER).increment();

    Json(metrics.snapshot()).into_response()
}
