//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use chrono::Utc;

use crate::report::render_report;
use crate::sizing::SizingResults;

use super::AppState;
use super::types::{LoadRecord, LoadsResponse};

/// Returns the full sizing results.
///
/// `GET /results` → 200 + `SizingResults` JSON
pub async fn get_results(State(state): State<Arc<AppState>>) -> Json<SizingResults> {
    Json(state.results.clone())
}

/// Returns the appliance list with the aggregate energy breakdown.
///
/// `GET /loads` → 200 + `LoadsResponse` JSON
pub async fn get_loads(State(state): State<Arc<AppState>>) -> Json<LoadsResponse> {
    Json(LoadsResponse {
        loads: state.loads.iter().map(LoadRecord::from).collect(),
        energy: state.results.energy.clone(),
    })
}

/// Returns the plain-text design report.
///
/// `GET /report` → 200 + `text/plain` body
pub async fn get_report(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let generated_at = Utc::now().to_rfc3339();
    let body = render_report(&generated_at, &state.loads, &state.params, &state.results);
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}
