//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub daily_records: usize,
    pub weekly_records: usize,
    pub forecast_days: usize,
    pub model_loaded: bool,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        daily_records: state.dataset.daily().len(),
        weekly_records: state.dataset.weekly().len(),
        forecast_days: state.dataset.forecast().len(),
        model_loaded: state.dataset.model_info().is_some(),
    })
}
