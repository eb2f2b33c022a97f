//! HTTP handlers for the 7-day forecast endpoints

use axum::{extract::State, Json};
use shared::ScenarioProjection;

use crate::error::AppResult;
use crate::services::forecast::{ForecastOutlook, ForecastService};
use crate::AppState;

/// Aggregated 7-day irrigation outlook
pub async fn get_forecast(State(state): State<AppState>) -> AppResult<Json<ForecastOutlook>> {
    let service = ForecastService::new(state.dataset.clone());
    let outlook = service.outlook()?;
    Ok(Json(outlook))
}

/// Fixed what-if scenario projections
pub async fn get_scenarios(State(state): State<AppState>) -> Json<Vec<ScenarioProjection>> {
    let service = ForecastService::new(state.dataset.clone());
    Json(service.scenarios())
}
