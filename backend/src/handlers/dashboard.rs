//! HTTP handlers for the dashboard endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{DailyWaterRecord, WeeklyIrrigationRecord};

use crate::error::AppResult;
use crate::services::dashboard::{
    CurrentWeekStatus, DashboardService, DEFAULT_BALANCE_WEEKS, DEFAULT_TREND_DAYS,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct WaterBalanceQuery {
    pub weeks: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct DailyTrendQuery {
    pub days: Option<usize>,
}

/// Current week status with its advisory classification
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<CurrentWeekStatus>> {
    let service = DashboardService::new(state.dataset.clone());
    let status = service.current_week_status()?;
    Ok(Json(status))
}

/// Trailing weekly water balance rows (default 12 weeks)
pub async fn get_water_balance(
    State(state): State<AppState>,
    Query(query): Query<WaterBalanceQuery>,
) -> AppResult<Json<Vec<WeeklyIrrigationRecord>>> {
    let service = DashboardService::new(state.dataset.clone());
    let rows = service.water_balance(query.weeks.unwrap_or(DEFAULT_BALANCE_WEEKS));
    Ok(Json(rows))
}

/// Trailing daily water balance rows (default 30 days)
pub async fn get_daily_trend(
    State(state): State<AppState>,
    Query(query): Query<DailyTrendQuery>,
) -> AppResult<Json<Vec<DailyWaterRecord>>> {
    let service = DashboardService::new(state.dataset.clone());
    let rows = service.daily_trend(query.days.unwrap_or(DEFAULT_TREND_DAYS));
    Ok(Json(rows))
}
