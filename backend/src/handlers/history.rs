//! HTTP handlers for the historical analysis endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::{DailyWaterRecord, PaginatedResponse, Pagination};

use crate::error::AppResult;
use crate::services::history::{
    AnnualWaterBalance, HistoryService, HistoryStatistics, MonthlyAverages,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DailyListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Per-year water balance totals
pub async fn get_annual_balance(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AnnualWaterBalance>>> {
    let service = HistoryService::new(state.dataset.clone());
    Ok(Json(service.annual_water_balance()))
}

/// Average daily values by calendar month
pub async fn get_monthly_averages(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MonthlyAverages>>> {
    let service = HistoryService::new(state.dataset.clone());
    Ok(Json(service.monthly_averages()))
}

/// Headline statistics over the observation period
pub async fn get_statistics(State(state): State<AppState>) -> AppResult<Json<HistoryStatistics>> {
    let service = HistoryService::new(state.dataset.clone());
    let statistics = service.key_statistics()?;
    Ok(Json(statistics))
}

/// Paginated daily records
pub async fn list_daily_records(
    State(state): State<AppState>,
    Query(query): Query<DailyListQuery>,
) -> AppResult<Json<PaginatedResponse<DailyWaterRecord>>> {
    let defaults = Pagination::default();
    let pagination = Pagination {
        page: query.page.unwrap_or(defaults.page),
        per_page: query.per_page.unwrap_or(defaults.per_page),
    };
    let service = HistoryService::new(state.dataset.clone());
    let response = service.daily_records(pagination)?;
    Ok(Json(response))
}
