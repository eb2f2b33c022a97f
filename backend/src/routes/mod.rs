//! Route definitions for the Gatsibo Smart Irrigation Platform

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Advisory classification
        .route("/advisory", get(handlers::get_advisory))
        // Dashboard - current week status
        .nest("/dashboard", dashboard_routes())
        // 7-day forecast
        .nest("/forecast", forecast_routes())
        // Historical analysis
        .nest("/history", history_routes())
        // Informational content
        .nest("/about", about_routes())
}

/// Dashboard routes
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .route("/water-balance", get(handlers::get_water_balance))
        .route("/daily-trend", get(handlers::get_daily_trend))
}

/// Forecast routes
fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_forecast))
        .route("/scenarios", get(handlers::get_scenarios))
}

/// Historical analysis routes
fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/annual", get(handlers::get_annual_balance))
        .route("/monthly", get(handlers::get_monthly_averages))
        .route("/statistics", get(handlers::get_statistics))
        .route("/daily", get(handlers::list_daily_records))
}

/// Informational routes
fn about_routes() -> Router<AppState> {
    Router::new()
        .route("/site", get(handlers::get_site_profile))
        .route("/tool", get(handlers::get_tool_profile))
}
