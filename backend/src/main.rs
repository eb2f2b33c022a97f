//! Gatsibo Smart Irrigation Platform - Backend Server
//!
//! Serves precomputed irrigation schedules, forecasts, and advisory
//! classifications for the Gatsibo District dashboard.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use services::dataset::Dataset;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gip_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Gatsibo Smart Irrigation Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the precomputed irrigation tables
    tracing::info!("Loading irrigation dataset...");
    let dataset = Dataset::load(&config.data)?;
    tracing::info!(
        "Dataset loaded: {} daily records, {} weekly records, {} forecast days",
        dataset.daily().len(),
        dataset.weekly().len(),
        dataset.forecast().len(),
    );
    if dataset.model_info().is_none() {
        tracing::warn!("Forecast model metadata not found. Some features will be limited.");
    }

    // Create application state
    let state = AppState {
        dataset: Arc::new(dataset),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Gatsibo Smart Irrigation Platform API v1.0"
}
