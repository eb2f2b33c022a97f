//! Configuration management for the Gatsibo Smart Irrigation Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with GIP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Precomputed data table locations
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Daily water balance table (CSV)
    pub daily_path: String,

    /// Weekly irrigation schedule (CSV)
    pub weekly_path: String,

    /// 7-day irrigation forecast (CSV)
    pub forecast_path: String,

    /// Forecast model metadata (JSON). The file is optional at runtime.
    pub model_info_path: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("GIP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("data.daily_path", "data/gatsibo_complete_irrigation_data.csv")?
            .set_default(
                "data.weekly_path",
                "data/gatsibo_irrigation_schedule_weekly.csv",
            )?
            .set_default("data.forecast_path", "data/irrigation_forecast_7days.csv")?
            .set_default("data.model_info_path", "data/forecast_model_info.json")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (GIP_ prefix)
            .add_source(
                Environment::with_prefix("GIP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
