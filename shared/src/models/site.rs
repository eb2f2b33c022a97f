//! Informational content about the study site and the tool itself
//!
//! Static facts the presentation layer shows on its About pages, kept as
//! structured data so the frontend carries no copy of its own.

use serde::{Deserialize, Serialize};

use crate::types::GpsCoordinates;

/// Profile of the irrigation scheme's location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteProfile {
    pub district: String,
    pub province: String,
    pub country: String,
    pub coordinates: GpsCoordinates,
    pub elevation_meters: i32,
    pub scheme: String,
    pub main_crops: Vec<String>,
    pub irrigation_systems: Vec<String>,
    pub climate: String,
    pub annual_rainfall_min_mm: i32,
    pub annual_rainfall_max_mm: i32,
    pub watershed: String,
    pub challenges: Vec<String>,
}

impl SiteProfile {
    /// The Gatsibo District site the published tables describe
    pub fn gatsibo() -> Self {
        Self {
            district: "Gatsibo".to_string(),
            province: "Eastern Province".to_string(),
            country: "Rwanda".to_string(),
            coordinates: GpsCoordinates::new(-1.5789, 30.5089),
            elevation_meters: 1450,
            scheme: "Gabiro irrigation scheme".to_string(),
            main_crops: vec![
                "Maize".to_string(),
                "Rice".to_string(),
                "Vegetables".to_string(),
            ],
            irrigation_systems: vec![
                "Drip".to_string(),
                "Sprinkler".to_string(),
                "Furrow".to_string(),
            ],
            climate: "Highland tropical, bimodal rainfall".to_string(),
            annual_rainfall_min_mm: 900,
            annual_rainfall_max_mm: 1400,
            watershed: "Akagera".to_string(),
            challenges: vec![
                "Seasonal water stress".to_string(),
                "Drought".to_string(),
            ],
        }
    }
}

/// Profile of the tool and its upstream data pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolProfile {
    pub name: String,
    pub purpose: String,
    pub data_period: String,
    pub satellite_source: String,
    pub satellite_scenes: u32,
    pub weather_source: String,
    pub weather_observation_days: u32,
    pub methodology: Vec<String>,
    pub acknowledgments: Vec<String>,
}

impl ToolProfile {
    pub fn gatsibo_scheduler() -> Self {
        Self {
            name: "Gatsibo Smart Irrigation Scheduler".to_string(),
            purpose: "Data-driven irrigation recommendations for farmers in Gatsibo District, Rwanda"
                .to_string(),
            data_period: "2019-2024".to_string(),
            satellite_source: "Sentinel-2 imagery (10m resolution)".to_string(),
            satellite_scenes: 83,
            weather_source: "NASA POWER daily meteorological data".to_string(),
            weather_observation_days: 2134,
            methodology: vec![
                "Reference ET0 from the FAO-56 Penman-Monteith equation".to_string(),
                "Crop coefficient (Kc) derived from NDVI satellite measurements".to_string(),
                "Crop evapotranspiration: ETc = ET0 x Kc".to_string(),
                "Effective rainfall taken as 80% of total rainfall".to_string(),
                "Irrigation need: ETc minus effective rainfall".to_string(),
                "Regression model forecasts irrigation 7 days ahead".to_string(),
            ],
            acknowledgments: vec![
                "Google Earth Engine".to_string(),
                "NASA POWER".to_string(),
                "FAO Irrigation and Drainage Paper No. 56".to_string(),
            ],
        }
    }
}
