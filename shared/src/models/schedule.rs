//! Water balance and irrigation schedule models
//!
//! Rows of the precomputed tables produced by the upstream ET pipeline.
//! Field names mirror the column headers of the published CSV files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the precomputed water balance table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyWaterRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Reference evapotranspiration (FAO-56 Penman-Monteith), mm/day
    #[serde(rename = "ET0_mm_day")]
    pub et0_mm_day: f64,
    /// NDVI-derived crop coefficient
    #[serde(rename = "Kc")]
    pub kc: f64,
    /// Crop evapotranspiration, mm/day
    #[serde(rename = "ETc_mm_day")]
    pub etc_mm_day: f64,
    #[serde(rename = "Rainfall_mm")]
    pub rainfall_mm: f64,
    /// Usable fraction of rainfall, mm/day
    #[serde(rename = "Rainfall_effective_mm")]
    pub rainfall_effective_mm: f64,
    /// ETc minus effective rainfall, floored at zero
    #[serde(rename = "Irrigation_requirement_mm")]
    pub irrigation_requirement_mm: f64,
}

/// One week of the precomputed irrigation schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyIrrigationRecord {
    #[serde(rename = "Week_ending")]
    pub week_ending: NaiveDate,
    /// Crop water need for the week, mm
    #[serde(rename = "ETc_week_mm")]
    pub etc_week_mm: f64,
    /// Total rainfall received in the week, mm
    #[serde(rename = "Rainfall_week_mm")]
    pub rainfall_week_mm: f64,
    /// Effective rainfall for the week, mm
    #[serde(rename = "Rainfall_effective_mm")]
    pub rainfall_effective_mm: f64,
    /// Irrigation water required after effective rainfall, mm
    #[serde(rename = "Irrigation_needed_mm")]
    pub irrigation_needed_mm: f64,
}

/// Fraction of rainfall assumed usable by the crop
pub const EFFECTIVE_RAINFALL_FRACTION: f64 = 0.8;

/// Effective rainfall from total rainfall
pub fn effective_rainfall_mm(rainfall_mm: f64) -> f64 {
    rainfall_mm * EFFECTIVE_RAINFALL_FRACTION
}

/// Irrigation requirement: crop demand minus effective rainfall, never negative
pub fn irrigation_requirement_mm(etc_mm: f64, rainfall_effective_mm: f64) -> f64 {
    (etc_mm - rainfall_effective_mm).max(0.0)
}
