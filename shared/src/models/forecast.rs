//! Irrigation forecast models
//!
//! The forecast itself is produced upstream by a trained regression model;
//! here it is consumed as flat tabular output plus descriptive metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the published irrigation forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyIrrigationForecast {
    pub date: NaiveDate,
    pub irrigation_mm: f64,
}

/// Metadata describing the upstream forecast model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastModelInfo {
    /// e.g. "Random Forest"
    pub algorithm: String,
    pub r_squared: f64,
    pub mae_mm_day: f64,
    pub training_days: u32,
    pub testing_days: u32,
    pub top_feature: String,
    /// Share of total feature importance, 0-1
    pub top_feature_importance: f64,
    pub horizon_days: u8,
}

/// Fixed what-if weather scenarios
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Drought,
    Normal,
    Wet,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 3] = [
        ScenarioKind::Drought,
        ScenarioKind::Normal,
        ScenarioKind::Wet,
    ];

    /// Projected daily irrigation need under the scenario, mm/day
    pub fn daily_irrigation_mm(&self) -> f64 {
        match self {
            ScenarioKind::Drought => 1.32,
            ScenarioKind::Normal => 0.67,
            ScenarioKind::Wet => 0.66,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScenarioKind::Drought => "If no rainfall for a week",
            ScenarioKind::Normal => "Typical weather conditions",
            ScenarioKind::Wet => "Heavy rainfall expected",
        }
    }
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioKind::Drought => write!(f, "Drought"),
            ScenarioKind::Normal => write!(f, "Normal"),
            ScenarioKind::Wet => write!(f, "Wet"),
        }
    }
}

/// Scenario with its projection, ready for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioProjection {
    pub scenario: ScenarioKind,
    pub daily_irrigation_mm: f64,
    pub description: String,
}

impl From<ScenarioKind> for ScenarioProjection {
    fn from(scenario: ScenarioKind) -> Self {
        Self {
            scenario,
            daily_irrigation_mm: scenario.daily_irrigation_mm(),
            description: scenario.description().to_string(),
        }
    }
}

/// All scenario projections in display order
pub fn scenario_projections() -> Vec<ScenarioProjection> {
    ScenarioKind::ALL.iter().copied().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drought_needs_most_water() {
        let projections = scenario_projections();
        assert_eq!(projections.len(), 3);
        assert!(
            projections[0].daily_irrigation_mm > projections[1].daily_irrigation_mm
                && projections[1].daily_irrigation_mm > projections[2].daily_irrigation_mm
        );
    }
}
