//! 7-day irrigation forecast service
//!
//! The forecast rows are produced upstream by the trained model; this
//! service only aggregates them for display and attaches the published
//! model metadata when it is available.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use shared::{scenario_projections, ForecastModelInfo, ScenarioProjection};

use crate::error::{AppError, AppResult};
use crate::services::dataset::Dataset;

/// Forecast service over the loaded dataset
#[derive(Clone)]
pub struct ForecastService {
    dataset: Arc<Dataset>,
}

/// One forecast day prepared for display
#[derive(Debug, Serialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub day: String,
    pub irrigation_mm: f64,
}

/// Aggregated 7-day outlook
#[derive(Debug, Serialize)]
pub struct ForecastOutlook {
    pub total_mm: f64,
    pub daily_average_mm: f64,
    pub peak_mm: f64,
    pub peak_date: NaiveDate,
    pub days: Vec<ForecastDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ForecastModelInfo>,
}

impl ForecastService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Aggregate the published forecast into the outlook panel figures
    pub fn outlook(&self) -> AppResult<ForecastOutlook> {
        let forecast = self.dataset.forecast();
        if forecast.is_empty() {
            return Err(AppError::NotFound("Irrigation forecast".to_string()));
        }

        let total_mm: f64 = forecast.iter().map(|d| d.irrigation_mm).sum();
        let mut peak = &forecast[0];
        for day in forecast {
            if day.irrigation_mm > peak.irrigation_mm {
                peak = day;
            }
        }

        let days = forecast
            .iter()
            .map(|d| ForecastDay {
                date: d.date,
                day: d.date.format("%a").to_string(),
                irrigation_mm: d.irrigation_mm,
            })
            .collect();

        Ok(ForecastOutlook {
            total_mm,
            daily_average_mm: total_mm / forecast.len() as f64,
            peak_mm: peak.irrigation_mm,
            peak_date: peak.date,
            days,
            model: self.dataset.model_info().cloned(),
        })
    }

    /// Fixed what-if scenario projections
    pub fn scenarios(&self) -> Vec<ScenarioProjection> {
        scenario_projections()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{DailyIrrigationForecast, DailyWaterRecord, ScenarioKind, WeeklyIrrigationRecord};

    fn forecast_day(date: &str, mm: f64) -> DailyIrrigationForecast {
        DailyIrrigationForecast {
            date: date.parse().unwrap(),
            irrigation_mm: mm,
        }
    }

    fn service(
        forecast: Vec<DailyIrrigationForecast>,
        model: Option<ForecastModelInfo>,
    ) -> ForecastService {
        let daily = vec![DailyWaterRecord {
            date: "2024-03-15".parse().unwrap(),
            et0_mm_day: 4.0,
            kc: 0.9,
            etc_mm_day: 3.6,
            rainfall_mm: 2.0,
            rainfall_effective_mm: 1.6,
            irrigation_requirement_mm: 2.0,
        }];
        let weekly = vec![WeeklyIrrigationRecord {
            week_ending: "2024-03-17".parse().unwrap(),
            etc_week_mm: 24.5,
            rainfall_week_mm: 12.0,
            rainfall_effective_mm: 9.6,
            irrigation_needed_mm: 14.9,
        }];
        let dataset = Dataset::from_records(daily, weekly, forecast, model).unwrap();
        ForecastService::new(Arc::new(dataset))
    }

    #[test]
    fn outlook_aggregates_published_days() {
        let service = service(
            vec![
                forecast_day("2024-03-25", 2.0),
                forecast_day("2024-03-26", 4.0),
                forecast_day("2024-03-27", 3.0),
            ],
            None,
        );
        let outlook = service.outlook().unwrap();

        assert!((outlook.total_mm - 9.0).abs() < 1e-9);
        assert!((outlook.daily_average_mm - 3.0).abs() < 1e-9);
        assert!((outlook.peak_mm - 4.0).abs() < 1e-9);
        assert_eq!(outlook.peak_date, "2024-03-26".parse().unwrap());
        assert_eq!(outlook.days.len(), 3);
        // 2024-03-25 is a Monday
        assert_eq!(outlook.days[0].day, "Mon");
        assert!(outlook.model.is_none());
    }

    #[test]
    fn outlook_requires_forecast_rows() {
        let service = service(Vec::new(), None);
        assert!(service.outlook().is_err());
    }

    #[test]
    fn outlook_carries_model_metadata_when_present() {
        let model = ForecastModelInfo {
            algorithm: "Random Forest".to_string(),
            r_squared: 0.77,
            mae_mm_day: 0.54,
            training_days: 1940,
            testing_days: 187,
            top_feature: "ET0".to_string(),
            top_feature_importance: 0.428,
            horizon_days: 7,
        };
        let service = service(vec![forecast_day("2024-03-25", 2.0)], Some(model));
        let outlook = service.outlook().unwrap();

        let model = outlook.model.unwrap();
        assert_eq!(model.algorithm, "Random Forest");
        assert!((model.r_squared - 0.77).abs() < 1e-9);
    }

    #[test]
    fn scenarios_are_fixed_projections() {
        let service = service(vec![forecast_day("2024-03-25", 2.0)], None);
        let scenarios = service.scenarios();

        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0].scenario, ScenarioKind::Drought);
        assert!((scenarios[0].daily_irrigation_mm - 1.32).abs() < 1e-9);
    }
}
