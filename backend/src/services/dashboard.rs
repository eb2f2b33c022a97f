//! Current-week dashboard service
//!
//! Assembles the figures the dashboard's summary panel displays: the latest
//! weekly status, its advisory classification, and the trailing water
//! balance windows.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use shared::{classify_advisory, AdvisoryTier, DailyWaterRecord, WeeklyIrrigationRecord};

use crate::error::{AppError, AppResult};
use crate::services::dataset::Dataset;

/// Default window for the weekly water balance view
pub const DEFAULT_BALANCE_WEEKS: usize = 12;

/// Default window for the daily trend view
pub const DEFAULT_TREND_DAYS: usize = 30;

/// Dashboard service over the loaded dataset
#[derive(Clone)]
pub struct DashboardService {
    dataset: Arc<Dataset>,
}

/// Current week status with its advisory
#[derive(Debug, Serialize)]
pub struct CurrentWeekStatus {
    pub week_ending: NaiveDate,
    pub irrigation_needed_mm: f64,
    /// Change versus the previous week; absent when only one week exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irrigation_delta_mm: Option<f64>,
    pub rainfall_week_mm: f64,
    pub etc_week_mm: f64,
    pub advisory: AdvisoryPanel,
}

/// Advisory block rendered at the top of the dashboard
#[derive(Debug, Serialize)]
pub struct AdvisoryPanel {
    pub tier: AdvisoryTier,
    pub headline: String,
    pub severity_color: String,
    pub advice: String,
    /// Amount to apply this week, mm
    pub apply_mm: f64,
    pub application_note: String,
}

impl DashboardService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Status of the most recent week in the schedule
    pub fn current_week_status(&self) -> AppResult<CurrentWeekStatus> {
        let latest = self
            .dataset
            .latest_week()
            .ok_or_else(|| AppError::NotFound("Weekly irrigation schedule".to_string()))?;

        let advisory = classify_advisory(latest.irrigation_needed_mm)?;
        let delta = self
            .dataset
            .previous_week()
            .map(|prev| latest.irrigation_needed_mm - prev.irrigation_needed_mm);

        Ok(CurrentWeekStatus {
            week_ending: latest.week_ending,
            irrigation_needed_mm: latest.irrigation_needed_mm,
            irrigation_delta_mm: delta,
            rainfall_week_mm: latest.rainfall_week_mm,
            etc_week_mm: latest.etc_week_mm,
            advisory: AdvisoryPanel {
                tier: advisory.tier,
                headline: advisory.headline,
                severity_color: advisory.severity_color,
                advice: advisory.advice,
                apply_mm: latest.irrigation_needed_mm,
                application_note: "Split into 2-3 applications across the week".to_string(),
            },
        })
    }

    /// Trailing weekly water balance rows, oldest first
    pub fn water_balance(&self, weeks: usize) -> Vec<WeeklyIrrigationRecord> {
        self.dataset.last_weeks(weeks).to_vec()
    }

    /// Trailing daily water balance rows, oldest first
    pub fn daily_trend(&self, days: usize) -> Vec<DailyWaterRecord> {
        self.dataset.last_days(days).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, irrigation: f64) -> DailyWaterRecord {
        DailyWaterRecord {
            date: date.parse().unwrap(),
            et0_mm_day: 4.0,
            kc: 0.9,
            etc_mm_day: 3.6,
            rainfall_mm: 2.0,
            rainfall_effective_mm: 1.6,
            irrigation_requirement_mm: irrigation,
        }
    }

    fn week(ending: &str, need: f64) -> WeeklyIrrigationRecord {
        WeeklyIrrigationRecord {
            week_ending: ending.parse().unwrap(),
            etc_week_mm: need + 9.6,
            rainfall_week_mm: 12.0,
            rainfall_effective_mm: 9.6,
            irrigation_needed_mm: need,
        }
    }

    fn service(weeks: Vec<WeeklyIrrigationRecord>) -> DashboardService {
        let dataset = Dataset::from_records(
            vec![day("2024-03-15", 1.9), day("2024-03-16", 3.8)],
            weeks,
            Vec::new(),
            None,
        )
        .unwrap();
        DashboardService::new(Arc::new(dataset))
    }

    #[test]
    fn current_week_reports_latest_row_with_delta() {
        let service = service(vec![week("2024-03-17", 14.9), week("2024-03-24", 24.1)]);
        let status = service.current_week_status().unwrap();

        assert_eq!(status.week_ending, "2024-03-24".parse().unwrap());
        assert!((status.irrigation_needed_mm - 24.1).abs() < 1e-9);
        let delta = status.irrigation_delta_mm.unwrap();
        assert!((delta - 9.2).abs() < 1e-9);
        assert_eq!(status.advisory.tier, AdvisoryTier::Moderate);
        assert_eq!(status.advisory.severity_color, "#FF9800");
        assert!((status.advisory.apply_mm - 24.1).abs() < 1e-9);
    }

    #[test]
    fn single_week_has_no_delta() {
        let service = service(vec![week("2024-03-17", 3.2)]);
        let status = service.current_week_status().unwrap();

        assert!(status.irrigation_delta_mm.is_none());
        assert_eq!(status.advisory.tier, AdvisoryTier::Minimal);
        assert_eq!(
            status.advisory.advice,
            "Recent rainfall is sufficient. Monitor crop condition."
        );
    }

    #[test]
    fn water_balance_window_clamps() {
        let service = service(vec![week("2024-03-17", 14.9), week("2024-03-24", 24.1)]);
        assert_eq!(service.water_balance(12).len(), 2);
        assert_eq!(service.water_balance(1).len(), 1);
    }

    #[test]
    fn daily_trend_is_oldest_first() {
        let service = service(vec![week("2024-03-17", 14.9)]);
        let trend = service.daily_trend(30);
        assert_eq!(trend.len(), 2);
        assert!(trend[0].date < trend[1].date);
    }
}
