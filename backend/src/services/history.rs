//! Historical analysis service
//!
//! Aggregates the daily water balance table into the annual, monthly, and
//! headline statistics views of the historical analysis page.

use std::sync::Arc;

use chrono::Datelike;
use serde::Serialize;
use shared::{DailyWaterRecord, PaginatedResponse, Pagination, PaginationMeta};

use crate::error::{AppError, AppResult};
use crate::services::dataset::Dataset;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Historical analysis service over the loaded dataset
#[derive(Clone)]
pub struct HistoryService {
    dataset: Arc<Dataset>,
}

/// Water balance totals for one calendar year
#[derive(Debug, Serialize)]
pub struct AnnualWaterBalance {
    pub year: i32,
    pub etc_total_mm: f64,
    pub rainfall_effective_total_mm: f64,
    pub irrigation_total_mm: f64,
}

/// Average daily values for one calendar month across all years
#[derive(Debug, Serialize)]
pub struct MonthlyAverages {
    pub month: u32,
    pub month_name: String,
    pub irrigation_avg_mm: f64,
    pub rainfall_avg_mm: f64,
    pub etc_avg_mm: f64,
}

/// Headline statistics over the observation period
#[derive(Debug, Serialize)]
pub struct HistoryStatistics {
    pub days_analyzed: usize,
    pub years_covered: usize,
    pub avg_annual_irrigation_mm: f64,
    /// Share of crop water demand met by effective rainfall, percent
    pub rainfall_contribution_percent: f64,
    /// Share of days with a positive irrigation requirement, percent
    pub days_needing_irrigation_percent: f64,
    pub max_daily_irrigation_mm: f64,
    pub avg_daily_irrigation_mm: f64,
}

impl HistoryService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Per-year totals of crop demand, effective rainfall, and irrigation
    pub fn annual_water_balance(&self) -> Vec<AnnualWaterBalance> {
        let mut totals: Vec<AnnualWaterBalance> = Vec::new();
        for record in self.dataset.daily() {
            let year = record.date.year();
            match totals.last_mut() {
                Some(entry) if entry.year == year => {
                    entry.etc_total_mm += record.etc_mm_day;
                    entry.rainfall_effective_total_mm += record.rainfall_effective_mm;
                    entry.irrigation_total_mm += record.irrigation_requirement_mm;
                }
                _ => totals.push(AnnualWaterBalance {
                    year,
                    etc_total_mm: record.etc_mm_day,
                    rainfall_effective_total_mm: record.rainfall_effective_mm,
                    irrigation_total_mm: record.irrigation_requirement_mm,
                }),
            }
        }
        totals
    }

    /// Average daily values grouped by calendar month
    pub fn monthly_averages(&self) -> Vec<MonthlyAverages> {
        let mut sums = [[0.0f64; 3]; 12];
        let mut counts = [0usize; 12];
        for record in self.dataset.daily() {
            let idx = record.date.month0() as usize;
            sums[idx][0] += record.irrigation_requirement_mm;
            sums[idx][1] += record.rainfall_mm;
            sums[idx][2] += record.etc_mm_day;
            counts[idx] += 1;
        }

        (0..12)
            .filter(|&m| counts[m] > 0)
            .map(|m| {
                let n = counts[m] as f64;
                MonthlyAverages {
                    month: m as u32 + 1,
                    month_name: MONTH_NAMES[m].to_string(),
                    irrigation_avg_mm: sums[m][0] / n,
                    rainfall_avg_mm: sums[m][1] / n,
                    etc_avg_mm: sums[m][2] / n,
                }
            })
            .collect()
    }

    /// Headline figures for the statistics panel
    pub fn key_statistics(&self) -> AppResult<HistoryStatistics> {
        let daily = self.dataset.daily();
        if daily.is_empty() {
            return Err(AppError::NotFound("Daily water balance data".to_string()));
        }

        let days = daily.len();
        let mut years: Vec<i32> = daily.iter().map(|r| r.date.year()).collect();
        years.dedup();
        let years_covered = years.len();

        let irrigation_total: f64 = daily.iter().map(|r| r.irrigation_requirement_mm).sum();
        let etc_total: f64 = daily.iter().map(|r| r.etc_mm_day).sum();
        let effective_total: f64 = daily.iter().map(|r| r.rainfall_effective_mm).sum();
        let days_needing = daily
            .iter()
            .filter(|r| r.irrigation_requirement_mm > 0.0)
            .count();
        let max_daily = daily
            .iter()
            .map(|r| r.irrigation_requirement_mm)
            .fold(0.0f64, f64::max);

        let rainfall_contribution = if etc_total > 0.0 {
            effective_total / etc_total * 100.0
        } else {
            0.0
        };

        Ok(HistoryStatistics {
            days_analyzed: days,
            years_covered,
            avg_annual_irrigation_mm: irrigation_total / years_covered as f64,
            rainfall_contribution_percent: rainfall_contribution,
            days_needing_irrigation_percent: days_needing as f64 / days as f64 * 100.0,
            max_daily_irrigation_mm: max_daily,
            avg_daily_irrigation_mm: irrigation_total / days as f64,
        })
    }

    /// Paginated daily records, oldest first
    pub fn daily_records(
        &self,
        pagination: Pagination,
    ) -> AppResult<PaginatedResponse<DailyWaterRecord>> {
        if pagination.page == 0 || pagination.per_page == 0 {
            return Err(AppError::Validation {
                field: "page".to_string(),
                message: "page and per_page must be positive".to_string(),
            });
        }

        let daily = self.dataset.daily();
        let total_items = daily.len() as u64;
        let per_page = pagination.per_page;
        let total_pages = total_items.div_ceil(per_page as u64) as u32;

        let start = (pagination.page as usize - 1).saturating_mul(per_page as usize);
        let data = daily
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok(PaginatedResponse {
            data,
            pagination: PaginationMeta {
                page: pagination.page,
                per_page,
                total_items,
                total_pages,
            },
        })
    }
}
