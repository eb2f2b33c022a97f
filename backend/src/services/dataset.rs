//! Dataset ingestion for the precomputed irrigation tables
//!
//! All hydrological computation happens upstream; this module only loads
//! the published CSV tables, validates them row by row, and keeps them in
//! memory for the lifetime of the process.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use shared::{
    validate_daily_record, validate_weekly_record, DailyIrrigationForecast, DailyWaterRecord,
    ForecastModelInfo, WeeklyIrrigationRecord,
};

use crate::config::DataConfig;

/// Immutable, validated snapshot of the precomputed irrigation tables
#[derive(Debug)]
pub struct Dataset {
    daily: Vec<DailyWaterRecord>,
    weekly: Vec<WeeklyIrrigationRecord>,
    forecast: Vec<DailyIrrigationForecast>,
    model_info: Option<ForecastModelInfo>,
}

impl Dataset {
    /// Load all tables from the configured paths.
    ///
    /// The three CSV tables are required; a missing or invalid file aborts
    /// startup. The model metadata file is optional.
    pub fn load(config: &DataConfig) -> anyhow::Result<Self> {
        let daily = read_daily_csv(open(&config.daily_path)?)
            .with_context(|| format!("reading daily table {}", config.daily_path))?;
        let weekly = read_weekly_csv(open(&config.weekly_path)?)
            .with_context(|| format!("reading weekly schedule {}", config.weekly_path))?;
        let forecast = read_forecast_csv(open(&config.forecast_path)?)
            .with_context(|| format!("reading forecast table {}", config.forecast_path))?;
        let model_info = read_model_info(&config.model_info_path)
            .with_context(|| format!("reading model metadata {}", config.model_info_path))?;

        Self::from_records(daily, weekly, forecast, model_info)
    }

    /// Build a dataset from already-parsed records, validating and sorting
    pub fn from_records(
        mut daily: Vec<DailyWaterRecord>,
        mut weekly: Vec<WeeklyIrrigationRecord>,
        mut forecast: Vec<DailyIrrigationForecast>,
        model_info: Option<ForecastModelInfo>,
    ) -> anyhow::Result<Self> {
        if daily.is_empty() {
            bail!("daily water balance table is empty");
        }
        if weekly.is_empty() {
            bail!("weekly irrigation schedule is empty");
        }
        for (i, record) in daily.iter().enumerate() {
            if let Err(reason) = validate_daily_record(record) {
                bail!("daily record {} ({}): {}", i, record.date, reason);
            }
        }
        for (i, record) in weekly.iter().enumerate() {
            if let Err(reason) = validate_weekly_record(record) {
                bail!("weekly record {} ({}): {}", i, record.week_ending, reason);
            }
        }
        for (i, record) in forecast.iter().enumerate() {
            if !record.irrigation_mm.is_finite() || record.irrigation_mm < 0.0 {
                bail!(
                    "forecast record {} ({}): invalid irrigation value {}",
                    i,
                    record.date,
                    record.irrigation_mm
                );
            }
        }

        daily.sort_by_key(|r| r.date);
        weekly.sort_by_key(|r| r.week_ending);
        forecast.sort_by_key(|r| r.date);

        Ok(Self {
            daily,
            weekly,
            forecast,
            model_info,
        })
    }

    pub fn daily(&self) -> &[DailyWaterRecord] {
        &self.daily
    }

    pub fn weekly(&self) -> &[WeeklyIrrigationRecord] {
        &self.weekly
    }

    pub fn forecast(&self) -> &[DailyIrrigationForecast] {
        &self.forecast
    }

    pub fn model_info(&self) -> Option<&ForecastModelInfo> {
        self.model_info.as_ref()
    }

    /// Most recent week of the schedule
    pub fn latest_week(&self) -> Option<&WeeklyIrrigationRecord> {
        self.weekly.last()
    }

    /// Week before the most recent one
    pub fn previous_week(&self) -> Option<&WeeklyIrrigationRecord> {
        self.weekly.len().checked_sub(2).map(|i| &self.weekly[i])
    }

    /// Trailing window of weekly records
    pub fn last_weeks(&self, n: usize) -> &[WeeklyIrrigationRecord] {
        let start = self.weekly.len().saturating_sub(n);
        &self.weekly[start..]
    }

    /// Trailing window of daily records
    pub fn last_days(&self, n: usize) -> &[DailyWaterRecord] {
        let start = self.daily.len().saturating_sub(n);
        &self.daily[start..]
    }
}

fn open(path: &str) -> anyhow::Result<File> {
    File::open(path).with_context(|| format!("data file not found: {}", path))
}

/// Parse the daily water balance CSV
pub fn read_daily_csv<R: Read>(reader: R) -> anyhow::Result<Vec<DailyWaterRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (i, row) in csv_reader.deserialize().enumerate() {
        let record: DailyWaterRecord = row.with_context(|| format!("row {}", i + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Parse the weekly irrigation schedule CSV
pub fn read_weekly_csv<R: Read>(reader: R) -> anyhow::Result<Vec<WeeklyIrrigationRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (i, row) in csv_reader.deserialize().enumerate() {
        let record: WeeklyIrrigationRecord = row.with_context(|| format!("row {}", i + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Parse the 7-day forecast CSV
pub fn read_forecast_csv<R: Read>(reader: R) -> anyhow::Result<Vec<DailyIrrigationForecast>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (i, row) in csv_reader.deserialize().enumerate() {
        let record: DailyIrrigationForecast = row.with_context(|| format!("row {}", i + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Read optional forecast model metadata. A missing file yields `None`.
pub fn read_model_info(path: &str) -> anyhow::Result<Option<ForecastModelInfo>> {
    if !Path::new(path).exists() {
        return Ok(None);
    }
    let file = File::open(path).with_context(|| format!("opening {}", path))?;
    let info: ForecastModelInfo = serde_json::from_reader(file)?;
    Ok(Some(info))
}
