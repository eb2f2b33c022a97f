//! Validation utilities for the Gatsibo Smart Irrigation Platform
//!
//! Applied when ingesting the precomputed water balance tables, before any
//! value reaches the advisory classifier.

use crate::models::{DailyWaterRecord, WeeklyIrrigationRecord};

// ============================================================================
// Water Quantity Validations
// ============================================================================

/// Validate a water depth in millimeters (finite and non-negative)
pub fn validate_water_depth_mm(depth_mm: f64) -> Result<(), &'static str> {
    if !depth_mm.is_finite() {
        return Err("Water depth must be a finite number");
    }
    if depth_mm < 0.0 {
        return Err("Water depth cannot be negative");
    }
    Ok(())
}

/// Validate that effective rainfall does not exceed total rainfall
pub fn validate_effective_rainfall(
    rainfall_mm: f64,
    effective_mm: f64,
) -> Result<(), &'static str> {
    validate_water_depth_mm(rainfall_mm)?;
    validate_water_depth_mm(effective_mm)?;
    // Small tolerance for values rounded upstream
    if effective_mm > rainfall_mm + 0.01 {
        return Err("Effective rainfall cannot exceed total rainfall");
    }
    Ok(())
}

/// Validate a crop coefficient (NDVI-derived Kc values stay well below 2)
pub fn validate_kc(kc: f64) -> Result<(), &'static str> {
    if !kc.is_finite() {
        return Err("Crop coefficient must be a finite number");
    }
    if !(0.0..=2.0).contains(&kc) {
        return Err("Crop coefficient out of plausible range");
    }
    Ok(())
}

/// Check that an irrigation requirement is consistent with its water balance
pub fn is_water_balance_consistent(
    etc_mm: f64,
    rainfall_effective_mm: f64,
    irrigation_mm: f64,
    tolerance_mm: f64,
) -> bool {
    let expected = (etc_mm - rainfall_effective_mm).max(0.0);
    (irrigation_mm - expected).abs() <= tolerance_mm
}

// ============================================================================
// Record Validations
// ============================================================================

/// Validate one row of the daily water balance table
pub fn validate_daily_record(record: &DailyWaterRecord) -> Result<(), &'static str> {
    validate_water_depth_mm(record.et0_mm_day)?;
    validate_kc(record.kc)?;
    validate_water_depth_mm(record.etc_mm_day)?;
    validate_effective_rainfall(record.rainfall_mm, record.rainfall_effective_mm)?;
    validate_water_depth_mm(record.irrigation_requirement_mm)?;
    Ok(())
}

/// Validate one row of the weekly irrigation schedule
pub fn validate_weekly_record(record: &WeeklyIrrigationRecord) -> Result<(), &'static str> {
    validate_water_depth_mm(record.etc_week_mm)?;
    validate_effective_rainfall(record.rainfall_week_mm, record.rainfall_effective_mm)?;
    validate_water_depth_mm(record.irrigation_needed_mm)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn daily(etc: f64, rain: f64, effective: f64, irrigation: f64) -> DailyWaterRecord {
        DailyWaterRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            et0_mm_day: 4.2,
            kc: 0.85,
            etc_mm_day: etc,
            rainfall_mm: rain,
            rainfall_effective_mm: effective,
            irrigation_requirement_mm: irrigation,
        }
    }

    // ========================================================================
    // Water Quantity Validation Tests
    // ========================================================================

    #[test]
    fn test_water_depth_valid() {
        assert!(validate_water_depth_mm(0.0).is_ok());
        assert!(validate_water_depth_mm(42.5).is_ok());
    }

    #[test]
    fn test_water_depth_invalid() {
        assert!(validate_water_depth_mm(-0.1).is_err());
        assert!(validate_water_depth_mm(f64::NAN).is_err());
        assert!(validate_water_depth_mm(f64::INFINITY).is_err());
    }

    #[test]
    fn test_effective_rainfall_bounded_by_total() {
        assert!(validate_effective_rainfall(10.0, 8.0).is_ok());
        assert!(validate_effective_rainfall(10.0, 10.0).is_ok());
        assert!(validate_effective_rainfall(10.0, 11.0).is_err());
    }

    #[test]
    fn test_kc_range() {
        assert!(validate_kc(0.3).is_ok());
        assert!(validate_kc(1.15).is_ok());
        assert!(validate_kc(-0.1).is_err());
        assert!(validate_kc(2.5).is_err());
        assert!(validate_kc(f64::NAN).is_err());
    }

    #[test]
    fn test_water_balance_consistency() {
        assert!(is_water_balance_consistent(5.0, 3.0, 2.0, 0.05));
        // Surplus weeks report zero irrigation
        assert!(is_water_balance_consistent(2.0, 6.0, 0.0, 0.05));
        assert!(!is_water_balance_consistent(5.0, 3.0, 4.0, 0.05));
    }

    // ========================================================================
    // Record Validation Tests
    // ========================================================================

    #[test]
    fn test_daily_record_valid() {
        assert!(validate_daily_record(&daily(3.5, 2.0, 1.6, 1.9)).is_ok());
    }

    #[test]
    fn test_daily_record_invalid_effective_rainfall() {
        assert!(validate_daily_record(&daily(3.5, 2.0, 2.5, 1.9)).is_err());
    }

    #[test]
    fn test_weekly_record_valid() {
        let record = WeeklyIrrigationRecord {
            week_ending: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
            etc_week_mm: 24.5,
            rainfall_week_mm: 12.0,
            rainfall_effective_mm: 9.6,
            irrigation_needed_mm: 14.9,
        };
        assert!(validate_weekly_record(&record).is_ok());
    }

    #[test]
    fn test_weekly_record_negative_need() {
        let record = WeeklyIrrigationRecord {
            week_ending: NaiveDate::from_ymd_opt(2024, 3, 17).unwrap(),
            etc_week_mm: 24.5,
            rainfall_week_mm: 12.0,
            rainfall_effective_mm: 9.6,
            irrigation_needed_mm: -1.0,
        };
        assert!(validate_weekly_record(&record).is_err());
    }
}
