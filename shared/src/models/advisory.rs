//! Weekly irrigation advisory models

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Advisory severity tiers for a weekly irrigation requirement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryTier {
    /// 0-5 mm/week: rainfall covers crop demand
    Minimal,
    /// 5-20 mm/week
    Light,
    /// 20-40 mm/week
    Moderate,
    /// 40 mm/week and above
    Heavy,
}

impl AdvisoryTier {
    /// Numeric severity for trend comparisons (higher is more severe)
    pub fn severity_rank(&self) -> i32 {
        match self {
            AdvisoryTier::Minimal => 1,
            AdvisoryTier::Light => 2,
            AdvisoryTier::Moderate => 3,
            AdvisoryTier::Heavy => 4,
        }
    }

    /// Display color associated with the tier
    pub fn color(&self) -> &'static str {
        match self {
            AdvisoryTier::Minimal => "#4CAF50",
            AdvisoryTier::Light => "#FFC107",
            AdvisoryTier::Moderate => "#FF9800",
            AdvisoryTier::Heavy => "#F44336",
        }
    }

    /// Short recommendation headline for the tier
    pub fn headline(&self) -> &'static str {
        match self {
            AdvisoryTier::Minimal => "MINIMAL irrigation needed",
            AdvisoryTier::Light => "LIGHT irrigation recommended",
            AdvisoryTier::Moderate => "MODERATE irrigation required",
            AdvisoryTier::Heavy => "HEAVY irrigation required",
        }
    }

    /// Guidance text for the tier
    pub fn advice(&self) -> &'static str {
        match self {
            AdvisoryTier::Minimal => "Recent rainfall is sufficient. Monitor crop condition.",
            AdvisoryTier::Light => "Supplement rainfall with light irrigation.",
            AdvisoryTier::Moderate => "Regular irrigation needed to maintain crop health.",
            AdvisoryTier::Heavy => "Crop water stress likely. Irrigate immediately!",
        }
    }
}

impl std::fmt::Display for AdvisoryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvisoryTier::Minimal => write!(f, "Minimal"),
            AdvisoryTier::Light => write!(f, "Light"),
            AdvisoryTier::Moderate => write!(f, "Moderate"),
            AdvisoryTier::Heavy => write!(f, "Heavy"),
        }
    }
}

/// Error raised for irrigation requirements the classifier cannot accept
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdvisoryError {
    /// The supplied value was negative, NaN, or infinite
    #[error("invalid irrigation requirement: {value} mm")]
    InvalidInput { value: f64 },
}

/// Advisory produced for one weekly irrigation requirement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IrrigationAdvisory {
    pub tier: AdvisoryTier,
    pub headline: String,
    pub severity_color: String,
    pub advice: String,
}

impl IrrigationAdvisory {
    pub fn from_tier(tier: AdvisoryTier) -> Self {
        Self {
            tier,
            headline: tier.headline().to_string(),
            severity_color: tier.color().to_string(),
            advice: tier.advice().to_string(),
        }
    }
}

/// Map a weekly irrigation requirement (mm) to its advisory tier.
///
/// Intervals are half-open and left-inclusive: exactly 5.0 mm classifies
/// as Light, 20.0 mm as Moderate, and 40.0 mm as Heavy. Negative and
/// non-finite inputs are rejected rather than clamped.
pub fn classify_tier(irrigation_needed_mm: f64) -> Result<AdvisoryTier, AdvisoryError> {
    if !irrigation_needed_mm.is_finite() || irrigation_needed_mm < 0.0 {
        return Err(AdvisoryError::InvalidInput {
            value: irrigation_needed_mm,
        });
    }

    let tier = if irrigation_needed_mm < 5.0 {
        AdvisoryTier::Minimal
    } else if irrigation_needed_mm < 20.0 {
        AdvisoryTier::Light
    } else if irrigation_needed_mm < 40.0 {
        AdvisoryTier::Moderate
    } else {
        AdvisoryTier::Heavy
    };

    Ok(tier)
}

/// Classify a weekly irrigation requirement into a full advisory
pub fn classify_advisory(irrigation_needed_mm: f64) -> Result<IrrigationAdvisory, AdvisoryError> {
    let tier = classify_tier(irrigation_needed_mm)?;
    Ok(IrrigationAdvisory::from_tier(tier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_requirement_is_minimal() {
        let advisory = classify_advisory(0.0).unwrap();
        assert_eq!(advisory.tier, AdvisoryTier::Minimal);
        assert_eq!(
            advisory.advice,
            "Recent rainfall is sufficient. Monitor crop condition."
        );
    }

    #[test]
    fn boundaries_belong_to_upper_tier() {
        assert_eq!(classify_tier(4.999).unwrap(), AdvisoryTier::Minimal);
        assert_eq!(classify_tier(5.0).unwrap(), AdvisoryTier::Light);
        assert_eq!(classify_tier(19.999).unwrap(), AdvisoryTier::Light);
        assert_eq!(classify_tier(20.0).unwrap(), AdvisoryTier::Moderate);
        assert_eq!(classify_tier(39.999).unwrap(), AdvisoryTier::Moderate);
        assert_eq!(classify_tier(40.0).unwrap(), AdvisoryTier::Heavy);
    }

    #[test]
    fn mid_range_values() {
        assert_eq!(classify_tier(35.5).unwrap(), AdvisoryTier::Moderate);
        assert_eq!(classify_tier(100.0).unwrap(), AdvisoryTier::Heavy);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(classify_tier(-1.0).is_err());
        assert!(classify_tier(f64::NAN).is_err());
        assert!(classify_tier(f64::INFINITY).is_err());
        assert!(classify_tier(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn tier_presentation_tables_are_one_to_one() {
        let tiers = [
            AdvisoryTier::Minimal,
            AdvisoryTier::Light,
            AdvisoryTier::Moderate,
            AdvisoryTier::Heavy,
        ];
        let colors: Vec<_> = tiers.iter().map(|t| t.color()).collect();
        let advice: Vec<_> = tiers.iter().map(|t| t.advice()).collect();
        for i in 0..tiers.len() {
            for j in (i + 1)..tiers.len() {
                assert_ne!(colors[i], colors[j]);
                assert_ne!(advice[i], advice[j]);
            }
        }
    }

    proptest! {
        #[test]
        fn every_non_negative_value_classifies(mm in 0.0f64..10_000.0) {
            let tier = classify_tier(mm).unwrap();
            prop_assert!(tier.severity_rank() >= 1 && tier.severity_rank() <= 4);
        }

        #[test]
        fn severity_is_monotonic(a in 0.0f64..500.0, b in 0.0f64..500.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_tier = classify_tier(lo).unwrap();
            let hi_tier = classify_tier(hi).unwrap();
            prop_assert!(lo_tier.severity_rank() <= hi_tier.severity_rank());
        }

        #[test]
        fn classification_is_deterministic(mm in 0.0f64..500.0) {
            prop_assert_eq!(classify_tier(mm).unwrap(), classify_tier(mm).unwrap());
        }
    }
}
