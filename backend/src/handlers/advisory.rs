//! HTTP handler for the irrigation advisory classifier

use axum::{extract::Query, Json};
use serde::Deserialize;
use shared::{classify_advisory, IrrigationAdvisory};

use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct AdvisoryQuery {
    pub irrigation_needed_mm: f64,
}

/// Classify a weekly irrigation requirement into an advisory.
///
/// Negative or non-finite values produce a validation error rather than a
/// fallback tier.
pub async fn get_advisory(
    Query(query): Query<AdvisoryQuery>,
) -> AppResult<Json<IrrigationAdvisory>> {
    let advisory = classify_advisory(query.irrigation_needed_mm)?;
    Ok(Json(advisory))
}
