//! WebAssembly module for the Gatsibo Smart Irrigation Platform
//!
//! Provides client-side computation for:
//! - Irrigation advisory classification
//! - Water balance helpers
//! - Offline data validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Classify a weekly irrigation requirement and return the tier label
#[wasm_bindgen]
pub fn classify_irrigation_tier(irrigation_needed_mm: f64) -> Result<String, JsValue> {
    let tier = classify_tier(irrigation_needed_mm).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(format!("{}", tier))
}

/// Classify a weekly irrigation requirement and return the full advisory as JSON
#[wasm_bindgen]
pub fn classify_irrigation_advisory(irrigation_needed_mm: f64) -> Result<String, JsValue> {
    let advisory =
        classify_advisory(irrigation_needed_mm).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&advisory)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Display color for a weekly irrigation requirement
#[wasm_bindgen]
pub fn advisory_color(irrigation_needed_mm: f64) -> Result<String, JsValue> {
    let tier = classify_tier(irrigation_needed_mm).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(tier.color().to_string())
}

/// Severity rank of a weekly irrigation requirement (1 = Minimal, 4 = Heavy)
#[wasm_bindgen]
pub fn advisory_severity_rank(irrigation_needed_mm: f64) -> Result<i32, JsValue> {
    let tier = classify_tier(irrigation_needed_mm).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(tier.severity_rank())
}

/// Effective rainfall (80% of total); invalid totals yield zero
#[wasm_bindgen]
pub fn calculate_effective_rainfall(rainfall_mm: f64) -> f64 {
    if !rainfall_mm.is_finite() || rainfall_mm <= 0.0 {
        return 0.0;
    }
    effective_rainfall_mm(rainfall_mm)
}

/// Irrigation requirement: crop demand minus effective rainfall, floored at zero
#[wasm_bindgen]
pub fn calculate_irrigation_requirement(etc_mm: f64, rainfall_effective_mm: f64) -> f64 {
    if !etc_mm.is_finite() || !rainfall_effective_mm.is_finite() {
        return 0.0;
    }
    irrigation_requirement_mm(etc_mm, rainfall_effective_mm)
}

/// Validate an irrigation depth before classifying it offline
#[wasm_bindgen]
pub fn is_valid_water_depth(depth_mm: f64) -> bool {
    validate_water_depth_mm(depth_mm).is_ok()
}
