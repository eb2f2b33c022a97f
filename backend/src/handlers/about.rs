//! HTTP handlers for the informational endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use shared::{ForecastModelInfo, SiteProfile, ToolProfile};

use crate::AppState;

#[derive(Serialize)]
pub struct ToolAbout {
    pub profile: ToolProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ForecastModelInfo>,
}

/// Facts about the irrigation scheme's site
pub async fn get_site_profile() -> Json<SiteProfile> {
    Json(SiteProfile::gatsibo())
}

/// Facts about the tool, its methodology, and the forecast model
pub async fn get_tool_profile(State(state): State<AppState>) -> Json<ToolAbout> {
    Json(ToolAbout {
        profile: ToolProfile::gatsibo_scheduler(),
        model: state.dataset.model_info().cloned(),
    })
}
