//! HTTP handlers for settings endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::Settings;
use crate::services::settings::{SettingsService, UpdateSettingsInput};
use crate::AppState;

/// Get the current settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<Settings>> {
    let service = SettingsService::new(state.store);
    let settings = service.get_settings().await?;
    Ok(Json(settings))
}

/// Update settings with partial changes
pub async fn update_settings(
    State(state): State<AppState>,
    Json(input): Json<UpdateSettingsInput>,
) -> AppResult<Json<Settings>> {
    let service = SettingsService::new(state.store);
    let settings = service.update_settings(input).await?;
    Ok(Json(settings))
}
