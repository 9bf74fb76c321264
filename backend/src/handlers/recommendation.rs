//! HTTP handlers for recommendation endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::handlers::weather::CoordsQuery;
use crate::models::{
    Blanket, HorseProfile, Liner, Recommendation, ScheduleEntry, Settings, WeatherReading,
};
use crate::services::digest::DailyDigest;
use crate::services::outlook::Outlook;
use crate::services::recommendation::HorseRecommendation;
use crate::services::{RecommendationService, WeatherService};
use crate::AppState;
use shared::engine::get_recommendation;

/// Input for a pure recommendation preview
#[derive(Debug, Deserialize)]
pub struct PreviewInput {
    pub weather: WeatherReading,
    pub horse: HorseProfile,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub blankets: Vec<Blanket>,
    #[serde(default)]
    pub liners: Vec<Liner>,
}

/// Run the engine on caller-supplied data without touching the store
pub async fn preview_recommendation(Json(input): Json<PreviewInput>) -> Json<Recommendation> {
    Json(get_recommendation(
        &input.weather,
        &input.horse,
        &input.settings,
        &input.blankets,
        &input.liners,
    ))
}

/// Get the current recommendation for a horse
pub async fn get_horse_recommendation(
    State(state): State<AppState>,
    Path(horse_id): Path<Uuid>,
    Query(query): Query<CoordsQuery>,
) -> AppResult<Json<HorseRecommendation>> {
    let weather = WeatherService::new(state.store.clone(), state.weather, state.config);
    let service = RecommendationService::new(state.store, weather);
    let recommendation = service.for_horse(horse_id, query.lat, query.lng).await?;
    Ok(Json(recommendation))
}

/// Get today's time-blocked schedule for a horse
pub async fn get_horse_schedule(
    State(state): State<AppState>,
    Path(horse_id): Path<Uuid>,
    Query(query): Query<CoordsQuery>,
) -> AppResult<Json<Vec<ScheduleEntry>>> {
    let weather = WeatherService::new(state.store.clone(), state.weather, state.config);
    let service = RecommendationService::new(state.store, weather);
    let schedule = service
        .schedule_for_horse(horse_id, query.lat, query.lng)
        .await?;
    Ok(Json(schedule))
}

/// Get the 7-day outlook for a horse
pub async fn get_horse_outlook(
    State(state): State<AppState>,
    Path(horse_id): Path<Uuid>,
    Query(query): Query<CoordsQuery>,
) -> AppResult<Json<Outlook>> {
    let weather = WeatherService::new(state.store.clone(), state.weather, state.config);
    let service = RecommendationService::new(state.store, weather);
    let outlook = service
        .outlook_for_horse(horse_id, query.lat, query.lng)
        .await?;
    Ok(Json(outlook))
}

/// Get the daily digest message for a horse
pub async fn get_horse_digest(
    State(state): State<AppState>,
    Path(horse_id): Path<Uuid>,
    Query(query): Query<CoordsQuery>,
) -> AppResult<Json<DailyDigest>> {
    let weather = WeatherService::new(state.store.clone(), state.weather, state.config);
    let service = RecommendationService::new(state.store, weather);
    let digest = service
        .digest_for_horse(horse_id, query.lat, query.lng)
        .await?;
    Ok(Json(digest))
}
