//! HTTP handlers for horse profile endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::HorseProfile;
use crate::services::horses::{CreateHorseInput, HorseService, UpdateHorseInput};
use crate::AppState;

/// List all horses
pub async fn list_horses(State(state): State<AppState>) -> AppResult<Json<Vec<HorseProfile>>> {
    let service = HorseService::new(state.store);
    let horses = service.get_horses().await?;
    Ok(Json(horses))
}

/// Get a horse by ID
pub async fn get_horse(
    State(state): State<AppState>,
    Path(horse_id): Path<Uuid>,
) -> AppResult<Json<HorseProfile>> {
    let service = HorseService::new(state.store);
    let horse = service.get_horse(horse_id).await?;
    Ok(Json(horse))
}

/// Create a horse
pub async fn create_horse(
    State(state): State<AppState>,
    Json(input): Json<CreateHorseInput>,
) -> AppResult<(StatusCode, Json<HorseProfile>)> {
    let service = HorseService::new(state.store);
    let horse = service.create_horse(input).await?;
    Ok((StatusCode::CREATED, Json(horse)))
}

/// Update a horse
pub async fn update_horse(
    State(state): State<AppState>,
    Path(horse_id): Path<Uuid>,
    Json(input): Json<UpdateHorseInput>,
) -> AppResult<Json<HorseProfile>> {
    let service = HorseService::new(state.store);
    let horse = service.update_horse(horse_id, input).await?;
    Ok(Json(horse))
}

/// Delete a horse
pub async fn delete_horse(
    State(state): State<AppState>,
    Path(horse_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = HorseService::new(state.store);
    service.delete_horse(horse_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
