//! HTTP handlers for liner inventory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::Liner;
use crate::services::liners::{CreateLinerInput, LinerService, UpdateLinerInput};
use crate::AppState;

/// List all liners
pub async fn list_liners(State(state): State<AppState>) -> AppResult<Json<Vec<Liner>>> {
    let service = LinerService::new(state.store);
    let liners = service.get_liners().await?;
    Ok(Json(liners))
}

/// Get a liner by ID
pub async fn get_liner(
    State(state): State<AppState>,
    Path(liner_id): Path<Uuid>,
) -> AppResult<Json<Liner>> {
    let service = LinerService::new(state.store);
    let liner = service.get_liner(liner_id).await?;
    Ok(Json(liner))
}

/// Create a liner
pub async fn create_liner(
    State(state): State<AppState>,
    Json(input): Json<CreateLinerInput>,
) -> AppResult<(StatusCode, Json<Liner>)> {
    let service = LinerService::new(state.store);
    let liner = service.create_liner(input).await?;
    Ok((StatusCode::CREATED, Json(liner)))
}

/// Update a liner
pub async fn update_liner(
    State(state): State<AppState>,
    Path(liner_id): Path<Uuid>,
    Json(input): Json<UpdateLinerInput>,
) -> AppResult<Json<Liner>> {
    let service = LinerService::new(state.store);
    let liner = service.update_liner(liner_id, input).await?;
    Ok(Json(liner))
}

/// Delete a liner
pub async fn delete_liner(
    State(state): State<AppState>,
    Path(liner_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = LinerService::new(state.store);
    service.delete_liner(liner_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
