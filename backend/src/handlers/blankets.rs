//! HTTP handlers for blanket inventory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::blankets::{
    BlanketResponse, BlanketService, CreateBlanketInput, UpdateBlanketInput,
};
use crate::AppState;

/// List all blankets
pub async fn list_blankets(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BlanketResponse>>> {
    let service = BlanketService::new(state.store);
    let blankets = service.get_blankets().await?;
    Ok(Json(blankets))
}

/// Get a blanket by ID
pub async fn get_blanket(
    State(state): State<AppState>,
    Path(blanket_id): Path<Uuid>,
) -> AppResult<Json<BlanketResponse>> {
    let service = BlanketService::new(state.store);
    let blanket = service.get_blanket(blanket_id).await?;
    Ok(Json(blanket))
}

/// Create a blanket
pub async fn create_blanket(
    State(state): State<AppState>,
    Json(input): Json<CreateBlanketInput>,
) -> AppResult<(StatusCode, Json<BlanketResponse>)> {
    let service = BlanketService::new(state.store);
    let blanket = service.create_blanket(input).await?;
    Ok((StatusCode::CREATED, Json(blanket)))
}

/// Update a blanket
pub async fn update_blanket(
    State(state): State<AppState>,
    Path(blanket_id): Path<Uuid>,
    Json(input): Json<UpdateBlanketInput>,
) -> AppResult<Json<BlanketResponse>> {
    let service = BlanketService::new(state.store);
    let blanket = service.update_blanket(blanket_id, input).await?;
    Ok(Json(blanket))
}

/// Delete a blanket
pub async fn delete_blanket(
    State(state): State<AppState>,
    Path(blanket_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = BlanketService::new(state.store);
    service.delete_blanket(blanket_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
