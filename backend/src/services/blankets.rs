//! Blanket inventory service

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Blanket, BlanketStatus};
use crate::store::{BlanketRow, MemoryStore};
use shared::validation::{validate_fill_weight, validate_hex_color, validate_name};

/// Blanket service for managing the blanket inventory
#[derive(Clone)]
pub struct BlanketService {
    store: Arc<MemoryStore>,
}

/// A blanket with its derived status
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlanketResponse {
    #[serde(flatten)]
    pub blanket: Blanket,
    pub status: BlanketStatus,
}

impl From<Blanket> for BlanketResponse {
    fn from(blanket: Blanket) -> Self {
        let status = blanket.status();
        Self { blanket, status }
    }
}

impl From<BlanketRow> for BlanketResponse {
    fn from(row: BlanketRow) -> Self {
        Blanket::from(row).into()
    }
}

/// Input for creating a blanket
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlanketInput {
    pub name: String,
    #[serde(default)]
    pub grams: i32,
    #[serde(default = "default_waterproof")]
    pub waterproof: bool,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub currently_on_horse_id: Option<Uuid>,
}

/// Input for updating a blanket; absent fields stay unchanged.
///
/// `status: "available"` clears the horse assignment; `in-use` on its own is
/// ignored since status is derived from the assignment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlanketInput {
    pub name: Option<String>,
    pub grams: Option<i32>,
    pub waterproof: Option<bool>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub currently_on_horse_id: Option<Option<Uuid>>,
    pub status: Option<BlanketStatus>,
}

fn default_waterproof() -> bool {
    true
}

fn default_color() -> String {
    "#9CAF88".to_string()
}

impl BlanketService {
    /// Create a new BlanketService instance
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Get all blankets
    pub async fn get_blankets(&self) -> AppResult<Vec<BlanketResponse>> {
        let blankets = self.store.list_blankets().await;
        Ok(blankets.into_iter().map(BlanketResponse::from).collect())
    }

    /// Get a blanket by ID
    pub async fn get_blanket(&self, blanket_id: Uuid) -> AppResult<BlanketResponse> {
        let row = self
            .store
            .get_blanket(blanket_id)
            .await
            .ok_or_else(|| AppError::NotFound("Blanket".to_string()))?;
        Ok(row.into())
    }

    /// Create a new blanket
    pub async fn create_blanket(&self, input: CreateBlanketInput) -> AppResult<BlanketResponse> {
        validate_blanket_fields(Some(&input.name), Some(input.grams), Some(&input.color))?;

        let now = Utc::now();
        let row = BlanketRow {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            grams: input.grams,
            waterproof: input.waterproof,
            color: input.color,
            currently_on_horse_id: input.currently_on_horse_id,
            created_at: now,
            updated_at: now,
        };

        Ok(self.store.insert_blanket(row).await.into())
    }

    /// Update a blanket with partial changes
    pub async fn update_blanket(
        &self,
        blanket_id: Uuid,
        input: UpdateBlanketInput,
    ) -> AppResult<BlanketResponse> {
        validate_blanket_fields(input.name.as_deref(), input.grams, input.color.as_deref())?;

        let row = self
            .store
            .update_blanket(blanket_id, |row| {
                if let Some(name) = input.name {
                    row.name = name.trim().to_string();
                }
                if let Some(grams) = input.grams {
                    row.grams = grams;
                }
                if let Some(waterproof) = input.waterproof {
                    row.waterproof = waterproof;
                }
                if let Some(color) = input.color {
                    row.color = color;
                }
                if let Some(assignment) = input.currently_on_horse_id {
                    row.currently_on_horse_id = assignment;
                }
                // A status of available translates to clearing the assignment
                if input.status == Some(BlanketStatus::Available) {
                    row.currently_on_horse_id = None;
                }
            })
            .await
            .ok_or_else(|| AppError::NotFound("Blanket".to_string()))?;

        Ok(row.into())
    }

    /// Delete a blanket
    pub async fn delete_blanket(&self, blanket_id: Uuid) -> AppResult<()> {
        if !self.store.delete_blanket(blanket_id).await {
            return Err(AppError::NotFound("Blanket".to_string()));
        }
        Ok(())
    }
}

/// Validate the blanket fields that were provided
fn validate_blanket_fields(
    name: Option<&str>,
    grams: Option<i32>,
    color: Option<&str>,
) -> AppResult<()> {
    if let Some(name) = name {
        validate_name(name).map_err(|message| AppError::validation("name", message))?;
    }
    if let Some(grams) = grams {
        validate_fill_weight(grams).map_err(|message| AppError::validation("grams", message))?;
    }
    if let Some(color) = color {
        validate_hex_color(color).map_err(|message| AppError::validation("color", message))?;
    }
    Ok(())
}
