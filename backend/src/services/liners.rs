//! Liner inventory service

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Liner;
use crate::store::{LinerRow, MemoryStore};
use shared::validation::{validate_fill_weight, validate_hex_color, validate_name};

/// Liner service for managing the liner inventory
#[derive(Clone)]
pub struct LinerService {
    store: Arc<MemoryStore>,
}

/// Input for creating a liner
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinerInput {
    pub name: String,
    #[serde(default = "default_grams")]
    pub grams: i32,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub paired_with_blanket_id: Option<Uuid>,
}

/// Input for updating a liner; absent fields stay unchanged
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinerInput {
    pub name: Option<String>,
    pub grams: Option<i32>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub paired_with_blanket_id: Option<Option<Uuid>>,
}

fn default_grams() -> i32 {
    100
}

fn default_color() -> String {
    "#E8D4C4".to_string()
}

impl LinerService {
    /// Create a new LinerService instance
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Get all liners
    pub async fn get_liners(&self) -> AppResult<Vec<Liner>> {
        let liners = self.store.list_liners().await;
        Ok(liners.into_iter().map(Liner::from).collect())
    }

    /// Get a liner by ID
    pub async fn get_liner(&self, liner_id: Uuid) -> AppResult<Liner> {
        let row = self
            .store
            .get_liner(liner_id)
            .await
            .ok_or_else(|| AppError::NotFound("Liner".to_string()))?;
        Ok(row.into())
    }

    /// Create a new liner
    pub async fn create_liner(&self, input: CreateLinerInput) -> AppResult<Liner> {
        validate_liner_fields(Some(&input.name), Some(input.grams), Some(&input.color))?;

        let now = Utc::now();
        let row = LinerRow {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            grams: input.grams,
            color: input.color,
            paired_with_blanket_id: input.paired_with_blanket_id,
            created_at: now,
            updated_at: now,
        };

        Ok(self.store.insert_liner(row).await.into())
    }

    /// Update a liner with partial changes
    pub async fn update_liner(&self, liner_id: Uuid, input: UpdateLinerInput) -> AppResult<Liner> {
        validate_liner_fields(input.name.as_deref(), input.grams, input.color.as_deref())?;

        let row = self
            .store
            .update_liner(liner_id, |row| {
                if let Some(name) = input.name {
                    row.name = name.trim().to_string();
                }
                if let Some(grams) = input.grams {
                    row.grams = grams;
                }
                if let Some(color) = input.color {
                    row.color = color;
                }
                if let Some(pairing) = input.paired_with_blanket_id {
                    row.paired_with_blanket_id = pairing;
                }
            })
            .await
            .ok_or_else(|| AppError::NotFound("Liner".to_string()))?;

        Ok(row.into())
    }

    /// Delete a liner
    pub async fn delete_liner(&self, liner_id: Uuid) -> AppResult<()> {
        if !self.store.delete_liner(liner_id).await {
            return Err(AppError::NotFound("Liner".to_string()));
        }
        Ok(())
    }
}

/// Validate the liner fields that were provided
fn validate_liner_fields(
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
