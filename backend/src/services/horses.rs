//! Horse profile service

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{HorseProfile, ShelterAccess};
use crate::store::{shelter_to_str, HorseRow, MemoryStore};
use shared::validation::{validate_age, validate_breed, validate_name, validate_percent_scale};

/// Horse service for managing horse profiles
#[derive(Clone)]
pub struct HorseService {
    store: Arc<MemoryStore>,
}

/// Input for creating a horse
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHorseInput {
    pub name: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default = "default_midpoint")]
    pub coat_growth: i32,
    #[serde(default = "default_midpoint")]
    pub cold_tolerance: i32,
    #[serde(default)]
    pub is_clipped: bool,
    #[serde(default)]
    pub is_senior: bool,
    #[serde(default)]
    pub is_thin_keeper: bool,
    #[serde(default)]
    pub is_foal: bool,
    #[serde(default)]
    pub shelter_access: ShelterAccess,
}

/// Input for updating a horse; absent fields stay unchanged
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHorseInput {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub breed: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub age: Option<Option<i32>>,
    pub coat_growth: Option<i32>,
    pub cold_tolerance: Option<i32>,
    pub is_clipped: Option<bool>,
    pub is_senior: Option<bool>,
    pub is_thin_keeper: Option<bool>,
    pub is_foal: Option<bool>,
    pub shelter_access: Option<ShelterAccess>,
}

fn default_midpoint() -> i32 {
    50
}

impl HorseService {
    /// Create a new HorseService instance
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Get all horses
    pub async fn get_horses(&self) -> AppResult<Vec<HorseProfile>> {
        let horses = self.store.list_horses().await;
        Ok(horses.into_iter().map(HorseProfile::from).collect())
    }

    /// Get a horse by ID
    pub async fn get_horse(&self, horse_id: Uuid) -> AppResult<HorseProfile> {
        let row = self
            .store
            .get_horse(horse_id)
            .await
            .ok_or_else(|| AppError::NotFound("Horse".to_string()))?;
        Ok(row.into())
    }

    /// Create a new horse
    pub async fn create_horse(&self, input: CreateHorseInput) -> AppResult<HorseProfile> {
        validate_horse_fields(
            Some(&input.name),
            input.breed.as_deref(),
            input.age,
            Some(input.coat_growth),
            Some(input.cold_tolerance),
        )?;

        let now = Utc::now();
        let row = HorseRow {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            breed: normalize_optional_text(input.breed),
            age: input.age,
            coat_growth: input.coat_growth,
            cold_tolerance: input.cold_tolerance,
            is_clipped: input.is_clipped,
            is_senior: input.is_senior,
            is_thin_keeper: input.is_thin_keeper,
            is_foal: input.is_foal,
            shelter_access: shelter_to_str(input.shelter_access).to_string(),
            created_at: now,
            updated_at: now,
        };

        Ok(self.store.insert_horse(row).await.into())
    }

    /// Update a horse with partial changes
    pub async fn update_horse(
        &self,
        horse_id: Uuid,
        input: UpdateHorseInput,
    ) -> AppResult<HorseProfile> {
        validate_horse_fields(
            input.name.as_deref(),
            input.breed.as_ref().and_then(|b| b.as_deref()),
            input.age.flatten(),
            input.coat_growth,
            input.cold_tolerance,
        )?;

        let row = self
            .store
            .update_horse(horse_id, |row| {
                if let Some(name) = input.name {
                    row.name = name.trim().to_string();
                }
                if let Some(breed) = input.breed {
                    row.breed = normalize_optional_text(breed);
                }
                if let Some(age) = input.age {
                    row.age = age;
                }
                if let Some(value) = input.coat_growth {
                    row.coat_growth = value;
                }
                if let Some(value) = input.cold_tolerance {
                    row.cold_tolerance = value;
                }
                if let Some(value) = input.is_clipped {
                    row.is_clipped = value;
                }
                if let Some(value) = input.is_senior {
                    row.is_senior = value;
                }
                if let Some(value) = input.is_thin_keeper {
                    row.is_thin_keeper = value;
                }
                if let Some(value) = input.is_foal {
                    row.is_foal = value;
                }
                if let Some(shelter) = input.shelter_access {
                    row.shelter_access = shelter_to_str(shelter).to_string();
                }
            })
            .await
            .ok_or_else(|| AppError::NotFound("Horse".to_string()))?;

        Ok(row.into())
    }

    /// Delete a horse
    pub async fn delete_horse(&self, horse_id: Uuid) -> AppResult<()> {
        if !self.store.delete_horse(horse_id).await {
            return Err(AppError::NotFound("Horse".to_string()));
        }
        Ok(())
    }
}

/// Validate the horse fields that were provided
fn validate_horse_fields(
    name: Option<&str>,
    breed: Option<&str>,
    age: Option<i32>,
    coat_growth: Option<i32>,
    cold_tolerance: Option<i32>,
) -> AppResult<()> {
    if let Some(name) = name {
        validate_name(name).map_err(|message| AppError::validation("name", message))?;
    }
    if let Some(breed) = breed {
        validate_breed(breed).map_err(|message| AppError::validation("breed", message))?;
    }
    if let Some(age) = age {
        validate_age(age).map_err(|message| AppError::validation("age", message))?;
    }
    if let Some(value) = coat_growth {
        validate_percent_scale(value)
            .map_err(|message| AppError::validation("coatGrowth", message))?;
    }
    if let Some(value) = cold_tolerance {
        validate_percent_scale(value)
            .map_err(|message| AppError::validation("coldTolerance", message))?;
    }
    Ok(())
}

/// Trim free-text fields, dropping the value entirely when blank
fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
