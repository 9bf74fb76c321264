//! User settings service

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::Settings;
use crate::store::MemoryStore;
use shared::validation::{
    validate_latitude, validate_location_name, validate_longitude, validate_temp_buffer,
};

/// Settings service for reading and updating user preferences
#[derive(Clone)]
pub struct SettingsService {
    store: Arc<MemoryStore>,
}

/// Input for updating settings; absent fields stay unchanged.
///
/// Nullable fields accept an explicit JSON null to clear the stored value,
/// which is how the saved location and blanket selection are reset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsInput {
    pub use_feels_like: Option<bool>,
    pub rain_priority: Option<bool>,
    pub temp_buffer: Option<i32>,
    pub liner: Option<UpdateLinerSettingsInput>,
    pub notifications: Option<UpdateNotificationSettingsInput>,
    pub show_confidence: Option<bool>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub current_blanket_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub location_lat: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub location_lng: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub location_name: Option<Option<String>>,
}

/// Partial update for liner preferences
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinerSettingsInput {
    pub include_in_recommendations: Option<bool>,
    pub show_combined_weight: Option<bool>,
}

/// Partial update for notification preferences
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationSettingsInput {
    pub blanket_change: Option<bool>,
    pub severe_weather: Option<bool>,
    pub daily_summary: Option<bool>,
}

impl SettingsService {
    /// Create a new SettingsService instance
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Get the current settings
    pub async fn get_settings(&self) -> AppResult<Settings> {
        Ok(self.store.get_settings().await.into())
    }

    /// Update settings with partial changes
    pub async fn update_settings(&self, input: UpdateSettingsInput) -> AppResult<Settings> {
        if let Some(buffer) = input.temp_buffer {
            validate_temp_buffer(buffer)
                .map_err(|message| AppError::validation("tempBuffer", message))?;
        }
        if let Some(Some(latitude)) = input.location_lat {
            validate_latitude(latitude)
                .map_err(|message| AppError::validation("locationLat", message))?;
        }
        if let Some(Some(longitude)) = input.location_lng {
            validate_longitude(longitude)
                .map_err(|message| AppError::validation("locationLng", message))?;
        }
        if let Some(Some(ref name)) = input.location_name {
            validate_location_name(name)
                .map_err(|message| AppError::validation("locationName", message))?;
        }

        let row = self
            .store
            .update_settings(|row| {
                if let Some(value) = input.use_feels_like {
                    row.use_feels_like = value;
                }
                if let Some(value) = input.rain_priority {
                    row.rain_priority = value;
                }
                if let Some(value) = input.temp_buffer {
                    row.temp_buffer = value;
                }
                if let Some(liner) = input.liner {
                    if let Some(value) = liner.include_in_recommendations {
                        row.liner_include_in_recommendations = value;
                    }
                    if let Some(value) = liner.show_combined_weight {
                        row.liner_show_combined_weight = value;
                    }
                }
                if let Some(notifications) = input.notifications {
                    if let Some(value) = notifications.blanket_change {
                        row.notifications_blanket_change = value;
                    }
                    if let Some(value) = notifications.severe_weather {
                        row.notifications_severe_weather = value;
                    }
                    if let Some(value) = notifications.daily_summary {
                        row.notifications_daily_summary = value;
                    }
                }
                if let Some(value) = input.show_confidence {
                    row.show_confidence = value;
                }
                if let Some(selection) = input.current_blanket_id {
                    row.current_blanket_id = selection;
                }
                if let Some(latitude) = input.location_lat {
                    row.location_lat = latitude;
                }
                if let Some(longitude) = input.location_lng {
                    row.location_lng = longitude;
                }
                if let Some(name) = input.location_name {
                    row.location_name = name;
                }
            })
            .await;

        Ok(row.into())
    }
}
