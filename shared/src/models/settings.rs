//! User settings models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Liner behavior preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinerSettings {
    #[serde(default = "default_true")]
    pub include_in_recommendations: bool,
    #[serde(default = "default_true")]
    pub show_combined_weight: bool,
}

impl Default for LinerSettings {
    fn default() -> Self {
        Self {
            include_in_recommendations: true,
            show_combined_weight: true,
        }
    }
}

/// Notification preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    #[serde(default = "default_true")]
    pub blanket_change: bool,
    #[serde(default = "default_true")]
    pub severe_weather: bool,
    #[serde(default)]
    pub daily_summary: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            blanket_change: true,
            severe_weather: true,
            daily_summary: false,
        }
    }
}

/// User-level settings that shape recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Compare thresholds against feels-like instead of actual temperature
    #[serde(default = "default_true")]
    pub use_feels_like: bool,
    /// Let rain trigger sheet and waterproof recommendations
    #[serde(default = "default_true")]
    pub rain_priority: bool,
    /// Extra °F added to every threshold, 0-15
    #[serde(default)]
    pub temp_buffer: i32,
    #[serde(default)]
    pub liner: LinerSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub show_confidence: bool,
    #[serde(default)]
    pub current_blanket_id: Option<Uuid>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub location_lat: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub location_lng: Option<Decimal>,
    #[serde(default)]
    pub location_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_feels_like: true,
            rain_priority: true,
            temp_buffer: 0,
            liner: LinerSettings::default(),
            notifications: NotificationSettings::default(),
            show_confidence: true,
            current_blanket_id: None,
            location_lat: None,
            location_lng: None,
            location_name: None,
        }
    }
}

fn default_true() -> bool {
    true
}
