//! Weather data models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sky condition buckets shared by current weather and forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    Clear,
    #[default]
    PartlyCloudy,
    Cloudy,
    Rain,
    Snow,
}

/// A point-in-time weather reading, the engine's only weather input.
/// Temperatures are °F, wind is mph, precipitation chance is 0-100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub temp: i32,
    pub feels_like: i32,
    pub wind: i32,
    pub precip_chance: i32,
    pub tonight_low: i32,
    #[serde(default)]
    pub condition: WeatherCondition,
}

impl Default for WeatherReading {
    fn default() -> Self {
        Self {
            temp: 42,
            feels_like: 38,
            wind: 12,
            precip_chance: 20,
            tonight_low: 28,
            condition: WeatherCondition::PartlyCloudy,
        }
    }
}

/// The engine reading plus humidity, which is informational only
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    #[serde(flatten)]
    pub reading: WeatherReading,
    pub humidity: i32,
}

/// One day of forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub day: String,
    pub condition: WeatherCondition,
    pub high: i32,
    pub low: i32,
    pub precip_chance: i32,
}

/// Current conditions plus the 7-day forecast as served to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
}

/// A geocoding search hit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationResult {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub country: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub longitude: Decimal,
    pub display_name: String,
}
