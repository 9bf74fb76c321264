//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{CurrentWeather, LocationResult};
use crate::services::WeatherService;
use crate::AppState;

/// Optional coordinate override shared by the weather-driven endpoints
#[derive(Debug, Deserialize)]
pub struct CoordsQuery {
    pub lat: Option<Decimal>,
    pub lng: Option<Decimal>,
}

/// Get current conditions and the 7-day forecast
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<CoordsQuery>,
) -> AppResult<Json<CurrentWeather>> {
    let service = WeatherService::new(state.store, state.weather, state.config);
    let weather = service.get_current_weather(query.lat, query.lng).await?;
    Ok(Json(weather))
}

/// Query parameters for location search
#[derive(Debug, Deserialize)]
pub struct LocationSearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Search for locations by name
pub async fn search_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationSearchQuery>,
) -> AppResult<Json<Vec<LocationResult>>> {
    let service = WeatherService::new(state.store, state.weather, state.config);
    let locations = service.search_locations(&query.q).await?;
    Ok(Json(locations))
}
