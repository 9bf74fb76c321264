//! Weather service for resolving coordinates and fetching conditions

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::config::Config;
use crate::error::AppResult;
use crate::external::OpenMeteoClient;
use crate::models::{CurrentWeather, GpsCoordinates, LocationResult};
use crate::store::MemoryStore;

/// Weather service backed by Open-Meteo
#[derive(Clone)]
pub struct WeatherService {
    store: Arc<MemoryStore>,
    client: OpenMeteoClient,
    config: Arc<Config>,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(store: Arc<MemoryStore>, client: OpenMeteoClient, config: Arc<Config>) -> Self {
        Self {
            store,
            client,
            config,
        }
    }

    /// Fetch current conditions and the forecast for the given coordinates,
    /// falling back to the saved location and then the configured default
    pub async fn get_current_weather(
        &self,
        latitude: Option<Decimal>,
        longitude: Option<Decimal>,
    ) -> AppResult<CurrentWeather> {
        let coordinates = self.resolve_coordinates(latitude, longitude).await;
        self.client
            .fetch_weather(coordinates.latitude, coordinates.longitude)
            .await
    }

    /// Search for locations by name
    pub async fn search_locations(&self, query: &str) -> AppResult<Vec<LocationResult>> {
        self.client.search_locations(query).await
    }

    /// Coordinate precedence: explicit query, then the location saved in
    /// settings, then the configured default
    async fn resolve_coordinates(
        &self,
        latitude: Option<Decimal>,
        longitude: Option<Decimal>,
    ) -> GpsCoordinates {
        if let (Some(latitude), Some(longitude)) = (latitude, longitude) {
            return GpsCoordinates::new(latitude, longitude);
        }

        let settings = self.store.get_settings().await;
        if let (Some(latitude), Some(longitude)) = (settings.location_lat, settings.location_lng) {
            return GpsCoordinates::new(latitude, longitude);
        }

        GpsCoordinates::new(
            self.config.default_location.latitude,
            self.config.default_location.longitude,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> WeatherService {
        let config = Arc::new(Config::default());
        let client = OpenMeteoClient::new(&config.weather).unwrap();
        WeatherService::new(Arc::new(MemoryStore::new()), client, config)
    }

    #[tokio::test]
    async fn test_resolve_coordinates_prefers_query() {
        let service = service();
        let coordinates = service
            .resolve_coordinates(Some(Decimal::new(40, 0)), Some(Decimal::new(-105, 0)))
            .await;
        assert_eq!(coordinates.latitude, Decimal::new(40, 0));
        assert_eq!(coordinates.longitude, Decimal::new(-105, 0));
    }

    #[tokio::test]
    async fn test_resolve_coordinates_falls_back_to_settings() {
        let service = service();
        service
            .store
            .update_settings(|row| {
                row.location_lat = Some(Decimal::new(447, 1));
                row.location_lng = Some(Decimal::new(-887, 1));
            })
            .await;

        let coordinates = service.resolve_coordinates(None, None).await;
        assert_eq!(coordinates.latitude, Decimal::new(447, 1));
    }

    #[tokio::test]
    async fn test_resolve_coordinates_default_when_nothing_saved() {
        let service = service();
        let coordinates = service.resolve_coordinates(None, None).await;
        assert_eq!(coordinates.latitude, Decimal::new(430731, 4));
        assert_eq!(coordinates.longitude, Decimal::new(-894012, 4));
    }

    #[tokio::test]
    async fn test_partial_query_coordinates_ignored() {
        // A lone latitude is not enough; fall through to the default
        let service = service();
        let coordinates = service
            .resolve_coordinates(Some(Decimal::new(40, 0)), None)
            .await;
        assert_eq!(coordinates.latitude, Decimal::new(430731, 4));
    }
}
