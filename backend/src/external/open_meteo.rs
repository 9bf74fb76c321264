//! Open-Meteo API client for weather data and location search
//!
//! Uses the free forecast and geocoding endpoints; no API key required.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use crate::models::{
    CurrentConditions, CurrentWeather, ForecastDay, LocationResult, WeatherCondition,
    WeatherReading,
};

const INITIAL_RETRY_DELAY_MS: u64 = 1000;

/// Open-Meteo API client
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    forecast_url: String,
    geocoding_url: String,
    max_retries: u32,
}

/// Open-Meteo forecast response
#[derive(Debug, Deserialize)]
struct OpenMeteoForecast {
    current: OpenMeteoCurrent,
    hourly: OpenMeteoHourly,
    daily: OpenMeteoDaily,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoCurrent {
    temperature_2m: f64,
    apparent_temperature: f64,
    relative_humidity_2m: i32,
    weather_code: i32,
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoHourly {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    precipitation_probability: Vec<Option<i32>>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoDaily {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    weather_code: Vec<i32>,
    precipitation_probability_max: Vec<Option<i32>>,
}

/// Open-Meteo geocoding response
#[derive(Debug, Deserialize)]
struct OpenMeteoGeocoding {
    results: Option<Vec<OpenMeteoPlace>>,
}

#[derive(Debug, Deserialize)]
struct OpenMeteoPlace {
    id: i64,
    name: String,
    admin1: Option<String>,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl OpenMeteoClient {
    /// Create a new OpenMeteoClient from the weather configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            forecast_url: config.forecast_url.clone(),
            geocoding_url: config.geocoding_url.clone(),
            max_retries: config.max_retries,
        })
    }

    /// Fetch current conditions and the 7-day forecast by GPS coordinates
    pub async fn fetch_weather(
        &self,
        latitude: Decimal,
        longitude: Decimal,
    ) -> AppResult<CurrentWeather> {
        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            (
                "current",
                "temperature_2m,apparent_temperature,relative_humidity_2m,weather_code,wind_speed_10m"
                    .to_string(),
            ),
            (
                "hourly",
                "temperature_2m,precipitation_probability".to_string(),
            ),
            (
                "daily",
                "temperature_2m_max,temperature_2m_min,weather_code,precipitation_probability_max"
                    .to_string(),
            ),
            ("temperature_unit", "fahrenheit".to_string()),
            ("wind_speed_unit", "mph".to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", "7".to_string()),
        ];

        let response = self.get_with_retry(&self.forecast_url, &query).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherUnavailable(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OpenMeteoForecast = response.json().await.map_err(|e| {
            AppError::WeatherUnavailable(format!("Failed to parse weather response: {}", e))
        })?;

        Ok(convert_forecast(data))
    }

    /// Search for locations by name using the geocoding endpoint
    ///
    /// Queries shorter than two characters return an empty list without
    /// calling the API.
    pub async fn search_locations(&self, query: &str) -> AppResult<Vec<LocationResult>> {
        let trimmed = query.trim();
        if trimmed.chars().count() < 2 {
            return Ok(Vec::new());
        }

        let query = [
            ("name", trimmed.to_string()),
            ("count", "5".to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];

        let response = self.get_with_retry(&self.geocoding_url, &query).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherUnavailable(format!(
                "Geocoding API error: {} - {}",
                status, body
            )));
        }

        let data: OpenMeteoGeocoding = response.json().await.map_err(|e| {
            AppError::WeatherUnavailable(format!("Failed to parse geocoding response: {}", e))
        })?;

        Ok(data
            .results
            .unwrap_or_default()
            .into_iter()
            .map(convert_place)
            .collect())
    }

    /// Send a GET request, retrying on server errors, rate limiting, and
    /// transport failures with exponential backoff (1s, 2s, 4s)
    async fn get_with_retry(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> AppResult<reqwest::Response> {
        let mut attempt = 0u32;
        loop {
            let result = self.client.get(url).query(query).send().await;

            let retryable = match &result {
                Ok(response) => {
                    let status = response.status();
                    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
                }
                // reqwest errors cover timeouts and transport failures
                Err(_) => true,
            };

            if retryable && attempt < self.max_retries {
                let delay = Duration::from_millis(INITIAL_RETRY_DELAY_MS * 2u64.pow(attempt));
                match &result {
                    Ok(response) => tracing::warn!(
                        "Weather API returned {}, retrying in {}ms",
                        response.status(),
                        delay.as_millis()
                    ),
                    Err(e) => tracing::warn!(
                        "Weather API request failed ({}), retrying in {}ms",
                        e,
                        delay.as_millis()
                    ),
                }
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            return result
                .map_err(|e| AppError::WeatherUnavailable(format!("request failed: {}", e)));
        }
    }
}

/// Convert an Open-Meteo forecast response to our wire format
fn convert_forecast(data: OpenMeteoForecast) -> CurrentWeather {
    let tonight_low = tonight_low(&data.hourly).unwrap_or_else(|| {
        data.daily
            .temperature_2m_min
            .first()
            .map(|t| t.round() as i32)
            .unwrap_or(0)
    });

    let reading = WeatherReading {
        temp: data.current.temperature_2m.round() as i32,
        feels_like: data.current.apparent_temperature.round() as i32,
        wind: data.current.wind_speed_10m.round() as i32,
        precip_chance: near_term_precip_chance(&data.hourly),
        tonight_low,
        condition: condition_from_wmo(data.current.weather_code),
    };

    CurrentWeather {
        current: CurrentConditions {
            reading,
            humidity: data.current.relative_humidity_2m,
        },
        forecast: build_daily_forecast(&data.daily),
    }
}

/// Lowest hourly temperature in tonight's window, evening (6pm) through
/// early morning (6am), scanning the first 24 hourly entries
fn tonight_low(hourly: &OpenMeteoHourly) -> Option<i32> {
    let mut low: Option<f64> = None;
    for (time, temp) in hourly.time.iter().zip(&hourly.temperature_2m).take(24) {
        let parsed = match NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M") {
            Ok(parsed) => parsed,
            Err(_) => continue,
        };
        let hour = parsed.hour();
        if hour >= 18 || hour <= 6 {
            low = Some(match low {
                Some(current) => current.min(*temp),
                None => *temp,
            });
        }
    }
    low.map(|t| t.round() as i32)
}

/// Highest precipitation probability over the next six hours
fn near_term_precip_chance(hourly: &OpenMeteoHourly) -> i32 {
    hourly
        .precipitation_probability
        .iter()
        .take(6)
        .filter_map(|p| *p)
        .fold(0, i32::max)
}

fn build_daily_forecast(daily: &OpenMeteoDaily) -> Vec<ForecastDay> {
    daily
        .time
        .iter()
        .enumerate()
        .map(|(index, date)| ForecastDay {
            day: day_name(date, index),
            condition: daily
                .weather_code
                .get(index)
                .copied()
                .map(condition_from_wmo)
                .unwrap_or(WeatherCondition::Cloudy),
            high: daily
                .temperature_2m_max
                .get(index)
                .map(|t| t.round() as i32)
                .unwrap_or(0),
            low: daily
                .temperature_2m_min
                .get(index)
                .map(|t| t.round() as i32)
                .unwrap_or(0),
            precip_chance: daily
                .precipitation_probability_max
                .get(index)
                .copied()
                .flatten()
                .unwrap_or(0),
        })
        .collect()
}

/// Short display name for a forecast day, with the first entry shown as "Today"
fn day_name(date: &str, index: usize) -> String {
    if index == 0 {
        return "Today".to_string();
    }
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%a").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Map WMO weather codes to display conditions
///
/// https://open-meteo.com/en/docs#weathervariables
fn condition_from_wmo(code: i32) -> WeatherCondition {
    match code {
        0 => WeatherCondition::Clear,
        1..=3 => WeatherCondition::PartlyCloudy,
        45..=48 => WeatherCondition::Cloudy, // fog
        51..=67 | 80..=82 => WeatherCondition::Rain,
        71..=77 | 85..=86 => WeatherCondition::Snow,
        _ => WeatherCondition::Cloudy,
    }
}

fn convert_place(place: OpenMeteoPlace) -> LocationResult {
    let region = place.admin1.unwrap_or_default();
    let country = place.country.unwrap_or_default();
    let display_name = [place.name.as_str(), region.as_str(), country.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    LocationResult {
        id: place.id,
        name: place.name,
        region,
        country,
        latitude: Decimal::from_f64_retain(place.latitude).unwrap_or_default(),
        longitude: Decimal::from_f64_retain(place.longitude).unwrap_or_default(),
        display_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hourly() -> OpenMeteoHourly {
        OpenMeteoHourly {
            time: vec![
                "2024-01-15T15:00".to_string(),
                "2024-01-15T16:00".to_string(),
                "2024-01-15T17:00".to_string(),
                "2024-01-15T18:00".to_string(),
                "2024-01-15T23:00".to_string(),
                "2024-01-16T03:00".to_string(),
            ],
            temperature_2m: vec![40.0, 38.0, 5.0, 31.2, 27.6, 29.0],
            precipitation_probability: vec![Some(10), None, Some(55), Some(20), None, Some(5)],
        }
    }

    #[test]
    fn test_tonight_low_uses_overnight_window_only() {
        // 5.0 at 17:00 falls outside the 6pm-6am window
        let low = tonight_low(&sample_hourly());
        assert_eq!(low, Some(28));
    }

    #[test]
    fn test_tonight_low_ignores_entries_past_first_day() {
        let mut hourly = sample_hourly();
        // Pad the scan window with midday hours, then a brutal cold snap
        // beyond the first 24 entries
        while hourly.time.len() < 24 {
            hourly.time.push("2024-01-16T12:00".to_string());
            hourly.temperature_2m.push(60.0);
        }
        hourly.time.push("2024-01-16T23:00".to_string());
        hourly.temperature_2m.push(-40.0);
        assert_eq!(tonight_low(&hourly), Some(28));
    }

    #[test]
    fn test_tonight_low_none_without_overnight_hours() {
        let hourly = OpenMeteoHourly {
            time: vec!["2024-01-15T12:00".to_string(), "2024-01-15T13:00".to_string()],
            temperature_2m: vec![42.0, 43.0],
            precipitation_probability: vec![],
        };
        assert_eq!(tonight_low(&hourly), None);
    }

    #[test]
    fn test_near_term_precip_chance_skips_nulls() {
        assert_eq!(near_term_precip_chance(&sample_hourly()), 55);
    }

    #[test]
    fn test_near_term_precip_chance_only_first_six_hours() {
        let hourly = OpenMeteoHourly {
            time: vec![],
            temperature_2m: vec![],
            precipitation_probability: vec![
                Some(10),
                Some(20),
                Some(5),
                Some(15),
                Some(0),
                Some(25),
                Some(90),
            ],
        };
        assert_eq!(near_term_precip_chance(&hourly), 25);
    }

    #[test]
    fn test_near_term_precip_chance_empty_is_zero() {
        let hourly = OpenMeteoHourly {
            time: vec![],
            temperature_2m: vec![],
            precipitation_probability: vec![],
        };
        assert_eq!(near_term_precip_chance(&hourly), 0);
    }

    #[test]
    fn test_day_name_first_entry_is_today() {
        assert_eq!(day_name("2024-01-15", 0), "Today");
    }

    #[test]
    fn test_day_name_weekday_abbreviation() {
        // 2024-01-16 was a Tuesday
        assert_eq!(day_name("2024-01-16", 1), "Tue");
    }

    #[test]
    fn test_condition_from_wmo_mapping() {
        assert_eq!(condition_from_wmo(0), WeatherCondition::Clear);
        assert_eq!(condition_from_wmo(2), WeatherCondition::PartlyCloudy);
        assert_eq!(condition_from_wmo(45), WeatherCondition::Cloudy);
        assert_eq!(condition_from_wmo(61), WeatherCondition::Rain);
        assert_eq!(condition_from_wmo(81), WeatherCondition::Rain);
        assert_eq!(condition_from_wmo(73), WeatherCondition::Snow);
        assert_eq!(condition_from_wmo(85), WeatherCondition::Snow);
        assert_eq!(condition_from_wmo(99), WeatherCondition::Cloudy);
    }

    #[test]
    fn test_convert_place_display_name_skips_blanks() {
        let place = OpenMeteoPlace {
            id: 5261457,
            name: "Madison".to_string(),
            admin1: Some("Wisconsin".to_string()),
            country: None,
            latitude: 43.0731,
            longitude: -89.4012,
        };
        let result = convert_place(place);
        assert_eq!(result.display_name, "Madison, Wisconsin");
        assert_eq!(result.region, "Wisconsin");
        assert_eq!(result.country, "");
    }

    #[test]
    fn test_convert_forecast_assembles_reading() {
        let data = OpenMeteoForecast {
            current: OpenMeteoCurrent {
                temperature_2m: 41.6,
                apparent_temperature: 37.8,
                relative_humidity_2m: 65,
                weather_code: 2,
                wind_speed_10m: 12.3,
            },
            hourly: sample_hourly(),
            daily: OpenMeteoDaily {
                time: vec!["2024-01-15".to_string(), "2024-01-16".to_string()],
                temperature_2m_max: vec![45.2, 38.9],
                temperature_2m_min: vec![28.3, 19.5],
                weather_code: vec![2, 71],
                precipitation_probability_max: vec![Some(30), None],
            },
        };

        let weather = convert_forecast(data);
        assert_eq!(weather.current.reading.temp, 42);
        assert_eq!(weather.current.reading.feels_like, 38);
        assert_eq!(weather.current.reading.wind, 12);
        assert_eq!(weather.current.reading.precip_chance, 55);
        assert_eq!(weather.current.reading.tonight_low, 28);
        assert_eq!(
            weather.current.reading.condition,
            WeatherCondition::PartlyCloudy
        );
        assert_eq!(weather.current.humidity, 65);

        assert_eq!(weather.forecast.len(), 2);
        assert_eq!(weather.forecast[0].day, "Today");
        assert_eq!(weather.forecast[0].high, 45);
        assert_eq!(weather.forecast[0].precip_chance, 30);
        assert_eq!(weather.forecast[1].day, "Tue");
        assert_eq!(weather.forecast[1].condition, WeatherCondition::Snow);
        assert_eq!(weather.forecast[1].low, 20);
        assert_eq!(weather.forecast[1].precip_chance, 0);
    }

    #[test]
    fn test_convert_forecast_falls_back_to_daily_min() {
        let data = OpenMeteoForecast {
            current: OpenMeteoCurrent {
                temperature_2m: 50.0,
                apparent_temperature: 48.0,
                relative_humidity_2m: 40,
                weather_code: 0,
                wind_speed_10m: 5.0,
            },
            hourly: OpenMeteoHourly {
                time: vec!["2024-01-15T12:00".to_string()],
                temperature_2m: vec![50.0],
                precipitation_probability: vec![Some(10)],
            },
            daily: OpenMeteoDaily {
                time: vec!["2024-01-15".to_string()],
                temperature_2m_max: vec![52.0],
                temperature_2m_min: vec![33.4],
                weather_code: vec![0],
                precipitation_probability_max: vec![Some(10)],
            },
        };

        let weather = convert_forecast(data);
        assert_eq!(weather.current.reading.tonight_low, 33);
    }
}
