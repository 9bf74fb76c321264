//! Configuration management for the BlanketWise backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with BW_ prefix

use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Open-Meteo client configuration
    pub weather: WeatherConfig,

    /// Fallback location when neither the request nor saved settings
    /// provide coordinates
    pub default_location: LocationConfig,

    /// CORS configuration
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Open-Meteo forecast endpoint
    pub forecast_url: String,

    /// Open-Meteo geocoding endpoint
    pub geocoding_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Retries after the initial attempt for retryable failures
    pub max_retries: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LocationConfig {
    pub name: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Comma-separated list of origins, or "*" for any
    pub allowed_origins: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("BW_ENV").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.forecast_url", "https://api.open-meteo.com/v1/forecast")?
            .set_default(
                "weather.geocoding_url",
                "https://geocoding-api.open-meteo.com/v1/search",
            )?
            .set_default("weather.timeout_seconds", 10)?
            .set_default("weather.max_retries", 3)?
            .set_default("default_location.name", "Madison, WI")?
            .set_default("default_location.latitude", 43.0731)?
            .set_default("default_location.longitude", -89.4012)?
            .set_default("cors.allowed_origins", "*")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (BW_ prefix)
            .add_source(
                Environment::with_prefix("BW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
            default_location: LocationConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            geocoding_url: "https://geocoding-api.open-meteo.com/v1/search".to_string(),
            timeout_seconds: 10,
            max_retries: 3,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            name: "Madison, WI".to_string(),
            latitude: Decimal::new(430731, 4),
            longitude: Decimal::new(-894012, 4),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_string(),
        }
    }
}
