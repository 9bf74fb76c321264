//! WebAssembly module for BlanketWise
//!
//! Runs the recommendation engine client-side so the browser can
//! recompute blanketing advice without a round trip to the server.
//! All inputs and outputs cross the boundary as JSON strings.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use shared::engine;

// Re-export shared types for rlib consumers
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Compute a blanket recommendation from JSON-encoded inputs.
///
/// Arguments are JSON strings for the weather reading, horse profile,
/// settings, blanket inventory, and liner inventory. Returns the
/// recommendation as a JSON string.
#[wasm_bindgen]
pub fn get_recommendation(
    weather_json: &str,
    horse_json: &str,
    settings_json: &str,
    blankets_json: &str,
    liners_json: &str,
) -> Result<String, JsValue> {
    let weather: WeatherReading = parse_arg(weather_json, "weather")?;
    let horse: HorseProfile = parse_arg(horse_json, "horse")?;
    let settings: Settings = parse_arg(settings_json, "settings")?;
    let blankets: Vec<Blanket> = parse_arg(blankets_json, "blankets")?;
    let liners: Vec<Liner> = parse_arg(liners_json, "liners")?;

    let recommendation =
        engine::get_recommendation(&weather, &horse, &settings, &blankets, &liners);
    serde_json::to_string(&recommendation)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize recommendation: {}", e)))
}

/// Compute the four-block daily schedule from JSON-encoded inputs.
///
/// `current_hour` is the local hour 0-23; when omitted the browser
/// clock is used.
#[wasm_bindgen]
pub fn get_daily_schedule(
    weather_json: &str,
    horse_json: &str,
    settings_json: &str,
    blankets_json: &str,
    liners_json: &str,
    current_hour: Option<u32>,
) -> Result<String, JsValue> {
    let weather: WeatherReading = parse_arg(weather_json, "weather")?;
    let horse: HorseProfile = parse_arg(horse_json, "horse")?;
    let settings: Settings = parse_arg(settings_json, "settings")?;
    let blankets: Vec<Blanket> = parse_arg(blankets_json, "blankets")?;
    let liners: Vec<Liner> = parse_arg(liners_json, "liners")?;

    let hour = current_hour.unwrap_or_else(|| js_sys::Date::new_0().get_hours());
    let schedule =
        engine::get_daily_schedule(&weather, &horse, &settings, &blankets, &liners, hour);
    serde_json::to_string(&schedule)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize schedule: {}", e)))
}

/// Parse one JSON argument, naming it in the error message
fn parse_arg<T: DeserializeOwned>(json: &str, name: &str) -> Result<T, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", name, e)))
}
