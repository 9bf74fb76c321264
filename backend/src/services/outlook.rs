//! Seven-day blanketing outlook with cold-snap detection

use serde::Serialize;

use crate::models::{
    Blanket, BlanketWeight, CurrentWeather, HorseProfile, Liner, Settings, WeatherCondition,
    WeatherReading,
};
use shared::engine::get_recommendation;

/// One forecast day with the weight the engine recommends for it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlookDay {
    pub day: String,
    pub condition: WeatherCondition,
    pub high: i32,
    pub low: i32,
    pub precip_chance: i32,
    pub weight: BlanketWeight,
    pub label: &'static str,
}

/// Alert for the first forecast day at or below 20°F overnight
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColdSnapAlert {
    pub day: String,
    pub low: i32,
    pub message: String,
}

/// Forecast outlook payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outlook {
    pub days: Vec<OutlookDay>,
    pub cold_snap: Option<ColdSnapAlert>,
}

/// Run the engine against each forecast day, using the day's high as the
/// temperature and an offset of -4 for feels-like
pub fn build_outlook(
    weather: &CurrentWeather,
    horse: &HorseProfile,
    settings: &Settings,
    blankets: &[Blanket],
    liners: &[Liner],
) -> Outlook {
    let base = weather.current.reading;

    let days = weather
        .forecast
        .iter()
        .map(|day| {
            let day_reading = WeatherReading {
                temp: day.high,
                feels_like: day.high - 4,
                precip_chance: day.precip_chance,
                condition: day.condition,
                ..base
            };
            let rec = get_recommendation(&day_reading, horse, settings, blankets, liners);
            OutlookDay {
                day: day.day.clone(),
                condition: day.condition,
                high: day.high,
                low: day.low,
                precip_chance: day.precip_chance,
                weight: rec.weight_needed,
                label: rec.weight_needed.short_label(),
            }
        })
        .collect();

    let cold_snap = weather
        .forecast
        .iter()
        .find(|day| day.low <= 20)
        .map(|day| ColdSnapAlert {
            day: day.day.clone(),
            low: day.low,
            message: format!(
                "Temperature drop to {}°F overnight. Have heavyweight ready.",
                day.low
            ),
        });

    Outlook { days, cold_snap }
}
