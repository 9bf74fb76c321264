//! Daily digest builder for push-style notifications
//!
//! Produces the message text only; delivery belongs to whatever channel the
//! caller wires up.

use serde::Serialize;

use crate::models::{
    Blanket, BlanketWeight, HorseProfile, Liner, Recommendation, Settings, WeatherReading,
};
use shared::engine::get_recommendation;

/// Daily digest message for one horse
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDigest {
    pub headline: String,
    pub body: String,
    pub day: String,
    pub night: String,
}

/// Build the digest from two engine runs: the current reading for the day
/// label and tonight's low for the night label
pub fn build_digest(
    weather: &WeatherReading,
    horse: &HorseProfile,
    settings: &Settings,
    blankets: &[Blanket],
    liners: &[Liner],
) -> DailyDigest {
    let day_rec = get_recommendation(weather, horse, settings, blankets, liners);

    let night_reading = WeatherReading {
        temp: weather.tonight_low,
        feels_like: weather.tonight_low - 4,
        ..*weather
    };
    let night_rec = get_recommendation(&night_reading, horse, settings, blankets, liners);

    let day = display_label(&day_rec);
    let night = display_label(&night_rec);

    DailyDigest {
        headline: format!("{}'s Blanket Forecast", horse.name),
        body: format!("Day: {} → Night: {}", day, night),
        day,
        night,
    }
}

/// Human label for one engine run, flagging matches far off the ideal fill
fn display_label(rec: &Recommendation) -> String {
    if rec.weight_needed == BlanketWeight::None {
        return "No blanket".to_string();
    }
    match &rec.recommended_blanket {
        Some(blanket) => {
            let diff = rec.combined_grams - rec.grams_needed;
            if diff < -150 {
                format!("{} (may be too light)", blanket.name)
            } else if diff > 150 {
                format!("{} (may be too warm)", blanket.name)
            } else {
                blanket.name.clone()
            }
        }
        None => "No suitable blanket".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn horse() -> HorseProfile {
        serde_json::from_value(serde_json::json!({
            "id": "b9c7f7a0-5a89-4a27-b7a5-3f1c9f4f2a10",
            "name": "Tucker",
        }))
        .unwrap()
    }

    fn blanket(name: &str, grams: i32) -> Blanket {
        Blanket {
            id: Uuid::new_v4(),
            name: name.to_string(),
            grams,
            waterproof: true,
            color: "#9CAF88".to_string(),
            currently_on_horse_id: None,
        }
    }

    #[test]
    fn test_digest_names_day_and_night_blankets() {
        // 38°F feels-like by day wants light; a 24°F night wants medium
        let blankets = vec![blanket("Rambo Medium", 200), blanket("WeatherBeeta Lite", 100)];
        let digest = build_digest(
            &WeatherReading::default(),
            &horse(),
            &Settings::default(),
            &blankets,
            &[],
        );

        assert_eq!(digest.headline, "Tucker's Blanket Forecast");
        assert_eq!(digest.day, "WeatherBeeta Lite");
        assert_eq!(digest.night, "Rambo Medium");
        assert_eq!(
            digest.body,
            "Day: WeatherBeeta Lite → Night: Rambo Medium"
        );
    }

    #[test]
    fn test_digest_no_blanket_when_warm() {
        let reading = WeatherReading {
            temp: 60,
            feels_like: 60,
            tonight_low: 55,
            ..WeatherReading::default()
        };
        let digest = build_digest(
            &reading,
            &horse(),
            &Settings::default(),
            &[blanket("Rambo Medium", 200)],
            &[],
        );

        assert_eq!(digest.day, "No blanket");
        assert_eq!(digest.night, "No blanket");
    }

    #[test]
    fn test_digest_empty_inventory_reports_no_suitable() {
        let digest = build_digest(
            &WeatherReading::default(),
            &horse(),
            &Settings::default(),
            &[],
            &[],
        );
        assert_eq!(digest.day, "No suitable blanket");
    }

    #[test]
    fn test_digest_flags_match_far_too_light() {
        let reading = WeatherReading {
            temp: 8,
            feels_like: 2,
            tonight_low: 0,
            ..WeatherReading::default()
        };
        let digest = build_digest(
            &reading,
            &horse(),
            &Settings::default(),
            &[blanket("WeatherBeeta Lite", 100)],
            &[],
        );
        assert_eq!(digest.day, "WeatherBeeta Lite (may be too light)");
    }

    #[test]
    fn test_digest_flags_match_far_too_warm() {
        let digest = build_digest(
            &WeatherReading::default(),
            &horse(),
            &Settings::default(),
            &[blanket("Dover Heavyweight", 360)],
            &[],
        );
        // Needs light (100g); the only option is 260g over
        assert_eq!(digest.day, "Dover Heavyweight (may be too warm)");
    }
}
