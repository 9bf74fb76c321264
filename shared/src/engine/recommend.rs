//! Recommendation engine orchestration

use crate::engine::{
    calculate_confidence, calculate_thresholds, classify_weight, generate_reasoning,
    match_inventory,
};
use crate::models::{Blanket, HorseProfile, Liner, Recommendation, Settings, WeatherReading};

/// Produce a blanketing recommendation for one weather reading.
///
/// Inputs are assumed validated; this function never fails. An empty
/// inventory degrades to a recommendation with null blanket fields.
pub fn get_recommendation(
    weather: &WeatherReading,
    horse: &HorseProfile,
    settings: &Settings,
    blankets: &[Blanket],
    liners: &[Liner],
) -> Recommendation {
    let effective_temp = if settings.use_feels_like {
        weather.feels_like
    } else {
        weather.temp
    };

    let thresholds = calculate_thresholds(horse, settings);
    let weight_needed = classify_weight(
        effective_temp,
        &thresholds,
        weather.precip_chance,
        settings.rain_priority,
    );
    let grams_needed = weight_needed.grams_needed();

    let needs_waterproof = weather.precip_chance
        > horse.shelter_access.waterproof_precip_threshold()
        && settings.rain_priority;
    let needs_neck_rug =
        weather.wind > horse.shelter_access.neck_rug_wind_threshold() || effective_temp < 10;

    let selection = match_inventory(
        blankets,
        liners,
        grams_needed,
        needs_waterproof,
        settings.liner.include_in_recommendations,
    );

    let confidence = calculate_confidence(
        effective_temp,
        &thresholds,
        weather,
        grams_needed,
        &selection,
        needs_waterproof,
    );
    let reasoning = generate_reasoning(
        weather,
        horse,
        settings,
        weight_needed,
        effective_temp,
        needs_neck_rug,
        selection.liner.as_ref(),
    );

    Recommendation {
        weight_needed,
        grams_needed,
        recommended_blanket: selection.blanket,
        recommended_liner: selection.liner,
        combined_grams: selection.combined_grams,
        confidence,
        reasoning,
        needs_waterproof,
        needs_neck_rug,
        effective_temp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlanketWeight, ShelterAccess};
    use uuid::Uuid;

    fn baseline_horse() -> HorseProfile {
        HorseProfile {
            id: Uuid::new_v4(),
            name: "Tucker".to_string(),
            breed: Some("Quarter Horse".to_string()),
            age: Some(22),
            coat_growth: 50,
            cold_tolerance: 50,
            is_clipped: false,
            is_senior: false,
            is_thin_keeper: false,
            is_foal: false,
            shelter_access: ShelterAccess::RunIn,
        }
    }

    fn baseline_weather() -> WeatherReading {
        WeatherReading {
            temp: 42,
            feels_like: 38,
            wind: 12,
            precip_chance: 20,
            tonight_low: 28,
            ..WeatherReading::default()
        }
    }

    fn blanket(name: &str, grams: i32, waterproof: bool) -> Blanket {
        Blanket {
            id: Uuid::new_v4(),
            name: name.to_string(),
            grams,
            waterproof,
            color: "#B8D4E3".to_string(),
            currently_on_horse_id: None,
        }
    }

    #[test]
    fn test_mild_day_needs_light_blanket() {
        let rec = get_recommendation(
            &baseline_weather(),
            &baseline_horse(),
            &Settings::default(),
            &[],
            &[],
        );
        assert_eq!(rec.weight_needed, BlanketWeight::Light);
        assert_eq!(rec.grams_needed, 100);
        assert_eq!(rec.effective_temp, 38);
        assert!(!rec.needs_waterproof);
        assert!(!rec.needs_neck_rug);
    }

    #[test]
    fn test_clipped_horse_in_cold_needs_heavy() {
        let mut horse = baseline_horse();
        horse.is_clipped = true;
        let weather = WeatherReading {
            temp: 20,
            feels_like: 15,
            ..baseline_weather()
        };
        let rec = get_recommendation(&weather, &horse, &Settings::default(), &[], &[]);
        // Clipping lifts heavy_max to 29°F, so 15°F lands in heavy
        assert_eq!(rec.weight_needed, BlanketWeight::Heavy);
        assert_eq!(rec.grams_needed, 300);
    }

    #[test]
    fn test_warm_rain_gets_a_sheet() {
        let weather = WeatherReading {
            temp: 45,
            feels_like: 45,
            precip_chance: 50,
            ..baseline_weather()
        };
        let rec = get_recommendation(
            &weather,
            &baseline_horse(),
            &Settings::default(),
            &[],
            &[],
        );
        assert_eq!(rec.weight_needed, BlanketWeight::Sheet);
        assert_eq!(rec.grams_needed, 0);
        // 50% > 30% run-in threshold
        assert!(rec.needs_waterproof);
    }

    #[test]
    fn test_empty_inventory_degrades_to_null_blanket() {
        let rec = get_recommendation(
            &baseline_weather(),
            &baseline_horse(),
            &Settings::default(),
            &[],
            &[],
        );
        assert!(rec.recommended_blanket.is_none());
        assert!(rec.recommended_liner.is_none());
        assert_eq!(rec.combined_grams, 0);
        assert!((50..=99).contains(&rec.confidence));
    }

    #[test]
    fn test_exposed_horse_in_wind_needs_neck_rug() {
        let mut horse = baseline_horse();
        horse.shelter_access = ShelterAccess::None;
        let weather = WeatherReading {
            temp: 25,
            feels_like: 25,
            wind: 30,
            ..baseline_weather()
        };
        let rec = get_recommendation(&weather, &horse, &Settings::default(), &[], &[]);
        assert!(rec.needs_neck_rug);
    }

    #[test]
    fn test_actual_temp_used_when_feels_like_disabled() {
        let mut settings = Settings::default();
        settings.use_feels_like = false;
        let rec = get_recommendation(
            &baseline_weather(),
            &baseline_horse(),
            &settings,
            &[],
            &[],
        );
        assert_eq!(rec.effective_temp, 42);
        // 42°F sits above light_max, and 20% rain is not enough for a sheet
        assert_eq!(rec.weight_needed, BlanketWeight::None);
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        let horse = baseline_horse();
        let weather = baseline_weather();
        let settings = Settings::default();
        let blankets = vec![blanket("Dover Heavyweight", 360, true)];
        let first = get_recommendation(&weather, &horse, &settings, &blankets, &[]);
        let second = get_recommendation(&weather, &horse, &settings, &blankets, &[]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_grams_needed_always_matches_weight_class() {
        for temp in [-10, 5, 18, 33, 45, 70] {
            let weather = WeatherReading {
                temp,
                feels_like: temp,
                ..baseline_weather()
            };
            let rec = get_recommendation(
                &weather,
                &baseline_horse(),
                &Settings::default(),
                &[],
                &[],
            );
            assert_eq!(rec.grams_needed, rec.weight_needed.grams_needed());
        }
    }

    #[test]
    fn test_full_inventory_picks_closest_weight() {
        let blankets = vec![
            blanket("Dover Heavyweight", 360, true),
            blanket("Rambo Medium", 200, true),
            blanket("WeatherBeeta Lite", 100, false),
            blanket("Rain Sheet", 0, true),
        ];
        let rec = get_recommendation(
            &baseline_weather(),
            &baseline_horse(),
            &Settings::default(),
            &blankets,
            &[],
        );
        assert_eq!(rec.weight_needed, BlanketWeight::Light);
        assert_eq!(
            rec.recommended_blanket.unwrap().name,
            "WeatherBeeta Lite"
        );
        assert_eq!(rec.combined_grams, 100);
    }

    #[test]
    fn test_reasoning_mentions_liner_only_when_matched() {
        let blankets = vec![blanket("WeatherBeeta Lite", 100, true)];
        let liners = vec![Liner {
            id: Uuid::new_v4(),
            name: "Fleece Liner".to_string(),
            grams: 100,
            color: "#E8D4C4".to_string(),
            paired_with_blanket_id: Some(blankets[0].id),
        }];
        let rec = get_recommendation(
            &baseline_weather(),
            &baseline_horse(),
            &Settings::default(),
            &blankets,
            &liners,
        );
        assert_eq!(rec.recommended_liner.as_ref().unwrap().name, "Fleece Liner");
        assert!(rec.reasoning.contains("Fleece Liner"));
        assert_eq!(rec.combined_grams, 200);

        let mut settings = Settings::default();
        settings.liner.include_in_recommendations = false;
        let rec = get_recommendation(
            &baseline_weather(),
            &baseline_horse(),
            &settings,
            &blankets,
            &liners,
        );
        assert!(rec.recommended_liner.is_none());
        assert!(!rec.reasoning.contains("Fleece Liner"));
    }
}
