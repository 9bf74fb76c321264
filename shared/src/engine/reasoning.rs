//! Natural-language reasoning for recommendations
//!
//! Every clause branches on the same state the engine computed, so the
//! explanation can never contradict the recommendation.

use crate::models::{BlanketWeight, HorseProfile, Liner, Settings, ShelterAccess, WeatherReading};

/// Assemble the period-joined explanation for a recommendation
pub fn generate_reasoning(
    weather: &WeatherReading,
    horse: &HorseProfile,
    settings: &Settings,
    weight: BlanketWeight,
    effective_temp: i32,
    needs_neck_rug: bool,
    liner: Option<&Liner>,
) -> String {
    let mut parts: Vec<String> = Vec::new();
    let coat_level = if horse.coat_growth < 33 {
        "light"
    } else if horse.coat_growth < 66 {
        "medium"
    } else {
        "heavy"
    };
    let coat_protection = match coat_level {
        "heavy" => "excellent",
        "medium" => "moderate",
        _ => "minimal",
    };

    match weight {
        BlanketWeight::None => {
            if effective_temp >= 60 {
                parts.push(format!(
                    "At {}°F, it's warm enough that {} will be comfortable without a blanket",
                    effective_temp, horse.name
                ));
            } else if effective_temp >= 50 {
                parts.push(format!(
                    "The mild {}°F temperature is comfortable for {}'s {} coat",
                    effective_temp, horse.name, coat_level
                ));
            } else {
                parts.push(format!(
                    "At {}°F, {}'s {} winter coat provides {} natural insulation",
                    effective_temp, horse.name, coat_level, coat_protection
                ));
            }
        }
        BlanketWeight::Sheet => {
            if weather.precip_chance > 40 {
                parts.push(format!(
                    "With {}% chance of precipitation, a rain sheet will keep {} dry",
                    weather.precip_chance, horse.name
                ));
            } else {
                parts.push(format!(
                    "A light sheet will provide just enough coverage for {} in these conditions",
                    horse.name
                ));
            }
        }
        BlanketWeight::Light => {
            parts.push(format!(
                "At {}°F, a lightweight blanket will supplement {}'s natural coat",
                effective_temp, horse.name
            ));
            if weather.wind > 10 {
                parts.push(format!(
                    "The {} mph winds make the extra layer helpful",
                    weather.wind
                ));
            }
        }
        BlanketWeight::Medium => {
            parts.push(format!(
                "The {}°F temperature calls for medium-weight coverage",
                effective_temp
            ));
            if coat_level == "light" || horse.is_clipped {
                let coat = if horse.is_clipped {
                    "clipped coat"
                } else {
                    "lighter coat"
                };
                parts.push(format!("{}'s {} needs the extra insulation", horse.name, coat));
            } else if weather.wind > 15 {
                parts.push(format!("Wind at {} mph makes it feel colder", weather.wind));
            }
        }
        BlanketWeight::Heavy => {
            if effective_temp < 10 {
                parts.push(format!(
                    "With temperatures at {}°F, heavyweight protection is essential for {}",
                    effective_temp, horse.name
                ));
            } else {
                parts.push(format!(
                    "The cold {}°F conditions require heavyweight blanketing",
                    effective_temp
                ));
            }
            if weather.wind > 15 {
                parts.push(format!(
                    "Strong {} mph winds increase the chill factor",
                    weather.wind
                ));
            }
        }
    }

    if horse.is_clipped && weight != BlanketWeight::None && weight != BlanketWeight::Sheet {
        parts.push(
            "Clipped horses need extra warmth to compensate for reduced natural insulation"
                .to_string(),
        );
    }

    if horse.is_senior {
        parts.push("As a senior, staying warm helps maintain comfort and health".to_string());
    }

    if horse.is_thin_keeper && weight != BlanketWeight::None {
        parts.push("Extra coverage helps hard keepers conserve body heat".to_string());
    }

    if horse.is_foal && weight != BlanketWeight::None {
        parts.push(
            "Foals under 6 months need extra warmth as their thermoregulation is still developing"
                .to_string(),
        );
    }

    match horse.shelter_access {
        ShelterAccess::Stall => {
            if weight != BlanketWeight::None {
                parts.push(
                    "Stall protection means less coverage is needed compared to turnout"
                        .to_string(),
                );
            }
        }
        ShelterAccess::None if weight != BlanketWeight::None => {
            if weather.precip_chance > 15 {
                parts.push(
                    "With no shelter access, waterproof protection is especially important"
                        .to_string(),
                );
            } else if weather.wind > 12 {
                parts.push("Without shelter, extra wind protection is needed".to_string());
            } else {
                parts.push("No shelter means extra coverage helps maintain body heat".to_string());
            }
        }
        ShelterAccess::Trees if weight != BlanketWeight::None => {
            if weather.precip_chance > 20 {
                parts.push(
                    "Trees provide minimal rain protection, so waterproof coverage is recommended"
                        .to_string(),
                );
            } else if weather.wind > 15 {
                parts.push("Trees offer some wind break but additional protection helps".to_string());
            }
        }
        _ => {}
    }

    if weather.precip_chance > 30 && settings.rain_priority && weight != BlanketWeight::None {
        parts.push("Make sure to use a waterproof option with rain in the forecast".to_string());
    }

    if needs_neck_rug {
        if weather.wind > 20 {
            parts.push("Add a neck rug for protection against the strong winds".to_string());
        } else {
            parts.push(
                "A neck rug will provide extra warmth in these frigid temperatures".to_string(),
            );
        }
    }

    if let Some(liner) = liner {
        parts.push(format!(
            "The {} adds {}g of extra warmth",
            liner.name, liner.grams
        ));
    }

    format!("{}.", parts.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn horse(name: &str) -> HorseProfile {
        HorseProfile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            breed: None,
            age: None,
            coat_growth: 50,
            cold_tolerance: 50,
            is_clipped: false,
            is_senior: false,
            is_thin_keeper: false,
            is_foal: false,
            shelter_access: ShelterAccess::RunIn,
        }
    }

    fn weather(temp: i32, wind: i32, precip: i32) -> WeatherReading {
        WeatherReading {
            temp,
            feels_like: temp,
            wind,
            precip_chance: precip,
            tonight_low: temp - 10,
            ..WeatherReading::default()
        }
    }

    #[test]
    fn test_always_ends_with_period_and_is_nonempty() {
        let text = generate_reasoning(
            &weather(65, 5, 0),
            &horse("Tucker"),
            &Settings::default(),
            BlanketWeight::None,
            65,
            false,
            None,
        );
        assert!(text.ends_with('.'));
        assert!(text.contains("Tucker"));
    }

    #[test]
    fn test_never_mentions_waterproof_when_rain_priority_off() {
        let mut settings = Settings::default();
        settings.rain_priority = false;
        let text = generate_reasoning(
            &weather(35, 5, 80),
            &horse("Tucker"),
            &settings,
            BlanketWeight::Light,
            35,
            false,
            None,
        );
        assert!(!text.contains("waterproof option"));
    }

    #[test]
    fn test_waterproof_note_for_rain() {
        let text = generate_reasoning(
            &weather(35, 5, 45),
            &horse("Tucker"),
            &Settings::default(),
            BlanketWeight::Light,
            35,
            false,
            None,
        );
        assert!(text.contains("waterproof option"));
    }

    #[test]
    fn test_clipped_clause_skipped_for_sheet() {
        let mut clipped = horse("Tucker");
        clipped.is_clipped = true;
        let text = generate_reasoning(
            &weather(55, 5, 60),
            &clipped,
            &Settings::default(),
            BlanketWeight::Sheet,
            55,
            false,
            None,
        );
        assert!(!text.contains("Clipped horses"));
        assert!(text.contains("rain sheet"));
    }

    #[test]
    fn test_senior_clause_appears_even_without_blanket() {
        let mut senior = horse("Tucker");
        senior.is_senior = true;
        let text = generate_reasoning(
            &weather(65, 5, 0),
            &senior,
            &Settings::default(),
            BlanketWeight::None,
            65,
            false,
            None,
        );
        assert!(text.contains("senior"));
    }

    #[test]
    fn test_neck_rug_wording_tracks_wind() {
        let windy = generate_reasoning(
            &weather(20, 25, 0),
            &horse("Tucker"),
            &Settings::default(),
            BlanketWeight::Medium,
            20,
            true,
            None,
        );
        assert!(windy.contains("strong winds"));

        let frigid = generate_reasoning(
            &weather(5, 5, 0),
            &horse("Tucker"),
            &Settings::default(),
            BlanketWeight::Heavy,
            5,
            true,
            None,
        );
        assert!(frigid.contains("frigid"));
    }

    #[test]
    fn test_liner_clause_names_liner_and_grams() {
        let liner = Liner {
            id: Uuid::new_v4(),
            name: "Fleece Liner".to_string(),
            grams: 100,
            color: "#E8D4C4".to_string(),
            paired_with_blanket_id: None,
        };
        let text = generate_reasoning(
            &weather(25, 5, 0),
            &horse("Tucker"),
            &Settings::default(),
            BlanketWeight::Medium,
            25,
            false,
            Some(&liner),
        );
        assert!(text.contains("The Fleece Liner adds 100g of extra warmth"));
    }

    #[test]
    fn test_no_shelter_prefers_rain_over_wind_clause() {
        let mut exposed = horse("Tucker");
        exposed.shelter_access = ShelterAccess::None;
        let text = generate_reasoning(
            &weather(25, 20, 20),
            &exposed,
            &Settings::default(),
            BlanketWeight::Medium,
            25,
            false,
            None,
        );
        // precip 20 > 15 wins over the wind clause
        assert!(text.contains("no shelter access"));
        assert!(!text.contains("Without shelter, extra wind"));
    }

    #[test]
    fn test_clipped_medium_uses_clipped_wording() {
        let mut clipped = horse("Tucker");
        clipped.is_clipped = true;
        let text = generate_reasoning(
            &weather(25, 5, 0),
            &clipped,
            &Settings::default(),
            BlanketWeight::Medium,
            25,
            false,
            None,
        );
        assert!(text.contains("clipped coat needs the extra insulation"));
    }
}
