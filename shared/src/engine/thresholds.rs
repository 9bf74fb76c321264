//! Temperature thresholds and weight classification

use crate::models::{BlanketWeight, HorseProfile, Settings};

/// Upper temperature bounds (°F) for each blanket weight class, compared
/// with `effective_temp <= bound`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightThresholds {
    pub light_max: f64,
    pub medium_max: f64,
    pub heavy_max: f64,
}

/// Derive per-horse temperature cutoffs from the profile and user settings.
///
/// Baseline for a midwest horse with a natural coat: no blanket above 40°F,
/// lightweight 31-40°F, medium 15-30°F, heavyweight below 15°F. Every
/// modifier shifts all three cutoffs by the same amount.
pub fn calculate_thresholds(horse: &HorseProfile, settings: &Settings) -> WeightThresholds {
    let mut light_max = 40.0;
    let mut medium_max = 30.0;
    let mut heavy_max = 14.0;

    // Thinner coat means blanketing at higher temperatures
    let coat_adjustment = (f64::from(horse.coat_growth) - 50.0) / 10.0;
    light_max -= coat_adjustment;
    medium_max -= coat_adjustment;
    heavy_max -= coat_adjustment;

    // Cold-sensitive horses need blankets sooner
    let tolerance_adjustment = (f64::from(horse.cold_tolerance) - 50.0) / 10.0;
    light_max -= tolerance_adjustment;
    medium_max -= tolerance_adjustment;
    heavy_max -= tolerance_adjustment;

    let mut bonus = 0.0;
    if horse.is_clipped {
        bonus += 15.0;
    }
    if horse.is_senior {
        bonus += 5.0;
    }
    if horse.is_thin_keeper {
        bonus += 8.0;
    }
    if horse.is_foal {
        bonus += 10.0;
    }
    bonus += horse.shelter_access.threshold_adjustment();
    bonus += f64::from(settings.temp_buffer);

    WeightThresholds {
        light_max: light_max + bonus,
        medium_max: medium_max + bonus,
        heavy_max: heavy_max + bonus,
    }
}

/// Classify the needed blanket weight for an effective temperature.
///
/// A sheet is never triggered by temperature alone; it only covers rain
/// when the temperature says no blanket.
pub fn classify_weight(
    effective_temp: i32,
    thresholds: &WeightThresholds,
    precip_chance: i32,
    rain_priority: bool,
) -> BlanketWeight {
    let temp = f64::from(effective_temp);
    if temp <= thresholds.heavy_max {
        BlanketWeight::Heavy
    } else if temp <= thresholds.medium_max {
        BlanketWeight::Medium
    } else if temp <= thresholds.light_max {
        BlanketWeight::Light
    } else if precip_chance > 40 && rain_priority {
        BlanketWeight::Sheet
    } else {
        BlanketWeight::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShelterAccess;
    use uuid::Uuid;

    fn baseline_horse() -> HorseProfile {
        HorseProfile {
            id: Uuid::new_v4(),
            name: "Tucker".to_string(),
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

    #[test]
    fn test_baseline_thresholds() {
        let thresholds = calculate_thresholds(&baseline_horse(), &Settings::default());
        assert_eq!(thresholds.light_max, 40.0);
        assert_eq!(thresholds.medium_max, 30.0);
        assert_eq!(thresholds.heavy_max, 14.0);
    }

    #[test]
    fn test_clipped_shifts_all_thresholds_up() {
        let mut horse = baseline_horse();
        horse.is_clipped = true;
        let thresholds = calculate_thresholds(&horse, &Settings::default());
        assert_eq!(thresholds.light_max, 55.0);
        assert_eq!(thresholds.medium_max, 45.0);
        assert_eq!(thresholds.heavy_max, 29.0);
    }

    #[test]
    fn test_coat_growth_adjustment_is_fractional() {
        let mut horse = baseline_horse();
        horse.coat_growth = 75;
        // (75 - 50) / 10 = 2.5°F lower cutoffs for a thicker coat
        let thresholds = calculate_thresholds(&horse, &Settings::default());
        assert_eq!(thresholds.light_max, 37.5);
        assert_eq!(thresholds.medium_max, 27.5);
        assert_eq!(thresholds.heavy_max, 11.5);
    }

    #[test]
    fn test_modifiers_stack() {
        let mut horse = baseline_horse();
        horse.is_clipped = true;
        horse.is_senior = true;
        horse.is_foal = true;
        horse.shelter_access = ShelterAccess::None;
        let mut settings = Settings::default();
        settings.temp_buffer = 5;
        // 15 + 5 + 10 + 5 + 5 = 40 on top of the baseline
        let thresholds = calculate_thresholds(&horse, &settings);
        assert_eq!(thresholds.light_max, 80.0);
        assert_eq!(thresholds.heavy_max, 54.0);
    }

    #[test]
    fn test_stall_lowers_thresholds() {
        let mut horse = baseline_horse();
        horse.shelter_access = ShelterAccess::Stall;
        let thresholds = calculate_thresholds(&horse, &Settings::default());
        assert_eq!(thresholds.light_max, 32.0);
    }

    #[test]
    fn test_classification_boundaries() {
        let thresholds = WeightThresholds {
            light_max: 40.0,
            medium_max: 30.0,
            heavy_max: 14.0,
        };
        assert_eq!(
            classify_weight(14, &thresholds, 0, true),
            BlanketWeight::Heavy
        );
        assert_eq!(
            classify_weight(15, &thresholds, 0, true),
            BlanketWeight::Medium
        );
        assert_eq!(
            classify_weight(30, &thresholds, 0, true),
            BlanketWeight::Medium
        );
        assert_eq!(
            classify_weight(31, &thresholds, 0, true),
            BlanketWeight::Light
        );
        assert_eq!(
            classify_weight(40, &thresholds, 0, true),
            BlanketWeight::Light
        );
        assert_eq!(
            classify_weight(41, &thresholds, 0, true),
            BlanketWeight::None
        );
    }

    #[test]
    fn test_sheet_requires_rain_and_priority() {
        let thresholds = WeightThresholds {
            light_max: 40.0,
            medium_max: 30.0,
            heavy_max: 14.0,
        };
        assert_eq!(
            classify_weight(45, &thresholds, 41, true),
            BlanketWeight::Sheet
        );
        // Exactly 40% is not enough
        assert_eq!(
            classify_weight(45, &thresholds, 40, true),
            BlanketWeight::None
        );
        // Rain priority off suppresses the sheet
        assert_eq!(
            classify_weight(45, &thresholds, 90, false),
            BlanketWeight::None
        );
        // Temperature-based classes win over rain
        assert_eq!(
            classify_weight(35, &thresholds, 90, true),
            BlanketWeight::Light
        );
    }
}
