//! Confidence scoring for recommendations

use crate::engine::{InventoryMatch, WeightThresholds};
use crate::models::WeatherReading;

/// Score how certain the recommendation is, from 50 to 99.
///
/// Starts at 100 and deducts independent penalties: proximity to a weight
/// threshold, precipitation uncertainty (peaking near 50%), gusty winds, a
/// poor grams match, a missing waterproof option, and a wide gap between
/// actual and feels-like temperature.
pub fn calculate_confidence(
    effective_temp: i32,
    thresholds: &WeightThresholds,
    weather: &WeatherReading,
    grams_needed: i32,
    selection: &InventoryMatch,
    needs_waterproof: bool,
) -> i32 {
    let mut confidence = 100;

    // 1. Threshold proximity: a reading near a cutoff could flip the class
    let temp = f64::from(effective_temp);
    let boundaries = [
        thresholds.light_max,
        thresholds.medium_max,
        thresholds.heavy_max,
    ];
    let min_distance = boundaries
        .iter()
        .map(|bound| (temp - bound).abs())
        .fold(f64::INFINITY, f64::min);
    if min_distance <= 2.0 {
        confidence -= 18;
    } else if min_distance <= 4.0 {
        confidence -= 12;
    } else if min_distance <= 6.0 {
        confidence -= 6;
    }

    // 2. Precipitation uncertainty, worst at a 50% chance
    let precip = weather.precip_chance;
    if (35..=65).contains(&precip) {
        let distance_from_50 = f64::from((precip - 50).abs());
        let penalty = (10.0 - (distance_from_50 / 15.0) * 5.0).round() as i32;
        confidence -= penalty;
    } else if (20..35).contains(&precip) || (66..=80).contains(&precip) {
        confidence -= 3;
    }

    // 3. High winds are gusty and unpredictable
    if weather.wind > 25 {
        confidence -= 8;
    } else if weather.wind > 18 {
        confidence -= 5;
    } else if weather.wind > 12 {
        confidence -= 2;
    }

    // 4. Blanket match quality against the ideal fill weight
    let recommended_grams = if selection.combined_grams > 0 {
        Some(selection.combined_grams)
    } else {
        selection
            .blanket
            .as_ref()
            .map(|blanket| blanket.grams)
            .filter(|grams| *grams > 0)
    };
    if grams_needed > 0 {
        if let Some(grams) = recommended_grams {
            let diff = (grams - grams_needed).abs();
            if diff > 150 {
                confidence -= 10;
            } else if diff > 100 {
                confidence -= 7;
            } else if diff > 50 {
                confidence -= 4;
            } else if diff > 25 {
                confidence -= 2;
            }
        }
    }

    // 5. Waterproof needed but the pick is not waterproof
    let has_waterproof_match = selection
        .blanket
        .as_ref()
        .map(|blanket| blanket.waterproof)
        .unwrap_or(false);
    if needs_waterproof && !has_waterproof_match {
        confidence -= 8;
    }

    // 6. A wide temp vs feels-like gap suggests variable conditions
    let temp_diff = (weather.temp - weather.feels_like).abs();
    if temp_diff > 12 {
        confidence -= 6;
    } else if temp_diff > 8 {
        confidence -= 4;
    } else if temp_diff > 5 {
        confidence -= 2;
    }

    confidence.clamp(50, 99)
}
