//! Daily time-blocked schedule generation

use crate::engine::get_recommendation;
use crate::models::{
    Blanket, HorseProfile, Liner, ScheduleEntry, Settings, TimeBlock, WeatherReading,
};

/// Build the four-block daily schedule by deriving a synthetic reading for
/// each time of day and running the engine against it.
///
/// Wind, precipitation, and condition carry over from the base reading;
/// only the temperatures shift by fixed offsets. `current_hour` (0-23)
/// decides which block is flagged as current, so callers control the clock.
pub fn get_daily_schedule(
    weather: &WeatherReading,
    horse: &HorseProfile,
    settings: &Settings,
    blankets: &[Blanket],
    liners: &[Liner],
    current_hour: u32,
) -> Vec<ScheduleEntry> {
    let current_block = TimeBlock::for_hour(current_hour);

    let blocks = [
        (
            "Morning (6 AM)",
            TimeBlock::Morning,
            weather.tonight_low + 5,
            weather.tonight_low + 2,
        ),
        (
            "Afternoon (12 PM)",
            TimeBlock::Afternoon,
            weather.temp,
            weather.feels_like,
        ),
        (
            "Evening (6 PM)",
            TimeBlock::Evening,
            weather.temp - 6,
            weather.feels_like - 8,
        ),
        (
            "Overnight",
            TimeBlock::Overnight,
            weather.tonight_low,
            weather.tonight_low - 4,
        ),
    ];

    blocks
        .into_iter()
        .map(|(label, block, temp, feels_like)| {
            let block_weather = WeatherReading {
                temp,
                feels_like,
                ..*weather
            };
            let rec = get_recommendation(&block_weather, horse, settings, blankets, liners);
            ScheduleEntry {
                label: label.to_string(),
                icon_type: block,
                temp,
                feels_like,
                current: block == current_block,
                recommendation: rec.weight_needed,
            }
        })
        .collect()
}
