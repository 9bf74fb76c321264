//! Recommendation and schedule output models

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Blanket, Liner};

/// Blanket weight classes, ordered by severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum BlanketWeight {
    None,
    Sheet,
    Light,
    Medium,
    Heavy,
}

impl BlanketWeight {
    /// Nominal fill weight targeted for each class
    pub fn grams_needed(&self) -> i32 {
        match self {
            BlanketWeight::None | BlanketWeight::Sheet => 0,
            BlanketWeight::Light => 100,
            BlanketWeight::Medium => 200,
            BlanketWeight::Heavy => 300,
        }
    }

    /// Compact label for forecast chips and digests
    pub fn short_label(&self) -> &'static str {
        match self {
            BlanketWeight::None => "None",
            BlanketWeight::Sheet => "Sheet",
            BlanketWeight::Light => "Light",
            BlanketWeight::Medium => "Med",
            BlanketWeight::Heavy => "Heavy",
        }
    }
}

impl fmt::Display for BlanketWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlanketWeight::None => "none",
            BlanketWeight::Sheet => "sheet",
            BlanketWeight::Light => "light",
            BlanketWeight::Medium => "medium",
            BlanketWeight::Heavy => "heavy",
        };
        write!(f, "{}", name)
    }
}

/// Engine output for one weather reading; recomputed on every call and
/// never persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub weight_needed: BlanketWeight,
    pub grams_needed: i32,
    pub recommended_blanket: Option<Blanket>,
    pub recommended_liner: Option<Liner>,
    pub combined_grams: i32,
    pub confidence: i32,
    pub reasoning: String,
    pub needs_waterproof: bool,
    pub needs_neck_rug: bool,
    pub effective_temp: i32,
}

/// The four schedule blocks of a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeBlock {
    Morning,
    Afternoon,
    Evening,
    Overnight,
}

impl TimeBlock {
    /// Block containing the given wall-clock hour (0-23)
    pub fn for_hour(hour: u32) -> TimeBlock {
        match hour {
            6..=11 => TimeBlock::Morning,
            12..=17 => TimeBlock::Afternoon,
            18..=20 => TimeBlock::Evening,
            _ => TimeBlock::Overnight,
        }
    }
}

/// One entry of the daily blanketing schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub label: String,
    pub icon_type: TimeBlock,
    pub temp: i32,
    pub feels_like: i32,
    pub current: bool,
    pub recommendation: BlanketWeight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_needed_table() {
        assert_eq!(BlanketWeight::None.grams_needed(), 0);
        assert_eq!(BlanketWeight::Sheet.grams_needed(), 0);
        assert_eq!(BlanketWeight::Light.grams_needed(), 100);
        assert_eq!(BlanketWeight::Medium.grams_needed(), 200);
        assert_eq!(BlanketWeight::Heavy.grams_needed(), 300);
    }

    #[test]
    fn test_weight_severity_ordering() {
        assert!(BlanketWeight::None < BlanketWeight::Sheet);
        assert!(BlanketWeight::Sheet < BlanketWeight::Light);
        assert!(BlanketWeight::Light < BlanketWeight::Medium);
        assert!(BlanketWeight::Medium < BlanketWeight::Heavy);
    }

    #[test]
    fn test_weight_wire_names() {
        assert_eq!(
            serde_json::to_string(&BlanketWeight::Heavy).unwrap(),
            "\"heavy\""
        );
        assert_eq!(BlanketWeight::Medium.to_string(), "medium");
        assert_eq!(BlanketWeight::Medium.short_label(), "Med");
    }

    #[test]
    fn test_time_block_for_hour() {
        assert_eq!(TimeBlock::for_hour(6), TimeBlock::Morning);
        assert_eq!(TimeBlock::for_hour(11), TimeBlock::Morning);
        assert_eq!(TimeBlock::for_hour(12), TimeBlock::Afternoon);
        assert_eq!(TimeBlock::for_hour(17), TimeBlock::Afternoon);
        assert_eq!(TimeBlock::for_hour(18), TimeBlock::Evening);
        assert_eq!(TimeBlock::for_hour(20), TimeBlock::Evening);
        assert_eq!(TimeBlock::for_hour(21), TimeBlock::Overnight);
        assert_eq!(TimeBlock::for_hour(0), TimeBlock::Overnight);
        assert_eq!(TimeBlock::for_hour(5), TimeBlock::Overnight);
    }
}
