//! Horse profile models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shelter available to a horse during turnout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShelterAccess {
    Stall,
    /// Baseline turnout situation
    #[default]
    RunIn,
    Trees,
    None,
}

impl ShelterAccess {
    /// Additive threshold shift in °F; less shelter means blanketing at
    /// higher temperatures
    pub fn threshold_adjustment(&self) -> f64 {
        match self {
            ShelterAccess::Stall => -8.0,
            ShelterAccess::RunIn => 0.0,
            ShelterAccess::Trees => 3.0,
            ShelterAccess::None => 5.0,
        }
    }

    /// Precipitation chance above which a waterproof layer is required.
    /// 100 is an unreachable sentinel for stalled horses.
    pub fn waterproof_precip_threshold(&self) -> i32 {
        match self {
            ShelterAccess::Stall => 100,
            ShelterAccess::RunIn => 30,
            ShelterAccess::Trees => 20,
            ShelterAccess::None => 15,
        }
    }

    /// Wind speed in mph above which a neck rug is recommended.
    /// 100 is an unreachable sentinel for stalled horses.
    pub fn neck_rug_wind_threshold(&self) -> i32 {
        match self {
            ShelterAccess::Stall => 100,
            ShelterAccess::RunIn => 20,
            ShelterAccess::Trees => 15,
            ShelterAccess::None => 12,
        }
    }
}

/// A horse profile with the attributes that drive blanketing decisions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HorseProfile {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    /// 0 = clipped short, 100 = full winter coat
    #[serde(default = "default_midpoint")]
    pub coat_growth: i32,
    /// 0 = sensitive to cold, 100 = hardy
    #[serde(default = "default_midpoint")]
    pub cold_tolerance: i32,
    #[serde(default)]
    pub is_clipped: bool,
    #[serde(default)]
    pub is_senior: bool,
    #[serde(default)]
    pub is_thin_keeper: bool,
    #[serde(default)]
    pub is_foal: bool,
    #[serde(default)]
    pub shelter_access: ShelterAccess,
}

fn default_midpoint() -> i32 {
    50
}
