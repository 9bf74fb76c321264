//! Blanket inventory models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a blanket, derived from horse assignment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BlanketStatus {
    InUse,
    Available,
}

/// A blanket in the user's inventory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Blanket {
    pub id: Uuid,
    pub name: String,
    /// Fill weight in grams; 0 marks a rain sheet
    #[serde(default)]
    pub grams: i32,
    #[serde(default = "default_waterproof")]
    pub waterproof: bool,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub currently_on_horse_id: Option<Uuid>,
}

impl Blanket {
    /// In use when assigned to a horse, otherwise available
    pub fn status(&self) -> BlanketStatus {
        if self.currently_on_horse_id.is_some() {
            BlanketStatus::InUse
        } else {
            BlanketStatus::Available
        }
    }
}

fn default_waterproof() -> bool {
    true
}

fn default_color() -> String {
    "#9CAF88".to_string()
}
