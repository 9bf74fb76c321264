//! Liner inventory models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A liner layered under a blanket for extra insulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Liner {
    pub id: Uuid,
    pub name: String,
    #[serde(default = "default_grams")]
    pub grams: i32,
    #[serde(default = "default_color")]
    pub color: String,
    /// Pairing is a plain reference; deleting the blanket leaves it dangling
    #[serde(default)]
    pub paired_with_blanket_id: Option<Uuid>,
}

fn default_grams() -> i32 {
    100
}

fn default_color() -> String {
    "#E8D4C4".to_string()
}
