//! In-memory data store
//!
//! Rows live in insertion-ordered vectors behind tokio RwLocks, with a
//! single settings row created at construction. Methods that touch more
//! than one collection take locks in a fixed order (horses, blankets,
//! liners, settings) to stay deadlock free.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    Blanket, HorseProfile, Liner, LinerSettings, NotificationSettings, Settings, ShelterAccess,
};

/// Stored row for a horse profile
#[derive(Debug, Clone)]
pub struct HorseRow {
    pub id: Uuid,
    pub name: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub coat_growth: i32,
    pub cold_tolerance: i32,
    pub is_clipped: bool,
    pub is_senior: bool,
    pub is_thin_keeper: bool,
    pub is_foal: bool,
    pub shelter_access: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HorseRow> for HorseProfile {
    fn from(row: HorseRow) -> Self {
        HorseProfile {
            id: row.id,
            name: row.name,
            breed: row.breed,
            age: row.age,
            coat_growth: row.coat_growth,
            cold_tolerance: row.cold_tolerance,
            is_clipped: row.is_clipped,
            is_senior: row.is_senior,
            is_thin_keeper: row.is_thin_keeper,
            is_foal: row.is_foal,
            shelter_access: shelter_from_str(&row.shelter_access),
        }
    }
}

/// Stored row for a blanket
#[derive(Debug, Clone)]
pub struct BlanketRow {
    pub id: Uuid,
    pub name: String,
    pub grams: i32,
    pub waterproof: bool,
    pub color: String,
    pub currently_on_horse_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlanketRow> for Blanket {
    fn from(row: BlanketRow) -> Self {
        Blanket {
            id: row.id,
            name: row.name,
            grams: row.grams,
            waterproof: row.waterproof,
            color: row.color,
            currently_on_horse_id: row.currently_on_horse_id,
        }
    }
}

/// Stored row for a liner
#[derive(Debug, Clone)]
pub struct LinerRow {
    pub id: Uuid,
    pub name: String,
    pub grams: i32,
    pub color: String,
    pub paired_with_blanket_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LinerRow> for Liner {
    fn from(row: LinerRow) -> Self {
        Liner {
            id: row.id,
            name: row.name,
            grams: row.grams,
            color: row.color,
            paired_with_blanket_id: row.paired_with_blanket_id,
        }
    }
}

/// Stored row for user settings, flattened to scalar columns
#[derive(Debug, Clone)]
pub struct SettingsRow {
    pub use_feels_like: bool,
    pub rain_priority: bool,
    pub temp_buffer: i32,
    pub liner_include_in_recommendations: bool,
    pub liner_show_combined_weight: bool,
    pub notifications_blanket_change: bool,
    pub notifications_severe_weather: bool,
    pub notifications_daily_summary: bool,
    pub show_confidence: bool,
    pub current_blanket_id: Option<Uuid>,
    pub location_lat: Option<Decimal>,
    pub location_lng: Option<Decimal>,
    pub location_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for SettingsRow {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            use_feels_like: true,
            rain_priority: true,
            temp_buffer: 0,
            liner_include_in_recommendations: true,
            liner_show_combined_weight: true,
            notifications_blanket_change: true,
            notifications_severe_weather: true,
            notifications_daily_summary: false,
            show_confidence: true,
            current_blanket_id: None,
            location_lat: None,
            location_lng: None,
            location_name: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<SettingsRow> for Settings {
    fn from(row: SettingsRow) -> Self {
        Settings {
            use_feels_like: row.use_feels_like,
            rain_priority: row.rain_priority,
            temp_buffer: row.temp_buffer,
            liner: LinerSettings {
                include_in_recommendations: row.liner_include_in_recommendations,
                show_combined_weight: row.liner_show_combined_weight,
            },
            notifications: NotificationSettings {
                blanket_change: row.notifications_blanket_change,
                severe_weather: row.notifications_severe_weather,
                daily_summary: row.notifications_daily_summary,
            },
            show_confidence: row.show_confidence,
            current_blanket_id: row.current_blanket_id,
            location_lat: row.location_lat,
            location_lng: row.location_lng,
            location_name: row.location_name,
        }
    }
}

/// Convert ShelterAccess to its stored string
pub fn shelter_to_str(shelter: ShelterAccess) -> &'static str {
    match shelter {
        ShelterAccess::Stall => "stall",
        ShelterAccess::RunIn => "run-in",
        ShelterAccess::Trees => "trees",
        ShelterAccess::None => "none",
    }
}

/// Convert a stored string to ShelterAccess
pub fn shelter_from_str(s: &str) -> ShelterAccess {
    match s {
        "stall" => ShelterAccess::Stall,
        "trees" => ShelterAccess::Trees,
        "none" => ShelterAccess::None,
        _ => ShelterAccess::RunIn,
    }
}

/// In-memory store for all application data
#[derive(Debug)]
pub struct MemoryStore {
    horses: RwLock<Vec<HorseRow>>,
    blankets: RwLock<Vec<BlanketRow>>,
    liners: RwLock<Vec<LinerRow>>,
    settings: RwLock<SettingsRow>,
}

impl MemoryStore {
    /// Create an empty store with default settings
    pub fn new() -> Self {
        Self {
            horses: RwLock::new(Vec::new()),
            blankets: RwLock::new(Vec::new()),
            liners: RwLock::new(Vec::new()),
            settings: RwLock::new(SettingsRow::default()),
        }
    }

    /// Create a store seeded with the starter horse and inventory
    pub fn seeded() -> Self {
        let now = Utc::now();
        let tucker_id = Uuid::new_v4();

        let horses = vec![HorseRow {
            id: tucker_id,
            name: "Tucker".to_string(),
            breed: Some("Quarter Horse".to_string()),
            age: Some(22),
            coat_growth: 50,
            cold_tolerance: 50,
            is_clipped: false,
            is_senior: true,
            is_thin_keeper: false,
            is_foal: false,
            shelter_access: "run-in".to_string(),
            created_at: now,
            updated_at: now,
        }];

        let blankets = vec![
            BlanketRow {
                id: Uuid::new_v4(),
                name: "Dover Heavyweight".to_string(),
                grams: 360,
                waterproof: true,
                color: "#B8D4E3".to_string(),
                currently_on_horse_id: None,
                created_at: now,
                updated_at: now,
            },
            BlanketRow {
                id: Uuid::new_v4(),
                name: "Rambo Medium".to_string(),
                grams: 200,
                waterproof: true,
                color: "#D4A84B".to_string(),
                currently_on_horse_id: Some(tucker_id),
                created_at: now,
                updated_at: now,
            },
            BlanketRow {
                id: Uuid::new_v4(),
                name: "WeatherBeeta Lite".to_string(),
                grams: 100,
                waterproof: false,
                color: "#9CAF88".to_string(),
                currently_on_horse_id: None,
                created_at: now,
                updated_at: now,
            },
            BlanketRow {
                id: Uuid::new_v4(),
                name: "Rain Sheet".to_string(),
                grams: 0,
                waterproof: true,
                color: "#A0522D".to_string(),
                currently_on_horse_id: None,
                created_at: now,
                updated_at: now,
            },
        ];

        let liners = vec![
            LinerRow {
                id: Uuid::new_v4(),
                name: "Fleece Liner".to_string(),
                grams: 100,
                color: "#E8D4C4".to_string(),
                paired_with_blanket_id: None,
                created_at: now,
                updated_at: now,
            },
            LinerRow {
                id: Uuid::new_v4(),
                name: "Quilted Liner".to_string(),
                grams: 200,
                color: "#C9B8A8".to_string(),
                paired_with_blanket_id: None,
                created_at: now,
                updated_at: now,
            },
        ];

        Self {
            horses: RwLock::new(horses),
            blankets: RwLock::new(blankets),
            liners: RwLock::new(liners),
            settings: RwLock::new(SettingsRow::default()),
        }
    }

    // ==== Horses

    pub async fn list_horses(&self) -> Vec<HorseRow> {
        self.horses.read().await.clone()
    }

    pub async fn get_horse(&self, id: Uuid) -> Option<HorseRow> {
        self.horses.read().await.iter().find(|h| h.id == id).cloned()
    }

    pub async fn insert_horse(&self, row: HorseRow) -> HorseRow {
        let mut horses = self.horses.write().await;
        tracing::debug!("Inserted horse {}", row.id);
        horses.push(row.clone());
        row
    }

    pub async fn update_horse<F>(&self, id: Uuid, apply: F) -> Option<HorseRow>
    where
        F: FnOnce(&mut HorseRow),
    {
        let mut horses = self.horses.write().await;
        let row = horses.iter_mut().find(|h| h.id == id)?;
        apply(row);
        row.updated_at = Utc::now();
        tracing::debug!("Updated horse {}", id);
        Some(row.clone())
    }

    /// Delete a horse, unassigning any blankets it was wearing. A settings
    /// selection pointing at one of those blankets is cleared as well.
    pub async fn delete_horse(&self, id: Uuid) -> bool {
        let mut horses = self.horses.write().await;
        let mut blankets = self.blankets.write().await;
        let mut settings = self.settings.write().await;

        let before = horses.len();
        horses.retain(|h| h.id != id);
        if horses.len() == before {
            return false;
        }

        let now = Utc::now();
        let mut unassigned = Vec::new();
        for blanket in blankets.iter_mut() {
            if blanket.currently_on_horse_id == Some(id) {
                blanket.currently_on_horse_id = None;
                blanket.updated_at = now;
                unassigned.push(blanket.id);
            }
        }

        if settings
            .current_blanket_id
            .map(|current| unassigned.contains(&current))
            .unwrap_or(false)
        {
            settings.current_blanket_id = None;
            settings.updated_at = now;
        }

        tracing::debug!("Deleted horse {}", id);
        true
    }

    // ==== Blankets

    pub async fn list_blankets(&self) -> Vec<BlanketRow> {
        self.blankets.read().await.clone()
    }

    pub async fn get_blanket(&self, id: Uuid) -> Option<BlanketRow> {
        self.blankets
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    pub async fn insert_blanket(&self, row: BlanketRow) -> BlanketRow {
        let mut blankets = self.blankets.write().await;
        tracing::debug!("Inserted blanket {}", row.id);
        blankets.push(row.clone());
        row
    }

    pub async fn update_blanket<F>(&self, id: Uuid, apply: F) -> Option<BlanketRow>
    where
        F: FnOnce(&mut BlanketRow),
    {
        let mut blankets = self.blankets.write().await;
        let row = blankets.iter_mut().find(|b| b.id == id)?;
        apply(row);
        row.updated_at = Utc::now();
        tracing::debug!("Updated blanket {}", id);
        Some(row.clone())
    }

    /// Delete a blanket, clearing a settings selection that pointed at it.
    /// Liner pairings keep their blanket id; a dangling pair never matches.
    pub async fn delete_blanket(&self, id: Uuid) -> bool {
        let mut blankets = self.blankets.write().await;
        let mut settings = self.settings.write().await;

        let before = blankets.len();
        blankets.retain(|b| b.id != id);
        if blankets.len() == before {
            return false;
        }

        if settings.current_blanket_id == Some(id) {
            settings.current_blanket_id = None;
            settings.updated_at = Utc::now();
        }

        tracing::debug!("Deleted blanket {}", id);
        true
    }

    // ==== Liners

    pub async fn list_liners(&self) -> Vec<LinerRow> {
        self.liners.read().await.clone()
    }

    pub async fn get_liner(&self, id: Uuid) -> Option<LinerRow> {
        self.liners.read().await.iter().find(|l| l.id == id).cloned()
    }

    pub async fn insert_liner(&self, row: LinerRow) -> LinerRow {
        let mut liners = self.liners.write().await;
        tracing::debug!("Inserted liner {}", row.id);
        liners.push(row.clone());
        row
    }

    pub async fn update_liner<F>(&self, id: Uuid, apply: F) -> Option<LinerRow>
    where
        F: FnOnce(&mut LinerRow),
    {
        let mut liners = self.liners.write().await;
        let row = liners.iter_mut().find(|l| l.id == id)?;
        apply(row);
        row.updated_at = Utc::now();
        tracing::debug!("Updated liner {}", id);
        Some(row.clone())
    }

    pub async fn delete_liner(&self, id: Uuid) -> bool {
        let mut liners = self.liners.write().await;
        let before = liners.len();
        liners.retain(|l| l.id != id);
        if liners.len() < before {
            tracing::debug!("Deleted liner {}", id);
            true
        } else {
            false
        }
    }

    // ==== Settings

    pub async fn get_settings(&self) -> SettingsRow {
        self.settings.read().await.clone()
    }

    pub async fn update_settings<F>(&self, apply: F) -> SettingsRow
    where
        F: FnOnce(&mut SettingsRow),
    {
        let mut settings = self.settings.write().await;
        apply(&mut settings);
        settings.updated_at = Utc::now();
        tracing::debug!("Updated settings");
        settings.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
