//! Recommendation service wiring weather, profile, and inventory into the
//! decision engine

use std::sync::Arc;

use chrono::{Local, Timelike};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{
    Blanket, CurrentWeather, HorseProfile, Liner, Recommendation, ScheduleEntry, Settings,
};
use crate::services::digest::{build_digest, DailyDigest};
use crate::services::outlook::{build_outlook, Outlook};
use crate::services::weather::WeatherService;
use crate::store::MemoryStore;
use shared::engine::{get_daily_schedule, get_recommendation};

/// Recommendation service running the engine against live weather
#[derive(Clone)]
pub struct RecommendationService {
    store: Arc<MemoryStore>,
    weather: WeatherService,
}

/// A recommendation together with the weather it was computed from
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorseRecommendation {
    pub weather: CurrentWeather,
    pub recommendation: Recommendation,
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(store: Arc<MemoryStore>, weather: WeatherService) -> Self {
        Self { store, weather }
    }

    /// Current recommendation for a horse
    pub async fn for_horse(
        &self,
        horse_id: Uuid,
        latitude: Option<Decimal>,
        longitude: Option<Decimal>,
    ) -> AppResult<HorseRecommendation> {
        let (horse, settings, blankets, liners) = self.horse_context(horse_id).await?;
        let weather = self.weather.get_current_weather(latitude, longitude).await?;

        let recommendation = get_recommendation(
            &weather.current.reading,
            &horse,
            &settings,
            &blankets,
            &liners,
        );

        Ok(HorseRecommendation {
            weather,
            recommendation,
        })
    }

    /// Time-blocked schedule for a horse for today
    pub async fn schedule_for_horse(
        &self,
        horse_id: Uuid,
        latitude: Option<Decimal>,
        longitude: Option<Decimal>,
    ) -> AppResult<Vec<ScheduleEntry>> {
        let (horse, settings, blankets, liners) = self.horse_context(horse_id).await?;
        let weather = self.weather.get_current_weather(latitude, longitude).await?;

        Ok(get_daily_schedule(
            &weather.current.reading,
            &horse,
            &settings,
            &blankets,
            &liners,
            Local::now().hour(),
        ))
    }

    /// Seven-day outlook for a horse
    pub async fn outlook_for_horse(
        &self,
        horse_id: Uuid,
        latitude: Option<Decimal>,
        longitude: Option<Decimal>,
    ) -> AppResult<Outlook> {
        let (horse, settings, blankets, liners) = self.horse_context(horse_id).await?;
        let weather = self.weather.get_current_weather(latitude, longitude).await?;

        Ok(build_outlook(&weather, &horse, &settings, &blankets, &liners))
    }

    /// Daily digest message for a horse
    pub async fn digest_for_horse(
        &self,
        horse_id: Uuid,
        latitude: Option<Decimal>,
        longitude: Option<Decimal>,
    ) -> AppResult<DailyDigest> {
        let (horse, settings, blankets, liners) = self.horse_context(horse_id).await?;
        let weather = self.weather.get_current_weather(latitude, longitude).await?;

        Ok(build_digest(
            &weather.current.reading,
            &horse,
            &settings,
            &blankets,
            &liners,
        ))
    }

    /// Load everything the engine needs. A missing horse fails here, before
    /// any weather fetch happens.
    async fn horse_context(
        &self,
        horse_id: Uuid,
    ) -> AppResult<(HorseProfile, Settings, Vec<Blanket>, Vec<Liner>)> {
        let horse = self
            .store
            .get_horse(horse_id)
            .await
            .ok_or_else(|| AppError::NotFound("Horse".to_string()))?;
        let settings = self.store.get_settings().await;
        let blankets = self.store.list_blankets().await;
        let liners = self.store.list_liners().await;

        Ok((
            horse.into(),
            settings.into(),
            blankets.into_iter().map(Blanket::from).collect(),
            liners.into_iter().map(Liner::from).collect(),
        ))
    }
}
