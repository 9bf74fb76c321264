//! Business logic services

pub mod blankets;
pub mod digest;
pub mod horses;
pub mod liners;
pub mod outlook;
pub mod recommendation;
pub mod settings;
pub mod weather;

pub use blankets::BlanketService;
pub use horses::HorseService;
pub use liners::LinerService;
pub use recommendation::RecommendationService;
pub use settings::SettingsService;
pub use weather::WeatherService;
