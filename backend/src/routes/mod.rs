//! Route definitions for the BlanketWise API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Weather lookups
        .nest("/weather", weather_routes())
        // Horse management
        .nest("/horses", horse_routes())
        // Blanket inventory
        .nest("/blankets", blanket_routes())
        // Liner inventory
        .nest("/liners", liner_routes())
        // Owner settings
        .nest("/settings", settings_routes())
        // Stateless recommendation preview
        .nest("/recommendations", recommendation_routes())
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::get_current_weather))
        .route("/locations", get(handlers::search_locations))
}

/// Horse management routes
fn horse_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_horses).post(handlers::create_horse))
        .route(
            "/:horse_id",
            get(handlers::get_horse)
                .put(handlers::update_horse)
                .delete(handlers::delete_horse),
        )
        // Weather-driven views for a single horse
        .route("/:horse_id/recommendation", get(handlers::get_horse_recommendation))
        .route("/:horse_id/schedule", get(handlers::get_horse_schedule))
        .route("/:horse_id/outlook", get(handlers::get_horse_outlook))
        .route("/:horse_id/digest", get(handlers::get_horse_digest))
}

/// Blanket inventory routes
fn blanket_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_blankets).post(handlers::create_blanket))
        .route(
            "/:blanket_id",
            get(handlers::get_blanket)
                .put(handlers::update_blanket)
                .delete(handlers::delete_blanket),
        )
}

/// Liner inventory routes
fn liner_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_liners).post(handlers::create_liner))
        .route(
            "/:liner_id",
            get(handlers::get_liner)
                .put(handlers::update_liner)
                .delete(handlers::delete_liner),
        )
}

/// Owner settings routes
fn settings_routes() -> Router<AppState> {
    Router::new().route("/", get(handlers::get_settings).put(handlers::update_settings))
}

/// Recommendation preview routes
fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/preview", post(handlers::preview_recommendation))
}
