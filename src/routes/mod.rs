pub mod cache;
pub mod extract;
pub mod health;
pub mod preferences;
pub mod quiz;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/quiz/daily", get(quiz::get_daily_quiz))
        .route("/api/quiz/daily/status", get(quiz::get_quiz_status))
        .route("/api/quiz/daily/submit", post(quiz::submit_daily_quiz))
        .route(
            "/api/preferences",
            get(preferences::get_preferences).put(preferences::update_preferences),
        )
        .route(
            "/api/cache",
            get(cache::get_cache_stats).delete(cache::clear_cache),
        )
        .with_state(state)
}
