use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::error::Result;
use crate::routes::extract::AppJson;
use crate::services::preferences_service::PreferencesPatch;
use crate::AppState;

#[axum::debug_handler]
pub async fn get_preferences(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.preferences_service.load()?))
}

#[axum::debug_handler]
pub async fn update_preferences(
    State(state): State<AppState>,
    AppJson(patch): AppJson<PreferencesPatch>,
) -> Result<impl IntoResponse> {
    let prefs = state.preferences_service.update(patch)?;
    Ok(Json(prefs))
}
