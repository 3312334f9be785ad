use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::dto::cache_dto::{ClearCacheQuery, ClearCacheResponse};
use crate::error::Result;
use crate::AppState;

#[axum::debug_handler]
pub async fn get_cache_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.cache_service.stats()?))
}

#[axum::debug_handler]
pub async fn clear_cache(
    State(state): State<AppState>,
    Query(query): Query<ClearCacheQuery>,
) -> Result<impl IntoResponse> {
    let removed = match query.pattern.as_deref() {
        Some(pattern) => state.cache_service.clear_matching(pattern)?,
        None => state.cache_service.clear_cache()?,
    };
    Ok(Json(ClearCacheResponse { removed }))
}
