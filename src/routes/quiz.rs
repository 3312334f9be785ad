use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::dto::quiz_dto::{DailyQuizResponse, DateQuery, SubmitQuizRequest};
use crate::error::Result;
use crate::models::question::PublicQuizQuestion;
use crate::routes::extract::AppJson;
use crate::utils::time;
use crate::AppState;

#[axum::debug_handler]
pub async fn get_daily_quiz(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse> {
    let date = time::date_or_today(query.date.as_deref())?;
    let quiz = state.quiz_service.daily_quiz(date);
    let completed = state.attempt_service.has_completed(date)?;

    Ok(Json(DailyQuizResponse {
        total_questions: quiz.len(),
        completed,
        questions: quiz.questions.iter().map(PublicQuizQuestion::from).collect(),
        date: quiz.date,
    }))
}

#[axum::debug_handler]
pub async fn get_quiz_status(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<impl IntoResponse> {
    let date = time::date_or_today(query.date.as_deref())?;
    let status = state.attempt_service.status(date)?;
    Ok(Json(status))
}

#[axum::debug_handler]
pub async fn submit_daily_quiz(
    State(state): State<AppState>,
    AppJson(req): AppJson<SubmitQuizRequest>,
) -> Result<impl IntoResponse> {
    req.validate()?;
    let date = time::date_or_today(req.date.as_deref())?;
    tracing::info!("Submitting daily quiz for {} with {} answers", date, req.answers.len());
    let submission = state.attempt_service.submit(date, &req.answers)?;
    Ok(Json(submission))
}
