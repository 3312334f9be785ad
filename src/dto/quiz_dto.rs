use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::question::PublicQuizQuestion;
use crate::services::quiz_service::QUESTIONS_PER_DAY;

/// Upper bound on submitted answers, one per daily question.
pub const MAX_ANSWERS: u64 = QUESTIONS_PER_DAY as u64;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuizResponse {
    pub date: String,
    pub total_questions: usize,
    pub completed: bool,
    pub questions: Vec<PublicQuizQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    pub date: Option<String>,
    #[validate(length(max = MAX_ANSWERS))]
    pub answers: Vec<usize>,
}
