use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::quiz_result::{AnswerReview, QuizAttemptRecord, QuizResult};
use crate::services::grading_service::GradingService;
use crate::services::quiz_service::QuizService;
use crate::storage::{keys, SharedStore};
use crate::utils::time;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStatus {
    pub date: String,
    pub completed: bool,
    pub last_completed_date: Option<String>,
    pub total_points: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub date: String,
    pub result: QuizResult,
    pub review: Vec<AnswerReview>,
    pub total_points: u64,
}

/// One daily quiz attempt per calendar date, with the reward balance kept in
/// device storage.
///
/// Only the most recent completed date is stored, so attempts must move
/// forward in time: once a date is completed, it and every earlier date are
/// closed.
#[derive(Clone)]
pub struct AttemptService {
    store: SharedStore,
    quiz_service: QuizService,
    submit_lock: Arc<Mutex<()>>,
}

impl AttemptService {
    pub fn new(store: SharedStore, quiz_service: QuizService) -> Self {
        Self {
            store,
            quiz_service,
            submit_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn status(&self, date: NaiveDate) -> Result<QuizStatus> {
        let last_completed = self.last_completed()?;
        Ok(QuizStatus {
            date: time::date_key(date),
            completed: last_completed.is_some_and(|last| date <= last),
            last_completed_date: last_completed.map(time::date_key),
            total_points: self.total_points()?,
        })
    }

    /// True when `date` can no longer be attempted.
    pub fn has_completed(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.last_completed()?.is_some_and(|last| date <= last))
    }

    pub fn last_completed(&self) -> Result<Option<NaiveDate>> {
        match self.store.get(keys::LAST_COMPLETED_QUIZ)? {
            Some(raw) => time::parse_date(&raw).map(Some).map_err(|_| {
                Error::Storage(format!("Stored quiz completion date '{}' is invalid", raw))
            }),
            None => Ok(None),
        }
    }

    pub fn submit(&self, date: NaiveDate, answers: &[usize]) -> Result<QuizSubmission> {
        let _guard = self
            .submit_lock
            .lock()
            .map_err(|_| Error::Internal("quiz submit lock poisoned".to_string()))?;

        if date > time::today() {
            return Err(Error::InvalidArgument(format!(
                "Daily quiz for {} is not available yet",
                time::date_key(date)
            )));
        }
        if let Some(last) = self.last_completed()? {
            if date <= last {
                return Err(Error::Conflict(format!(
                    "Daily quiz for {} has already been completed (last completed {})",
                    time::date_key(date),
                    time::date_key(last)
                )));
            }
        }

        let quiz = self.quiz_service.daily_quiz(date);
        let (result, review) = GradingService::grade_quiz(&quiz, answers)?;

        let record = QuizAttemptRecord {
            date: quiz.date.clone(),
            result,
            completed_at: time::now(),
        };
        let total_points = self.total_points()? + u64::from(result.reward);

        // Completion marker last: a failed write leaves the day open.
        if result.reward > 0 {
            self.store
                .set(keys::REWARD_POINTS, &total_points.to_string())?;
        }
        self.store
            .set(keys::LAST_QUIZ_ATTEMPT, &serde_json::to_string(&record)?)?;
        self.store.set(keys::LAST_COMPLETED_QUIZ, &quiz.date)?;

        tracing::info!(
            date = %quiz.date,
            score = result.score,
            passed = result.passed,
            reward = result.reward,
            "Daily quiz completed"
        );

        Ok(QuizSubmission {
            date: quiz.date,
            result,
            review,
            total_points,
        })
    }

    pub fn total_points(&self) -> Result<u64> {
        match self.store.get(keys::REWARD_POINTS)? {
            Some(raw) => raw.trim().parse().map_err(|e| {
                Error::Storage(format!("Stored reward points '{}' are invalid: {}", raw, e))
            }),
            None => Ok(0),
        }
    }

    pub fn last_attempt(&self) -> Result<Option<QuizAttemptRecord>> {
        match self.store.get(keys::LAST_QUIZ_ATTEMPT)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}
