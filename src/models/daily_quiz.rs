use serde::{Deserialize, Serialize};

use super::question::QuizQuestion;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuiz {
    /// `YYYY-MM-DD`, the key the question order is derived from.
    pub date: String,
    pub questions: Vec<QuizQuestion>,
}

impl DailyQuiz {
    pub fn correct_answers(&self) -> Vec<usize> {
        self.questions.iter().map(|q| q.correct_answer).collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
