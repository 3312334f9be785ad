use serde::{Deserialize, Serialize};

/// Number of answer options every quiz question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: i32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
    pub category: QuizCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizCategory {
    Preflop,
    Postflop,
    Theory,
    Ranges,
    Betting,
}

/// A question as shown before it is answered: the answer key and the
/// explanation stay on the server side until the attempt is graded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuizQuestion {
    pub id: i32,
    pub question: String,
    pub options: Vec<String>,
    pub category: QuizCategory,
}

impl From<&QuizQuestion> for PublicQuizQuestion {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            id: q.id,
            question: q.question.clone(),
            options: q.options.clone(),
            category: q.category,
        }
    }
}
