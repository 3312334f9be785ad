//! Static quiz content.
//!
//! The built-in pool ships inside the binary and is validated once when the
//! application state is assembled, so an authoring mistake stops startup
//! instead of surfacing mid-quiz.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::question::{QuizQuestion, OPTIONS_PER_QUESTION};

const BUILTIN_QUESTIONS: &str = include_str!("quiz_questions.json");

#[derive(Debug, Clone)]
pub struct QuizPool {
    questions: Vec<QuizQuestion>,
}

impl QuizPool {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self> {
        validate_pool(&questions)?;
        Ok(Self { questions })
    }

    pub fn builtin() -> Result<Self> {
        let questions: Vec<QuizQuestion> = serde_json::from_str(BUILTIN_QUESTIONS)
            .map_err(|e| Error::Config(format!("Built-in quiz pool is not valid JSON: {}", e)))?;
        Self::new(questions)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn validate_pool(questions: &[QuizQuestion]) -> Result<()> {
    if questions.is_empty() {
        return Err(Error::Config("Quiz pool is empty".to_string()));
    }

    let mut seen = HashSet::new();
    for q in questions {
        if q.options.len() != OPTIONS_PER_QUESTION {
            return Err(Error::Config(format!(
                "Question {} has {} options, expected {}",
                q.id,
                q.options.len(),
                OPTIONS_PER_QUESTION
            )));
        }
        if q.correct_answer >= q.options.len() {
            return Err(Error::Config(format!(
                "Question {} has correct answer index {} out of range",
                q.id, q.correct_answer
            )));
        }
        if !seen.insert(q.id) {
            return Err(Error::Config(format!("Duplicate question id {}", q.id)));
        }
    }
    Ok(())
}
