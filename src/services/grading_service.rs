use crate::error::{Error, Result};
use crate::models::daily_quiz::DailyQuiz;
use crate::models::quiz_result::{AnswerReview, QuizResult};

/// Minimum score (percent) that counts as a pass.
pub const PASSING_SCORE: u32 = 80;
/// Points credited for a passed daily quiz.
pub const DAILY_QUIZ_REWARD: u32 = 15;

pub struct GradingService;

impl GradingService {
    pub fn score(answers: &[usize], correct_answers: &[usize]) -> Result<QuizResult> {
        if answers.len() != correct_answers.len() {
            return Err(Error::InvalidArgument(format!(
                "Expected {} answers, got {}",
                correct_answers.len(),
                answers.len()
            )));
        }

        let total_questions = correct_answers.len();
        let correct_count = answers
            .iter()
            .zip(correct_answers.iter())
            .filter(|(given, correct)| given == correct)
            .count();

        let score = if total_questions == 0 {
            0
        } else {
            ((correct_count as f64 / total_questions as f64) * 100.0).round() as u32
        };
        let passed = total_questions > 0 && score >= PASSING_SCORE;

        Ok(QuizResult {
            correct_count,
            total_questions,
            score,
            passed,
            reward: if passed { DAILY_QUIZ_REWARD } else { 0 },
        })
    }

    pub fn grade_quiz(quiz: &DailyQuiz, answers: &[usize]) -> Result<(QuizResult, Vec<AnswerReview>)> {
        let result = Self::score(answers, &quiz.correct_answers())?;
        let review = quiz
            .questions
            .iter()
            .zip(answers.iter())
            .map(|(q, &selected)| AnswerReview {
                question_id: q.id,
                selected,
                correct_answer: q.correct_answer,
                is_correct: selected == q.correct_answer,
                explanation: q.explanation.clone(),
            })
            .collect();
        Ok((result, review))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{QuizCategory, QuizQuestion};

    fn answers_with(correct: usize, total: usize) -> (Vec<usize>, Vec<usize>) {
        let key = vec![2usize; total];
        let given = (0..total).map(|i| if i < correct { 2 } else { 0 }).collect();
        (given, key)
    }

    #[test]
    fn all_correct_scores_full_marks() {
        let r = GradingService::score(&[1, 1, 3, 0, 2], &[1, 1, 3, 0, 2]).unwrap();
        assert_eq!(
            r,
            QuizResult {
                correct_count: 5,
                total_questions: 5,
                score: 100,
                passed: true,
                reward: 15,
            }
        );
    }

    #[test]
    fn all_wrong_scores_zero() {
        let r = GradingService::score(&[0, 0, 0, 1, 1], &[1, 1, 3, 0, 2]).unwrap();
        assert_eq!(r.correct_count, 0);
        assert_eq!(r.score, 0);
        assert!(!r.passed);
        assert_eq!(r.reward, 0);
    }

    #[test]
    fn zeros_against_sample_key() {
        let r = GradingService::score(&[0, 0, 0, 0, 0], &[1, 1, 3, 0, 2]).unwrap();
        assert_eq!(r.correct_count, 1);
        assert_eq!(r.score, 20);
        assert!(!r.passed);
        assert_eq!(r.reward, 0);
    }

    #[test]
    fn pass_threshold_boundary() {
        let (given, key) = answers_with(12, 15);
        let r = GradingService::score(&given, &key).unwrap();
        assert_eq!(r.score, 80);
        assert!(r.passed);
        assert_eq!(r.reward, DAILY_QUIZ_REWARD);

        let (given, key) = answers_with(11, 15);
        let r = GradingService::score(&given, &key).unwrap();
        assert_eq!(r.score, 73);
        assert!(!r.passed);
        assert_eq!(r.reward, 0);
    }

    #[test]
    fn reward_follows_pass() {
        for correct in 0..=15 {
            let (given, key) = answers_with(correct, 15);
            let r = GradingService::score(&given, &key).unwrap();
            assert_eq!(r.reward == DAILY_QUIZ_REWARD, r.passed);
            assert_eq!(r.passed, r.score >= PASSING_SCORE);
        }
    }

    #[test]
    fn empty_answers_score_zero() {
        let r = GradingService::score(&[], &[]).unwrap();
        assert_eq!(r.score, 0);
        assert!(!r.passed);
        assert_eq!(r.reward, 0);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = GradingService::score(&[1, 2], &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        let err = GradingService::score(&[1, 2, 3, 0], &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn review_carries_explanations() {
        let quiz = DailyQuiz {
            date: "2024-01-05".into(),
            questions: vec![QuizQuestion {
                id: 9,
                question: "Outs for a flush draw?".into(),
                options: vec!["8".into(), "9".into(), "12".into(), "15".into()],
                correct_answer: 1,
                explanation: "Nine cards of the suit remain.".into(),
                category: QuizCategory::Postflop,
            }],
        };
        let (result, review) = GradingService::grade_quiz(&quiz, &[3]).unwrap();
        assert_eq!(result.correct_count, 0);
        assert_eq!(review.len(), 1);
        assert_eq!(review[0].question_id, 9);
        assert!(!review[0].is_correct);
        assert_eq!(review[0].correct_answer, 1);
        assert_eq!(review[0].explanation, "Nine cards of the suit remain.");
    }
}
