use std::sync::Arc;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

use crate::data::QuizPool;
use crate::error::Result;
use crate::models::daily_quiz::DailyQuiz;
use crate::models::question::QuizQuestion;
use crate::utils::time;

/// Questions drawn for one day's quiz.
pub const QUESTIONS_PER_DAY: usize = 15;

#[derive(Clone)]
pub struct QuizService {
    pool: Arc<QuizPool>,
}

impl QuizService {
    pub fn new(pool: Arc<QuizPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &QuizPool {
        &self.pool
    }

    pub fn daily_quiz(&self, date: NaiveDate) -> DailyQuiz {
        let key = time::date_key(date);
        let questions = select_questions(self.pool.questions(), &key, QUESTIONS_PER_DAY);
        DailyQuiz {
            date: key,
            questions,
        }
    }

    pub fn daily_quiz_for(&self, date: &str) -> Result<DailyQuiz> {
        let date = time::parse_date(date)?;
        Ok(self.daily_quiz(date))
    }

    pub fn today(&self) -> DailyQuiz {
        self.daily_quiz(time::today())
    }
}

/// 32-byte seed derived from the full date key.
pub fn seed_from_date(date_key: &str) -> [u8; 32] {
    Sha256::digest(date_key.as_bytes()).into()
}

/// Shuffles a copy of `pool` with a generator seeded from `seed_key` and keeps
/// the first `count` questions. A pool smaller than `count` is returned whole.
pub fn select_questions(pool: &[QuizQuestion], seed_key: &str, count: usize) -> Vec<QuizQuestion> {
    let mut rng = ChaCha8Rng::from_seed(seed_from_date(seed_key));
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(&mut rng);
    shuffled.truncate(count);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuizCategory;
    use std::collections::HashSet;

    fn small_pool(correct: &[usize]) -> QuizPool {
        let questions = correct
            .iter()
            .enumerate()
            .map(|(idx, &c)| QuizQuestion {
                id: (idx as i32) + 1,
                question: format!("Q{}", idx + 1),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_answer: c,
                explanation: String::new(),
                category: QuizCategory::Preflop,
            })
            .collect();
        QuizPool::new(questions).unwrap()
    }

    fn builtin_service() -> QuizService {
        QuizService::new(Arc::new(QuizPool::builtin().unwrap()))
    }

    fn ids(quiz: &DailyQuiz) -> Vec<i32> {
        quiz.questions.iter().map(|q| q.id).collect()
    }

    #[test]
    fn same_date_same_quiz() {
        let svc = builtin_service();
        let a = svc.daily_quiz_for("2024-03-17").unwrap();
        let b = svc.daily_quiz_for("2024-03-17").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.date, "2024-03-17");
    }

    #[test]
    fn takes_fifteen_unique_questions() {
        let svc = builtin_service();
        let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for _ in 0..60 {
            let quiz = svc.daily_quiz(day);
            assert_eq!(quiz.len(), QUESTIONS_PER_DAY);
            let unique: HashSet<i32> = ids(&quiz).into_iter().collect();
            assert_eq!(unique.len(), quiz.len());
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn additive_seed_collisions_no_longer_share_a_quiz() {
        // 2024+1+5 == 2024+2+4: the same seed under a plain component sum.
        let svc = builtin_service();
        let a = svc.daily_quiz_for("2024-01-05").unwrap();
        let b = svc.daily_quiz_for("2024-02-04").unwrap();
        assert_ne!(ids(&a), ids(&b));
    }

    #[test]
    fn small_pool_is_returned_whole() {
        let svc = QuizService::new(Arc::new(small_pool(&[1, 1, 3, 0, 2])));
        let first = svc.daily_quiz_for("2024-01-05").unwrap();
        let second = svc.daily_quiz_for("2024-01-05").unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(ids(&first), ids(&second));

        let mut sorted = ids(&first);
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rejects_malformed_date() {
        let svc = builtin_service();
        assert!(svc.daily_quiz_for("2024-1-5x").is_err());
    }
}
