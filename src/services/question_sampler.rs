use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::{
    errors::AppResult,
    models::domain::QuizQuestion,
    repositories::{QuizAttemptRepository, QuizRepository},
};

/// Hands each user a bounded, non-repeating sample from a quiz's question
/// bank. Already-attempted questions never come back; an exhausted bank is a
/// normal empty result, not an error.
pub struct QuestionSampler {
    quizzes: Arc<dyn QuizRepository>,
    attempts: Arc<dyn QuizAttemptRepository>,
}

impl QuestionSampler {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        attempts: Arc<dyn QuizAttemptRepository>,
    ) -> Self {
        Self { quizzes, attempts }
    }

    pub async fn select_questions(
        &self,
        user_id: &str,
        quiz_id: &str,
        max_count: usize,
    ) -> AppResult<Vec<QuizQuestion>> {
        let bank = self.quizzes.questions_for_quiz(quiz_id).await?;
        if bank.is_empty() {
            return Ok(Vec::new());
        }

        let bank_ids: Vec<String> = bank.iter().map(|question| question.id.clone()).collect();
        let attempted: HashSet<String> = self
            .attempts
            .attempted_question_ids(user_id, &bank_ids)
            .await?
            .into_iter()
            .collect();

        let remaining: Vec<QuizQuestion> = bank
            .into_iter()
            .filter(|question| !attempted.contains(&question.id))
            .collect();

        let mut rng = rand::thread_rng();
        let selected: Vec<QuizQuestion> = remaining
            .choose_multiple(&mut rng, max_count.min(remaining.len()))
            .cloned()
            .collect();

        Ok(selected)
    }
}
