use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizAttempt, QuizQuestion},
    models::dto::response::ProgressResponse,
    repositories::{QuizAttemptRepository, QuizRepository},
};

/// Records answered questions and aggregates per-course progress. Grading is
/// done here against the stored question; clients never report correctness
/// themselves.
pub struct QuizAttemptService {
    quizzes: Arc<dyn QuizRepository>,
    attempts: Arc<dyn QuizAttemptRepository>,
}

impl QuizAttemptService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        attempts: Arc<dyn QuizAttemptRepository>,
    ) -> Self {
        Self { quizzes, attempts }
    }

    pub async fn record_attempt(
        &self,
        user_id: &str,
        question_id: &str,
        selected_index: u8,
        course_id: Option<String>,
    ) -> AppResult<(QuizAttempt, QuizQuestion)> {
        let question = self
            .quizzes
            .find_question(question_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Quiz question with id '{question_id}' not found"))
            })?;

        if selected_index as usize >= question.options.len() {
            return Err(AppError::ValidationError(format!(
                "selected option {} is out of range for a {}-option question",
                selected_index,
                question.options.len()
            )));
        }

        let is_correct = question.is_correct_choice(selected_index);
        let attempt = QuizAttempt::new(
            user_id,
            course_id,
            Some(question.id.clone()),
            selected_index,
            is_correct,
        );

        let attempt = self.attempts.record(attempt).await?;
        Ok((attempt, question))
    }

    pub async fn progress(&self, user_id: &str, course_id: &str) -> AppResult<ProgressResponse> {
        let (total, correct) = self.attempts.stats(user_id, course_id).await?;
        Ok(ProgressResponse::from_counts(total, correct))
    }
}
