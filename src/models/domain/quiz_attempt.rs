use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One answered question. Append-only; feeds both progress analytics and the
/// already-seen exclusion set used when sampling questions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: String,
    pub user_id: String,
    pub course_id: Option<String>,
    pub question_id: Option<String>,
    pub selected_index: u8,
    pub is_correct: bool,
    pub submitted_at: DateTime<Utc>,
}

impl QuizAttempt {
    pub fn new(
        user_id: &str,
        course_id: Option<String>,
        question_id: Option<String>,
        selected_index: u8,
        is_correct: bool,
    ) -> Self {
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            course_id,
            question_id,
            selected_index,
            is_correct,
            submitted_at: Utc::now(),
        }
    }
}
