use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated multiple-choice question. Immutable once written: attempts
/// reference questions by id, so edits would rewrite history.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub id: String,
    pub quiz_id: String,
    pub text: String,
    /// Always exactly four options; enforced at extraction time.
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_index: u8,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl QuizQuestion {
    pub fn new(
        quiz_id: &str,
        text: &str,
        options: Vec<String>,
        correct_index: u8,
        explanation: &str,
    ) -> Self {
        QuizQuestion {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            text: text.to_string(),
            options,
            correct_index,
            explanation: explanation.to_string(),
            created_at: Some(Utc::now()),
        }
    }

    pub fn is_correct_choice(&self, selected_index: u8) -> bool {
        selected_index == self.correct_index
    }
}
