use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{CourseMaterial, Quiz, QuizQuestion, RankedCitation};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewConversationResponse {
    pub conversation_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrewarmResponse {
    pub created: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub answer: String,
    pub citations: Vec<RankedCitation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuizResponse {
    pub quiz: Quiz,
    pub questions: Vec<QuizQuestion>,
}

/// Question shape handed to students: no correct index, no explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampledQuestionDto {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
}

impl From<QuizQuestion> for SampledQuestionDto {
    fn from(question: QuizQuestion) -> Self {
        SampledQuestionDto {
            id: question.id,
            text: question.text,
            options: question.options,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestionsResponse {
    pub questions: Vec<SampledQuestionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptResponse {
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub total_attempts: u64,
    pub correct_attempts: u64,
    pub accuracy: f64,
}

impl ProgressResponse {
    pub fn from_counts(total_attempts: u64, correct_attempts: u64) -> Self {
        let accuracy = if total_attempts == 0 {
            0.0
        } else {
            correct_attempts as f64 / total_attempts as f64
        };
        ProgressResponse {
            total_attempts,
            correct_attempts,
            accuracy,
        }
    }
}

/// Listing shape for the materials manager: contents can be megabytes, so
/// listings only say whether text is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSummaryDto {
    pub id: String,
    pub title: String,
    pub file_url: Option<String>,
    pub has_content: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CourseMaterial> for MaterialSummaryDto {
    fn from(material: CourseMaterial) -> Self {
        let has_content = material.has_content();
        MaterialSummaryDto {
            id: material.id,
            title: material.title,
            file_url: material.file_url,
            has_content,
            created_at: material.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_question_dto_hides_the_answer() {
        let question = QuizQuestion::new(
            "quiz-1",
            "What defines a protocol?",
            vec![
                "Message format only".to_string(),
                "Message order only".to_string(),
                "Format, order, and actions".to_string(),
                "Hardware specs".to_string(),
            ],
            2,
            "Protocols define format, order, and actions taken.",
        );

        let dto = SampledQuestionDto::from(question);
        let json = serde_json::to_string(&dto).expect("dto should serialize");

        assert!(!json.contains("correct_index"));
        assert!(!json.contains("explanation"));
        assert_eq!(dto.options.len(), 4);
    }

    #[test]
    fn progress_accuracy_handles_zero_attempts() {
        let empty = ProgressResponse::from_counts(0, 0);
        assert_eq!(empty.accuracy, 0.0);

        let half = ProgressResponse::from_counts(4, 2);
        assert!((half.accuracy - 0.5).abs() < f64::EPSILON);
    }
}
