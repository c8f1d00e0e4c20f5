use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    constants::limits::QUIZ_OPTION_COUNT,
    errors::{AppError, AppResult},
};

/// The structure the quiz generator is asked to produce.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedQuiz {
    pub title: String,
    pub description: String,
    pub questions: Vec<GeneratedQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct: usize,
    pub explanation: String,
}

/// Pulls a validated quiz out of a raw completion. The model is told to
/// return bare JSON but routinely wraps it in prose or code fences, so the
/// candidate object is sliced from the first `{` to the last `}`. Anything
/// that does not parse into the full structure is reported as malformed;
/// there is no repair pass and no partially-filled result.
pub struct QuizExtractor;

impl QuizExtractor {
    pub fn extract(raw: &str) -> AppResult<GeneratedQuiz> {
        let start = raw.find('{').ok_or_else(|| {
            AppError::MalformedResponse("no JSON object found in completion output".to_string())
        })?;
        let end = raw
            .rfind('}')
            .filter(|end| *end >= start)
            .ok_or_else(|| {
                AppError::MalformedResponse(
                    "no closing brace found in completion output".to_string(),
                )
            })?;

        let candidate = &raw[start..=end];
        let quiz: GeneratedQuiz = serde_json::from_str(candidate)
            .map_err(|err| AppError::MalformedResponse(format!("invalid quiz JSON: {err}")))?;

        Self::validate(&quiz)?;
        Ok(quiz)
    }

    fn validate(quiz: &GeneratedQuiz) -> AppResult<()> {
        if quiz.questions.is_empty() {
            return Err(AppError::MalformedResponse(
                "quiz contains no questions".to_string(),
            ));
        }

        for (index, question) in quiz.questions.iter().enumerate() {
            if question.options.len() != QUIZ_OPTION_COUNT {
                return Err(AppError::MalformedResponse(format!(
                    "question {} has {} options, expected {}",
                    index,
                    question.options.len(),
                    QUIZ_OPTION_COUNT
                )));
            }
            if question.correct >= question.options.len() {
                return Err(AppError::MalformedResponse(format!(
                    "question {} marks option {} correct but only {} options exist",
                    index,
                    question.correct,
                    question.options.len()
                )));
            }
        }

        Ok(())
    }
}
