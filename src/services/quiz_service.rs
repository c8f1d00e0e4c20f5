use std::sync::Arc;

use crate::{
    constants::{limits::QUIZ_SOURCE_EXCERPT_CHARS, prompts},
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizQuestion},
    repositories::{MaterialRepository, QuizRepository},
    services::{
        completion_service::CompletionGateway,
        quiz_extractor::{GeneratedQuiz, QuizExtractor},
        ranking_service::RankingService,
        text_helpers::truncate_chars,
    },
};

/// Generates quizzes from course materials: pick a source, prompt the
/// completion service, extract the structured quiz, persist it.
pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    materials: Arc<dyn MaterialRepository>,
    ranking: Arc<RankingService>,
    gateway: Arc<dyn CompletionGateway>,
    model: String,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        materials: Arc<dyn MaterialRepository>,
        ranking: Arc<RankingService>,
        gateway: Arc<dyn CompletionGateway>,
        model: String,
    ) -> Self {
        Self {
            quizzes,
            materials,
            ranking,
            gateway,
            model,
        }
    }

    pub async fn generate_quiz(
        &self,
        course_id: &str,
        material_id: Option<&str>,
        topic: Option<&str>,
        num_questions: u8,
    ) -> AppResult<(Quiz, Vec<QuizQuestion>)> {
        let (source_material_id, source_text) =
            self.source_material(course_id, material_id, topic).await?;

        let prompt = Self::generation_prompt(&source_text, topic, num_questions);
        let raw = self.gateway.complete(&self.model, &prompt).await?;
        let generated = QuizExtractor::extract(&raw)?;

        let quiz = Quiz::new(
            course_id,
            source_material_id,
            &generated.title,
            &generated.description,
        );
        let questions = Self::materialize_questions(&quiz.id, &generated);

        let quiz = self.quizzes.create_quiz(quiz).await?;
        self.quizzes.insert_questions(questions.clone()).await?;

        log::info!(
            "generated quiz '{}' with {} question(s) for course {}",
            quiz.title,
            questions.len(),
            course_id
        );

        Ok((quiz, questions))
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.quizzes
            .find_quiz(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{id}' not found")))
    }

    /// Chooses the generation source: an explicit material, else the best
    /// topic match, else the most recent material with content.
    async fn source_material(
        &self,
        course_id: &str,
        material_id: Option<&str>,
        topic: Option<&str>,
    ) -> AppResult<(Option<String>, String)> {
        if let Some(id) = material_id {
            let material = self.materials.find_by_id(id).await?.ok_or_else(|| {
                AppError::NotFound(format!("Course material with id '{id}' not found"))
            })?;
            let content = material
                .content
                .clone()
                .filter(|content| !content.trim().is_empty())
                .ok_or_else(|| {
                    AppError::ValidationError(format!(
                        "material '{}' has no extracted text to generate from",
                        material.title
                    ))
                })?;
            return Ok((Some(material.id), content));
        }

        if let Some(topic) = topic.filter(|topic| !topic.trim().is_empty()) {
            if let Some(material) = self.ranking.best_match(course_id, topic).await? {
                let content = material.content.clone().unwrap_or_default();
                return Ok((Some(material.id), content));
            }
        }

        let material = self
            .materials
            .list_recent_with_content(course_id, 1)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "no course materials with content for course '{course_id}'"
                ))
            })?;
        let content = material.content.clone().unwrap_or_default();
        Ok((Some(material.id), content))
    }

    fn generation_prompt(source_text: &str, topic: Option<&str>, num_questions: u8) -> String {
        let schema = serde_json::to_string_pretty(&schemars::schema_for!(GeneratedQuiz))
            .unwrap_or_default();

        let mut prompt = String::from(prompts::QUIZ_GENERATOR_PROMPT);
        prompt.push_str("\n\nJSON schema for the response:\n");
        prompt.push_str(&schema);
        prompt.push_str(&format!("\n\nGenerate exactly {num_questions} questions."));
        if let Some(topic) = topic.filter(|topic| !topic.trim().is_empty()) {
            prompt.push_str(&format!("\nFocus on the topic: {topic}"));
        }
        prompt.push_str("\n\nSource material:\n");
        prompt.push_str(&truncate_chars(source_text, QUIZ_SOURCE_EXCERPT_CHARS));
        prompt
    }

    fn materialize_questions(quiz_id: &str, generated: &GeneratedQuiz) -> Vec<QuizQuestion> {
        generated
            .questions
            .iter()
            .map(|question| {
                QuizQuestion::new(
                    quiz_id,
                    &question.question,
                    question.options.clone(),
                    question.correct as u8,
                    &question.explanation,
                )
            })
            .collect()
    }
}
