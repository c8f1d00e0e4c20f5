use std::sync::Arc;

use crate::{
    constants::{
        limits::{
            BASELINE_EXCERPT_CHARS, BASELINE_MATERIAL_COUNT, CITATION_LIMIT,
            HISTORY_MESSAGE_COUNT, STUDENT_HISTORY_CHARS, TUTOR_HISTORY_CHARS,
        },
        prompts,
    },
    errors::AppResult,
    models::domain::RankedCitation,
    repositories::{MaterialRepository, MessageRepository},
    services::{ranking_service::RankingService, text_helpers::truncate_chars},
};

/// Assembles the prompt sent to the completion service. Every section is
/// capped in characters, so the total stays under the service's input
/// ceiling by construction.
pub struct ContextService {
    materials: Arc<dyn MaterialRepository>,
    messages: Arc<dyn MessageRepository>,
    ranking: Arc<RankingService>,
}

impl ContextService {
    pub fn new(
        materials: Arc<dyn MaterialRepository>,
        messages: Arc<dyn MessageRepository>,
        ranking: Arc<RankingService>,
    ) -> Self {
        Self {
            materials,
            messages,
            ranking,
        }
    }

    /// The always-present instruction block seeded into a blank conversation:
    /// preamble plus bounded excerpts of the most recent materials.
    pub async fn baseline_context(&self, course_id: &str) -> AppResult<String> {
        let materials = self
            .materials
            .list_recent_with_content(course_id, BASELINE_MATERIAL_COUNT)
            .await?;

        let mut baseline = prompts::TUTOR_PREAMBLE.replace("{course_id}", course_id);
        for material in &materials {
            if let Some(content) = material.content.as_deref() {
                baseline.push_str("\n\nCourse Material - ");
                baseline.push_str(&material.title);
                baseline.push_str(": ");
                baseline.push_str(&truncate_chars(content, BASELINE_EXCERPT_CHARS));
            }
        }

        Ok(baseline)
    }

    /// Builds the full prompt for one question and returns it together with
    /// the citations that were injected.
    pub async fn build_prompt(
        &self,
        course_id: &str,
        conversation_id: &str,
        question: &str,
    ) -> AppResult<(String, Vec<RankedCitation>)> {
        // Conversations are seeded at creation; the fallback covers rows
        // imported without a baseline message.
        let baseline = match self.messages.first_tutor_message(conversation_id).await? {
            Some(message) => message.body,
            None => prompts::TUTOR_PREAMBLE.replace("{course_id}", course_id),
        };

        let mut history = self
            .messages
            .recent(conversation_id, HISTORY_MESSAGE_COUNT)
            .await?;
        history.reverse();

        let mut history_block = String::new();
        for message in &history {
            // The baseline is replayed as its own block; keep it out of the
            // running history.
            if message.body == baseline {
                continue;
            }
            let (speaker, cap) = if message.from_tutor {
                ("Tutor", TUTOR_HISTORY_CHARS)
            } else {
                ("Student", STUDENT_HISTORY_CHARS)
            };
            history_block.push_str(speaker);
            history_block.push_str(": ");
            history_block.push_str(&truncate_chars(&message.body, cap));
            history_block.push('\n');
        }

        let citations = self.ranking.rank(course_id, question, CITATION_LIMIT).await?;

        let mut prompt = baseline;
        if !citations.is_empty() {
            prompt.push_str("\n\nRelevant course materials:\n");
            for citation in &citations {
                prompt.push_str("- ");
                prompt.push_str(&citation.title);
                prompt.push_str(": ");
                prompt.push_str(&citation.excerpt);
                prompt.push('\n');
            }
        }
        if !history_block.is_empty() {
            prompt.push_str("\nConversation so far:\n");
            prompt.push_str(&history_block);
        }
        prompt.push_str("\nStudent question: ");
        prompt.push_str(question);
        prompt.push_str("\n\n");
        prompt.push_str(prompts::CITE_SOURCES_CUE);

        Ok((prompt, citations))
    }
}
