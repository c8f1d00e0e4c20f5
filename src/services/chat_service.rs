use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Message, RankedCitation},
    repositories::MessageRepository,
    services::{
        completion_service::CompletionGateway, context_service::ContextService,
        conversation_service::ConversationService,
    },
};

/// Orchestrates one tutoring exchange: resolve the user's conversation,
/// assemble the bounded prompt, call the completion service once, and log
/// both turns. Gateway failures surface as a single terminal error; there is
/// no retry at this layer.
pub struct ChatService {
    conversations: Arc<ConversationService>,
    messages: Arc<dyn MessageRepository>,
    context: Arc<ContextService>,
    gateway: Arc<dyn CompletionGateway>,
    model: String,
}

impl ChatService {
    pub fn new(
        conversations: Arc<ConversationService>,
        messages: Arc<dyn MessageRepository>,
        context: Arc<ContextService>,
        gateway: Arc<dyn CompletionGateway>,
        model: String,
    ) -> Self {
        Self {
            conversations,
            messages,
            context,
            gateway,
            model,
        }
    }

    /// Assigns a pre-created conversation slot to the user and returns its
    /// handle.
    pub async fn start_session(&self, user_id: &str, course_id: &str) -> AppResult<String> {
        self.conversations.assign(user_id, course_id).await
    }

    /// Answers one student question inside the user's active conversation.
    pub async fn ask(
        &self,
        user_id: &str,
        course_id: &str,
        question: &str,
    ) -> AppResult<(String, Vec<RankedCitation>)> {
        let conversation = self
            .conversations
            .get_active(user_id, course_id)
            .await?
            .ok_or(AppError::NoActiveConversation)?;

        let (prompt, citations) = self
            .context
            .build_prompt(course_id, &conversation.id, question)
            .await?;

        self.messages
            .append(Message::student(&conversation.id, question))
            .await?;

        let answer = self.gateway.complete(&self.model, &prompt).await?;

        self.messages
            .append(Message::tutor(&conversation.id, &answer))
            .await?;

        log::info!(
            "answered question in conversation {} for user {}",
            conversation.remote_id,
            user_id
        );

        Ok((answer, citations))
    }
}
