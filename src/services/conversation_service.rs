use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Conversation, Message},
    repositories::{ConversationRepository, MessageRepository},
    services::context_service::ContextService,
};

/// Allocates pre-created conversation slots. Blank conversations are created
/// ahead of demand (a maintenance concern); assignment hands exactly one slot
/// to exactly one user, even under concurrent requests for the same course.
pub struct ConversationService {
    conversations: Arc<dyn ConversationRepository>,
    messages: Arc<dyn MessageRepository>,
    context: Arc<ContextService>,
}

impl ConversationService {
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        messages: Arc<dyn MessageRepository>,
        context: Arc<ContextService>,
    ) -> Self {
        Self {
            conversations,
            messages,
            context,
        }
    }

    /// Inserts one unassigned conversation with its baseline context seeded
    /// as the first tutor message. Returns the opaque handle.
    pub async fn create_blank(&self, course_id: &str) -> AppResult<String> {
        let baseline = self.context.baseline_context(course_id).await?;

        let conversation = Conversation::new_blank(course_id);
        let handle = conversation.remote_id.clone();
        let row_id = conversation.id.clone();

        self.conversations.insert(conversation).await?;
        self.messages
            .append(Message::tutor(&row_id, &baseline))
            .await?;

        log::info!(
            "pre-created blank conversation {} for course {}",
            handle,
            course_id
        );
        Ok(handle)
    }

    /// Maintenance entry point: tops the pool up by `count` blanks.
    pub async fn prewarm(&self, course_id: &str, count: u32) -> AppResult<u32> {
        for _ in 0..count {
            self.create_blank(course_id).await?;
        }
        Ok(count)
    }

    /// Claims the oldest unassigned conversation for the user. A lost claim
    /// race means another request took that row; selection retries against
    /// the remaining pool until a claim lands or the pool is empty. An empty
    /// pool is terminal: the operator has to pre-generate more.
    pub async fn assign(&self, user_id: &str, course_id: &str) -> AppResult<String> {
        loop {
            let Some(candidate) = self.conversations.find_unassigned(course_id).await? else {
                return Err(AppError::NoSlotAvailable);
            };

            if self.conversations.claim(&candidate.id, user_id).await? {
                log::info!(
                    "assigned conversation {} to user {} for course {}",
                    candidate.remote_id,
                    user_id,
                    course_id
                );
                return Ok(candidate.remote_id);
            }

            log::debug!(
                "lost claim race for conversation {}, reselecting",
                candidate.id
            );
        }
    }

    /// The user's most recently assigned conversation for the course.
    pub async fn get_active(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Conversation>> {
        self.conversations.latest_assigned(user_id, course_id).await
    }

    pub async fn pool_size(&self, course_id: &str) -> AppResult<u64> {
        self.conversations.count_unassigned(course_id).await
    }
}
