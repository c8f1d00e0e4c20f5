#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mentor_server::errors::{AppError, AppResult};
use mentor_server::models::domain::{
    Conversation, CourseMaterial, Message, Quiz, QuizAttempt, QuizQuestion,
};
use mentor_server::repositories::{
    ConversationRepository, MaterialRepository, MessageRepository, QuizAttemptRepository,
    QuizRepository,
};
use mentor_server::services::{
    ChatService, CompletionGateway, ContextService, ConversationService, QuestionSampler,
    QuizAttemptService, QuizService, RankingService,
};

#[derive(Default)]
pub struct InMemoryMaterialRepository {
    rows: RwLock<Vec<CourseMaterial>>,
}

#[async_trait]
impl MaterialRepository for InMemoryMaterialRepository {
    async fn create(&self, material: CourseMaterial) -> AppResult<CourseMaterial> {
        self.rows.write().await.push(material.clone());
        Ok(material)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<CourseMaterial>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|material| material.id == id).cloned())
    }

    async fn list_for_course(
        &self,
        course_id: &str,
        limit: i64,
    ) -> AppResult<Vec<CourseMaterial>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .rev()
            .filter(|material| material.course_id == course_id)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn list_recent_with_content(
        &self,
        course_id: &str,
        limit: i64,
    ) -> AppResult<Vec<CourseMaterial>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .rev()
            .filter(|material| material.course_id == course_id && material.has_content())
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn update_file_url(&self, material_id: &str, file_url: &str) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|material| material.id == material_id) {
            Some(material) => {
                material.file_url = Some(file_url.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct InMemoryConversationRepository {
    rows: RwLock<Vec<Conversation>>,
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn insert(&self, conversation: Conversation) -> AppResult<Conversation> {
        self.rows.write().await.push(conversation.clone());
        Ok(conversation)
    }

    async fn find_unassigned(&self, course_id: &str) -> AppResult<Option<Conversation>> {
        let rows = self.rows.read().await;
        // Insertion order doubles as creation order: oldest first.
        Ok(rows
            .iter()
            .find(|conversation| conversation.course_id == course_id && !conversation.assigned)
            .cloned())
    }

    async fn claim(&self, conversation_id: &str, user_id: &str) -> AppResult<bool> {
        // Single guarded mutation under one write lock, mirroring the
        // conditional-update semantics of the real store.
        let mut rows = self.rows.write().await;
        match rows
            .iter_mut()
            .find(|conversation| conversation.id == conversation_id && !conversation.assigned)
        {
            Some(conversation) => {
                conversation.assigned = true;
                conversation.user_id = Some(user_id.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn latest_assigned(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Conversation>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .rev()
            .find(|conversation| {
                conversation.course_id == course_id
                    && conversation.assigned
                    && conversation.user_id.as_deref() == Some(user_id)
            })
            .cloned())
    }

    async fn count_unassigned(&self, course_id: &str) -> AppResult<u64> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|conversation| conversation.course_id == course_id && !conversation.assigned)
            .count() as u64)
    }
}

#[derive(Default)]
pub struct InMemoryMessageRepository {
    rows: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub async fn all_for_conversation(&self, conversation_id: &str) -> Vec<Message> {
        let rows = self.rows.read().await;
        rows.iter()
            .filter(|message| message.conversation_id == conversation_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn append(&self, message: Message) -> AppResult<Message> {
        self.rows.write().await.push(message.clone());
        Ok(message)
    }

    async fn first_tutor_message(&self, conversation_id: &str) -> AppResult<Option<Message>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|message| message.conversation_id == conversation_id && message.from_tutor)
            .cloned())
    }

    async fn recent(&self, conversation_id: &str, limit: i64) -> AppResult<Vec<Message>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .rev()
            .filter(|message| message.conversation_id == conversation_id)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<Vec<Quiz>>,
    questions: RwLock<Vec<QuizQuestion>>,
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create_quiz(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.quizzes.write().await.push(quiz.clone());
        Ok(quiz)
    }

    async fn insert_questions(&self, questions: Vec<QuizQuestion>) -> AppResult<()> {
        self.questions.write().await.extend(questions);
        Ok(())
    }

    async fn find_quiz(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.iter().find(|quiz| quiz.id == id).cloned())
    }

    async fn find_question(&self, id: &str) -> AppResult<Option<QuizQuestion>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|question| question.id == id).cloned())
    }

    async fn questions_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let questions = self.questions.read().await;
        Ok(questions
            .iter()
            .filter(|question| question.quiz_id == quiz_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryQuizAttemptRepository {
    rows: RwLock<Vec<QuizAttempt>>,
}

#[async_trait]
impl QuizAttemptRepository for InMemoryQuizAttemptRepository {
    async fn record(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        self.rows.write().await.push(attempt.clone());
        Ok(attempt)
    }

    async fn attempted_question_ids(
        &self,
        user_id: &str,
        question_ids: &[String],
    ) -> AppResult<Vec<String>> {
        let rows = self.rows.read().await;
        let mut ids: Vec<String> = rows
            .iter()
            .filter(|attempt| attempt.user_id == user_id)
            .filter_map(|attempt| attempt.question_id.clone())
            .filter(|id| question_ids.contains(id))
            .collect();
        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    async fn stats(&self, user_id: &str, course_id: &str) -> AppResult<(u64, u64)> {
        let rows = self.rows.read().await;
        let for_user: Vec<_> = rows
            .iter()
            .filter(|attempt| {
                attempt.user_id == user_id && attempt.course_id.as_deref() == Some(course_id)
            })
            .collect();
        let correct = for_user.iter().filter(|attempt| attempt.is_correct).count();
        Ok((for_user.len() as u64, correct as u64))
    }
}

/// Canned gateway: records every prompt it sees and returns a fixed outcome.
pub struct StubGateway {
    reply: AppResult<String>,
    prompts: std::sync::Mutex<Vec<String>>,
}

impl StubGateway {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Err(AppError::GatewayUnavailable("stubbed outage".to_string())),
            prompts: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log lock").clone()
    }
}

#[async_trait]
impl CompletionGateway for StubGateway {
    async fn complete(&self, _model: &str, prompt: &str) -> AppResult<String> {
        self.prompts
            .lock()
            .expect("prompt log lock")
            .push(prompt.to_string());
        self.reply.clone()
    }
}

/// Fully wired service stack over in-memory repositories and a stub gateway.
pub struct TestStack {
    pub materials: Arc<InMemoryMaterialRepository>,
    pub conversations: Arc<InMemoryConversationRepository>,
    pub messages: Arc<InMemoryMessageRepository>,
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub attempts: Arc<InMemoryQuizAttemptRepository>,
    pub gateway: Arc<StubGateway>,
    pub conversation_service: Arc<ConversationService>,
    pub chat_service: Arc<ChatService>,
    pub quiz_service: Arc<QuizService>,
    pub sampler: Arc<QuestionSampler>,
    pub attempt_service: Arc<QuizAttemptService>,
}

pub fn test_stack(gateway: StubGateway) -> TestStack {
    let materials = Arc::new(InMemoryMaterialRepository::default());
    let conversations = Arc::new(InMemoryConversationRepository::default());
    let messages = Arc::new(InMemoryMessageRepository::default());
    let quizzes = Arc::new(InMemoryQuizRepository::default());
    let attempts = Arc::new(InMemoryQuizAttemptRepository::default());
    let gateway = Arc::new(gateway);

    let materials_dyn: Arc<dyn MaterialRepository> = materials.clone();
    let conversations_dyn: Arc<dyn ConversationRepository> = conversations.clone();
    let messages_dyn: Arc<dyn MessageRepository> = messages.clone();
    let quizzes_dyn: Arc<dyn QuizRepository> = quizzes.clone();
    let attempts_dyn: Arc<dyn QuizAttemptRepository> = attempts.clone();
    let gateway_dyn: Arc<dyn CompletionGateway> = gateway.clone();

    let ranking = Arc::new(RankingService::new(Arc::clone(&materials_dyn)));
    let context = Arc::new(ContextService::new(
        Arc::clone(&materials_dyn),
        Arc::clone(&messages_dyn),
        Arc::clone(&ranking),
    ));
    let conversation_service = Arc::new(ConversationService::new(
        conversations_dyn,
        Arc::clone(&messages_dyn),
        Arc::clone(&context),
    ));
    let chat_service = Arc::new(ChatService::new(
        Arc::clone(&conversation_service),
        messages_dyn,
        context,
        Arc::clone(&gateway_dyn),
        "gpt-4o-mini".to_string(),
    ));
    let quiz_service = Arc::new(QuizService::new(
        Arc::clone(&quizzes_dyn),
        materials_dyn,
        ranking,
        gateway_dyn,
        "gpt-4o-mini".to_string(),
    ));
    let sampler = Arc::new(QuestionSampler::new(
        Arc::clone(&quizzes_dyn),
        Arc::clone(&attempts_dyn),
    ));
    let attempt_service = Arc::new(QuizAttemptService::new(quizzes_dyn, attempts_dyn));

    TestStack {
        materials,
        conversations,
        messages,
        quizzes,
        attempts,
        gateway,
        conversation_service,
        chat_service,
        quiz_service,
        sampler,
        attempt_service,
    }
}
