use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        ConversationRepository, MaterialRepository, MessageRepository,
        MongoConversationRepository, MongoMaterialRepository, MongoMessageRepository,
        MongoQuizAttemptRepository, MongoQuizRepository, QuizAttemptRepository, QuizRepository,
    },
    services::{
        ChatService, CompletionGateway, ContextService, ConversationService,
        InMemorySessionStore, MaterialService, OpenAiGateway, QuestionSampler,
        QuizAttemptService, QuizService, RankingService, SessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub conversation_service: Arc<ConversationService>,
    pub chat_service: Arc<ChatService>,
    pub quiz_service: Arc<QuizService>,
    pub question_sampler: Arc<QuestionSampler>,
    pub quiz_attempt_service: Arc<QuizAttemptService>,
    pub material_service: Arc<MaterialService>,
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let material_repository = Arc::new(MongoMaterialRepository::new(&db));
        material_repository.ensure_indexes().await?;
        let conversation_repository = Arc::new(MongoConversationRepository::new(&db));
        conversation_repository.ensure_indexes().await?;
        let message_repository = Arc::new(MongoMessageRepository::new(&db));
        message_repository.ensure_indexes().await?;
        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;
        let quiz_attempt_repository = Arc::new(MongoQuizAttemptRepository::new(&db));
        quiz_attempt_repository.ensure_indexes().await?;

        let materials: Arc<dyn MaterialRepository> = material_repository;
        let conversations: Arc<dyn ConversationRepository> = conversation_repository;
        let messages: Arc<dyn MessageRepository> = message_repository;
        let quizzes: Arc<dyn QuizRepository> = quiz_repository;
        let attempts: Arc<dyn QuizAttemptRepository> = quiz_attempt_repository;

        let gateway: Arc<dyn CompletionGateway> = Arc::new(OpenAiGateway::new(&config));
        let model = config.completion_model.clone();

        let ranking = Arc::new(RankingService::new(Arc::clone(&materials)));
        let context = Arc::new(ContextService::new(
            Arc::clone(&materials),
            Arc::clone(&messages),
            Arc::clone(&ranking),
        ));
        let conversation_service = Arc::new(ConversationService::new(
            Arc::clone(&conversations),
            Arc::clone(&messages),
            Arc::clone(&context),
        ));
        let chat_service = Arc::new(ChatService::new(
            Arc::clone(&conversation_service),
            Arc::clone(&messages),
            Arc::clone(&context),
            Arc::clone(&gateway),
            model.clone(),
        ));
        let quiz_service = Arc::new(QuizService::new(
            Arc::clone(&quizzes),
            Arc::clone(&materials),
            Arc::clone(&ranking),
            Arc::clone(&gateway),
            model,
        ));
        let question_sampler = Arc::new(QuestionSampler::new(
            Arc::clone(&quizzes),
            Arc::clone(&attempts),
        ));
        let quiz_attempt_service = Arc::new(QuizAttemptService::new(
            Arc::clone(&quizzes),
            Arc::clone(&attempts),
        ));
        let material_service = Arc::new(MaterialService::new(Arc::clone(&materials)));
        let session_service = Arc::new(SessionService::new(
            Arc::new(InMemorySessionStore::new()),
            config.session_ttl_minutes,
        ));

        Ok(Self {
            db,
            conversation_service,
            chat_service,
            quiz_service,
            question_sampler,
            quiz_attempt_service,
            material_service,
            session_service,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
