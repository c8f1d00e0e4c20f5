pub mod chat_service;
pub mod completion_service;
pub mod context_service;
pub mod conversation_service;
pub mod material_service;
pub mod question_sampler;
pub mod quiz_attempt_service;
pub mod quiz_extractor;
pub mod quiz_service;
pub mod ranking_service;
pub mod session_service;
pub mod text_helpers;

pub use chat_service::ChatService;
pub use completion_service::{CompletionGateway, OpenAiGateway};
pub use context_service::ContextService;
pub use conversation_service::ConversationService;
pub use material_service::MaterialService;
pub use question_sampler::QuestionSampler;
pub use quiz_attempt_service::QuizAttemptService;
pub use quiz_extractor::{GeneratedQuestion, GeneratedQuiz, QuizExtractor};
pub use quiz_service::QuizService;
pub use ranking_service::RankingService;
pub use session_service::{InMemorySessionStore, SessionService, SessionStore};
