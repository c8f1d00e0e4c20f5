pub mod conversation_repository;
pub mod course_material_repository;
pub mod message_repository;
pub mod quiz_attempt_repository;
pub mod quiz_repository;

pub use conversation_repository::{ConversationRepository, MongoConversationRepository};
pub use course_material_repository::{MaterialRepository, MongoMaterialRepository};
pub use message_repository::{MessageRepository, MongoMessageRepository};
pub use quiz_attempt_repository::{MongoQuizAttemptRepository, QuizAttemptRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
