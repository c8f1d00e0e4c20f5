pub mod citation;
pub mod conversation;
pub mod course_material;
pub mod message;
pub mod quiz;
pub mod quiz_attempt;
pub mod quiz_question;

pub use citation::RankedCitation;
pub use conversation::Conversation;
pub use course_material::CourseMaterial;
pub use message::Message;
pub use quiz::Quiz;
pub use quiz_attempt::QuizAttempt;
pub use quiz_question::QuizQuestion;
