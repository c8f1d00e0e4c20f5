pub mod chat_handler;
pub mod material_handler;
pub mod quiz_handler;
pub mod session_handler;

pub use chat_handler::{health_check, new_conversation, prewarm, send_message};
pub use material_handler::{list_materials, set_material_file_url, upload_material};
pub use quiz_handler::{generate_quiz, get_quiz, progress, quiz_questions, record_attempt};
pub use session_handler::{create_session, invalidate_session};
