use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewConversationRequest {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,

    #[validate(length(min = 1, max = 64))]
    pub course_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PrewarmRequest {
    #[validate(length(min = 1, max = 64))]
    pub course_id: String,

    #[validate(range(min = 1, max = 50))]
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,

    #[validate(length(min = 1, max = 64))]
    pub course_id: String,

    #[validate(length(min = 1, max = 4000))]
    pub question: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 64))]
    pub course_id: String,

    pub material_id: Option<String>,

    #[validate(length(max = 200))]
    pub topic: Option<String>,

    #[validate(range(min = 1, max = 20))]
    pub num_questions: Option<u8>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizQuestionsQuery {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,

    #[validate(length(min = 1, max = 64))]
    pub quiz_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizAttemptRequest {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,

    #[validate(length(min = 1, max = 64))]
    pub question_id: String,

    #[validate(range(max = 3))]
    pub selected_index: u8,

    pub course_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProgressQuery {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,

    #[validate(length(min = 1, max = 64))]
    pub course_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UploadMaterialRequest {
    #[validate(length(min = 1, max = 64))]
    pub course_id: String,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub content: Option<String>,

    #[validate(url)]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MaterialListQuery {
    #[validate(length(min = 1, max = 64))]
    pub course_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetFileUrlRequest {
    #[validate(length(min = 1, max = 64))]
    pub material_id: String,

    #[validate(url)]
    pub file_url: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSessionRequest {
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,
}
