use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::limits::QUIZ_SAMPLE_SIZE,
    errors::AppError,
    models::dto::request::{
        GenerateQuizRequest, ProgressQuery, QuizAttemptRequest, QuizQuestionsQuery,
    },
    models::dto::response::{
        AttemptResponse, GeneratedQuizResponse, QuizQuestionsResponse, SampledQuestionDto,
    },
};

const DEFAULT_QUESTION_COUNT: u8 = 5;

#[post("/api/generateQuiz")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let (quiz, questions) = state
        .quiz_service
        .generate_quiz(
            &request.course_id,
            request.material_id.as_deref(),
            request.topic.as_deref(),
            request.num_questions.unwrap_or(DEFAULT_QUESTION_COUNT),
        )
        .await?;

    Ok(HttpResponse::Created().json(GeneratedQuizResponse { quiz, questions }))
}

#[get("/api/quiz/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

/// A bounded, non-repeating round of questions for one user.
#[get("/api/quizQuestions")]
pub async fn quiz_questions(
    state: web::Data<AppState>,
    query: web::Query<QuizQuestionsQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let questions = state
        .question_sampler
        .select_questions(&query.user_id, &query.quiz_id, QUIZ_SAMPLE_SIZE)
        .await?;

    let questions: Vec<SampledQuestionDto> =
        questions.into_iter().map(SampledQuestionDto::from).collect();

    Ok(HttpResponse::Ok().json(QuizQuestionsResponse { questions }))
}

#[post("/api/quizAttempt")]
pub async fn record_attempt(
    state: web::Data<AppState>,
    request: web::Json<QuizAttemptRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let (attempt, question) = state
        .quiz_attempt_service
        .record_attempt(
            &request.user_id,
            &request.question_id,
            request.selected_index,
            request.course_id,
        )
        .await?;

    Ok(HttpResponse::Created().json(AttemptResponse {
        is_correct: attempt.is_correct,
        explanation: question.explanation,
    }))
}

#[get("/api/progress")]
pub async fn progress(
    state: web::Data<AppState>,
    query: web::Query<ProgressQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let progress = state
        .quiz_attempt_service
        .progress(&query.user_id, &query.course_id)
        .await?;

    Ok(HttpResponse::Ok().json(progress))
}
