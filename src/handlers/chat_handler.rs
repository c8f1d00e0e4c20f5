use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{NewConversationRequest, PrewarmRequest, SendMessageRequest},
    models::dto::response::{NewConversationResponse, PrewarmResponse, SendMessageResponse},
};

#[get("/api/health")]
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.db.health_check().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "status": "ok" })))
}

/// Assigns a pre-created conversation slot to the user.
#[post("/api/newConversation")]
pub async fn new_conversation(
    state: web::Data<AppState>,
    request: web::Json<NewConversationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let conversation_id = state
        .chat_service
        .start_session(&request.user_id, &request.course_id)
        .await?;

    Ok(HttpResponse::Ok().json(NewConversationResponse { conversation_id }))
}

/// Maintenance endpoint: tops up the blank-conversation pool for a course.
#[post("/api/prewarm")]
pub async fn prewarm(
    state: web::Data<AppState>,
    request: web::Json<PrewarmRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let created = state
        .conversation_service
        .prewarm(&request.course_id, request.count)
        .await?;

    Ok(HttpResponse::Created().json(PrewarmResponse { created }))
}

#[post("/api/sendMessage")]
pub async fn send_message(
    state: web::Data<AppState>,
    request: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let (answer, citations) = state
        .chat_service
        .ask(&request.user_id, &request.course_id, &request.question)
        .await?;

    Ok(HttpResponse::Ok().json(SendMessageResponse { answer, citations }))
}
