use actix_web::{delete, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::CreateSessionRequest,
    models::dto::response::{ApiMessage, SessionResponse},
};

#[post("/api/session")]
pub async fn create_session(
    state: web::Data<AppState>,
    request: web::Json<CreateSessionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let (token, expires_at) = state.session_service.create(&request.user_id).await?;

    Ok(HttpResponse::Created().json(SessionResponse { token, expires_at }))
}

#[delete("/api/session/{token}")]
pub async fn invalidate_session(
    state: web::Data<AppState>,
    token: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.session_service.invalidate(&token.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiMessage {
        message: "session invalidated".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_create_session_endpoint_structure() {
        let app = test::init_service(App::new().service(create_session)).await;

        let req = test::TestRequest::post()
            .uri("/api/session")
            .set_json(serde_json::json!({ "user_id": "user-1" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        // Without application state, this will fail, but we're testing the
        // endpoint exists and routes.
        assert!(resp.status().is_server_error());
    }
}
