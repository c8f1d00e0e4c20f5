use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{MaterialListQuery, SetFileUrlRequest, UploadMaterialRequest},
    models::dto::response::{ApiMessage, MaterialSummaryDto},
};

const MATERIAL_LIST_LIMIT: i64 = 100;

/// Stores an already-extracted material. PDF and slide text extraction
/// happens upstream; this endpoint receives plain text and/or a file link.
#[post("/api/materials")]
pub async fn upload_material(
    state: web::Data<AppState>,
    request: web::Json<UploadMaterialRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let material = state
        .material_service
        .upload(
            &request.course_id,
            &request.title,
            request.content,
            request.file_url,
        )
        .await?;

    Ok(HttpResponse::Created().json(MaterialSummaryDto::from(material)))
}

#[get("/api/materials")]
pub async fn list_materials(
    state: web::Data<AppState>,
    query: web::Query<MaterialListQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    query.validate()?;

    let materials = state
        .material_service
        .list(&query.course_id, MATERIAL_LIST_LIMIT)
        .await?;

    let summaries: Vec<MaterialSummaryDto> =
        materials.into_iter().map(MaterialSummaryDto::from).collect();

    Ok(HttpResponse::Ok().json(summaries))
}

/// Called by the sync step once it discovers the canonical origin file.
#[post("/api/materials/fileUrl")]
pub async fn set_material_file_url(
    state: web::Data<AppState>,
    request: web::Json<SetFileUrlRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    state
        .material_service
        .set_file_url(&request.material_id, &request.file_url)
        .await?;

    Ok(HttpResponse::Ok().json(ApiMessage {
        message: "file URL updated".to_string(),
    }))
}
