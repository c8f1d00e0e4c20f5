use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::CourseMaterial,
    repositories::MaterialRepository,
};

/// Thin layer over the material store: validation on ingest, listing for the
/// manager UI, and the late-bound origin-link update reported by the sync
/// step. Text extraction happens upstream; content arrives here as plain
/// text or not at all.
pub struct MaterialService {
    materials: Arc<dyn MaterialRepository>,
}

impl MaterialService {
    pub fn new(materials: Arc<dyn MaterialRepository>) -> Self {
        Self { materials }
    }

    pub async fn upload(
        &self,
        course_id: &str,
        title: &str,
        content: Option<String>,
        file_url: Option<String>,
    ) -> AppResult<CourseMaterial> {
        if content.as_deref().map_or(true, |c| c.trim().is_empty()) && file_url.is_none() {
            return Err(AppError::ValidationError(
                "material needs extracted text or a file URL".to_string(),
            ));
        }

        let material = CourseMaterial::new(course_id, title, content, file_url);
        let material = self.materials.create(material).await?;

        log::info!(
            "stored course material '{}' for course {}",
            material.title,
            course_id
        );
        Ok(material)
    }

    pub async fn list(&self, course_id: &str, limit: i64) -> AppResult<Vec<CourseMaterial>> {
        self.materials.list_for_course(course_id, limit).await
    }

    pub async fn set_file_url(&self, material_id: &str, file_url: &str) -> AppResult<()> {
        let updated = self.materials.update_file_url(material_id, file_url).await?;
        if !updated {
            return Err(AppError::NotFound(format!(
                "Course material with id '{material_id}' not found"
            )));
        }
        Ok(())
    }
}
