use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::CourseMaterial};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    async fn create(&self, material: CourseMaterial) -> AppResult<CourseMaterial>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<CourseMaterial>>;

    /// Most recent materials for a course, newest first.
    async fn list_for_course(&self, course_id: &str, limit: i64)
        -> AppResult<Vec<CourseMaterial>>;

    /// Like `list_for_course`, restricted to materials with non-empty text.
    /// This is the candidate pool for ranking and baseline context.
    async fn list_recent_with_content(
        &self,
        course_id: &str,
        limit: i64,
    ) -> AppResult<Vec<CourseMaterial>>;

    /// Late-bound origin link, set when a sync pass finds the canonical file.
    /// Returns whether a material row was updated.
    async fn update_file_url(&self, material_id: &str, file_url: &str) -> AppResult<bool>;
}

pub struct MongoMaterialRepository {
    collection: Collection<CourseMaterial>,
}

impl MongoMaterialRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("course_materials");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for course_materials collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let course_index = IndexModel::builder()
            .keys(doc! { "course_id": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("course_recency".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(course_index).await?;

        log::info!("Successfully created indexes for course_materials collection");
        Ok(())
    }
}

#[async_trait]
impl MaterialRepository for MongoMaterialRepository {
    async fn create(&self, material: CourseMaterial) -> AppResult<CourseMaterial> {
        self.collection.insert_one(&material).await?;
        Ok(material)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<CourseMaterial>> {
        let material = self.collection.find_one(doc! { "id": id }).await?;
        Ok(material)
    }

    async fn list_for_course(
        &self,
        course_id: &str,
        limit: i64,
    ) -> AppResult<Vec<CourseMaterial>> {
        let materials = self
            .collection
            .find(doc! { "course_id": course_id })
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(materials)
    }

    async fn list_recent_with_content(
        &self,
        course_id: &str,
        limit: i64,
    ) -> AppResult<Vec<CourseMaterial>> {
        let materials = self
            .collection
            .find(doc! {
                "course_id": course_id,
                "content": { "$type": "string", "$ne": "" },
            })
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(materials)
    }

    async fn update_file_url(&self, material_id: &str, file_url: &str) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "id": material_id },
                doc! { "$set": { "file_url": file_url } },
            )
            .await?;
        Ok(result.matched_count == 1)
    }
}
