use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Conversation};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn insert(&self, conversation: Conversation) -> AppResult<Conversation>;

    /// Oldest unassigned conversation for the course, if any.
    async fn find_unassigned(&self, course_id: &str) -> AppResult<Option<Conversation>>;

    /// Conditional assignment: flips `assigned` only if it is still false.
    /// Returns whether this caller won the row. Callers that get `false` lost
    /// a race and should re-select from the remaining pool.
    async fn claim(&self, conversation_id: &str, user_id: &str) -> AppResult<bool>;

    /// Most recently assigned conversation for the user/course pair.
    async fn latest_assigned(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Conversation>>;

    async fn count_unassigned(&self, course_id: &str) -> AppResult<u64>;
}

pub struct MongoConversationRepository {
    collection: Collection<Conversation>,
}

impl MongoConversationRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("conversations");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for conversations collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let pool_index = IndexModel::builder()
            .keys(doc! { "course_id": 1, "assigned": 1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("course_pool".to_string())
                    .build(),
            )
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "course_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_course".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(pool_index).await?;
        self.collection.create_index(user_index).await?;

        log::info!("Successfully created indexes for conversations collection");
        Ok(())
    }
}

#[async_trait]
impl ConversationRepository for MongoConversationRepository {
    async fn insert(&self, conversation: Conversation) -> AppResult<Conversation> {
        self.collection.insert_one(&conversation).await?;
        Ok(conversation)
    }

    async fn find_unassigned(&self, course_id: &str) -> AppResult<Option<Conversation>> {
        let conversation = self
            .collection
            .find_one(doc! { "course_id": course_id, "assigned": false })
            .sort(doc! { "created_at": 1 })
            .await?;
        Ok(conversation)
    }

    async fn claim(&self, conversation_id: &str, user_id: &str) -> AppResult<bool> {
        // Single conditional update guarded on the unassigned state; two
        // concurrent callers cannot both see modified_count == 1.
        let result = self
            .collection
            .update_one(
                doc! { "id": conversation_id, "assigned": false },
                doc! { "$set": { "assigned": true, "user_id": user_id } },
            )
            .await?;
        Ok(result.modified_count == 1)
    }

    async fn latest_assigned(
        &self,
        user_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Conversation>> {
        let conversation = self
            .collection
            .find_one(doc! { "course_id": course_id, "user_id": user_id, "assigned": true })
            .sort(doc! { "created_at": -1 })
            .await?;
        Ok(conversation)
    }

    async fn count_unassigned(&self, course_id: &str) -> AppResult<u64> {
        let count = self
            .collection
            .count_documents(doc! { "course_id": course_id, "assigned": false })
            .await?;
        Ok(count)
    }
}
