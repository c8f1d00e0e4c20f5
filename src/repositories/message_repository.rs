use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Message};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn append(&self, message: Message) -> AppResult<Message>;

    /// The earliest tutor-authored message: the seeded baseline context.
    async fn first_tutor_message(&self, conversation_id: &str) -> AppResult<Option<Message>>;

    /// Last `limit` messages, newest first. Callers reverse for chronology.
    async fn recent(&self, conversation_id: &str, limit: i64) -> AppResult<Vec<Message>>;
}

pub struct MongoMessageRepository {
    collection: Collection<Message>,
}

impl MongoMessageRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("messages");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for messages collection");

        let conversation_index = IndexModel::builder()
            .keys(doc! { "conversation_id": 1, "sent_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("conversation_order".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(conversation_index).await?;

        log::info!("Successfully created indexes for messages collection");
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for MongoMessageRepository {
    async fn append(&self, message: Message) -> AppResult<Message> {
        self.collection.insert_one(&message).await?;
        Ok(message)
    }

    async fn first_tutor_message(&self, conversation_id: &str) -> AppResult<Option<Message>> {
        let message = self
            .collection
            .find_one(doc! { "conversation_id": conversation_id, "from_tutor": true })
            .sort(doc! { "sent_at": 1 })
            .await?;
        Ok(message)
    }

    async fn recent(&self, conversation_id: &str, limit: i64) -> AppResult<Vec<Message>> {
        let messages = self
            .collection
            .find(doc! { "conversation_id": conversation_id })
            .sort(doc! { "sent_at": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }
}
