use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::QuizAttempt};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizAttemptRepository: Send + Sync {
    async fn record(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt>;

    /// Which of the given question ids this user has already attempted.
    async fn attempted_question_ids(
        &self,
        user_id: &str,
        question_ids: &[String],
    ) -> AppResult<Vec<String>>;

    /// (total, correct) attempt counts for a user within a course.
    async fn stats(&self, user_id: &str, course_id: &str) -> AppResult<(u64, u64)>;
}

pub struct MongoQuizAttemptRepository {
    collection: Collection<QuizAttempt>,
}

impl MongoQuizAttemptRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_attempts");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_attempts collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_question_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "question_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_question".to_string())
                    .build(),
            )
            .build();

        let user_course_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "course_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_course".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_question_index).await?;
        self.collection.create_index(user_course_index).await?;

        log::info!("Successfully created indexes for quiz_attempts collection");
        Ok(())
    }
}

#[async_trait]
impl QuizAttemptRepository for MongoQuizAttemptRepository {
    async fn record(&self, attempt: QuizAttempt) -> AppResult<QuizAttempt> {
        self.collection.insert_one(&attempt).await?;
        Ok(attempt)
    }

    async fn attempted_question_ids(
        &self,
        user_id: &str,
        question_ids: &[String],
    ) -> AppResult<Vec<String>> {
        let values = self
            .collection
            .distinct(
                "question_id",
                doc! {
                    "user_id": user_id,
                    "question_id": { "$in": question_ids.to_vec() },
                },
            )
            .await?;

        Ok(values
            .into_iter()
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect())
    }

    async fn stats(&self, user_id: &str, course_id: &str) -> AppResult<(u64, u64)> {
        let filter = doc! { "user_id": user_id, "course_id": course_id };

        let total = self.collection.count_documents(filter.clone()).await?;

        let mut correct_filter = filter;
        correct_filter.insert("is_correct", true);
        let correct = self.collection.count_documents(correct_filter).await?;

        Ok((total, correct))
    }
}
