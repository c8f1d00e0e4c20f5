use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{Quiz, QuizQuestion},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create_quiz(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn insert_questions(&self, questions: Vec<QuizQuestion>) -> AppResult<()>;
    async fn find_quiz(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn find_question(&self, id: &str) -> AppResult<Option<QuizQuestion>>;
    async fn questions_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>>;
}

pub struct MongoQuizRepository {
    quizzes: Collection<Quiz>,
    questions: Collection<QuizQuestion>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            quizzes: db.get_collection("quizzes"),
            questions: db.get_collection("quiz_questions"),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes and quiz_questions collections");

        let quiz_id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let question_id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let question_quiz_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("quiz_id".to_string())
                    .build(),
            )
            .build();

        self.quizzes.create_index(quiz_id_index).await?;
        self.questions.create_index(question_id_index).await?;
        self.questions.create_index(question_quiz_index).await?;

        log::info!("Successfully created indexes for quizzes and quiz_questions collections");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create_quiz(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.quizzes.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn insert_questions(&self, questions: Vec<QuizQuestion>) -> AppResult<()> {
        if questions.is_empty() {
            return Ok(());
        }
        self.questions.insert_many(questions).await?;
        Ok(())
    }

    async fn find_quiz(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.quizzes.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn find_question(&self, id: &str) -> AppResult<Option<QuizQuestion>> {
        let question = self.questions.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn questions_for_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizQuestion>> {
        let questions = self
            .questions
            .find(doc! { "quiz_id": quiz_id })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }
}
