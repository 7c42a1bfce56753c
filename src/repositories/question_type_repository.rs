use async_trait::async_trait;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::QuestionType,
};

const TABLE: &str = "question_types";

#[async_trait]
pub trait QuestionTypeRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<QuestionType>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuestionType>>;
    async fn create(&self, question_type: QuestionType) -> AppResult<QuestionType>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct SupabaseQuestionTypeRepository {
    db: Database,
}

impl SupabaseQuestionTypeRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl QuestionTypeRepository for SupabaseQuestionTypeRepository {
    async fn find_all(&self) -> AppResult<Vec<QuestionType>> {
        self.db.table(TABLE).order("name", true).select().await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<QuestionType>> {
        self.db.table(TABLE).eq("id", id).first().await
    }

    async fn create(&self, question_type: QuestionType) -> AppResult<QuestionType> {
        self.db.table(TABLE).insert(&question_type).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let deleted = self.db.table(TABLE).eq("id", id).delete().await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Question type".to_string()));
        }
        Ok(())
    }
}
