use async_trait::async_trait;

use crate::{db::Database, errors::AppResult, models::domain::GeneratedQuestion};

const TABLE: &str = "generated_questions";

#[async_trait]
pub trait GeneratedQuestionRepository: Send + Sync {
    /// Every generated question, newest first.
    async fn find_all(&self) -> AppResult<Vec<GeneratedQuestion>>;
    async fn find_by_passage(
        &self,
        passage_id: &str,
        question_type_id: Option<&str>,
    ) -> AppResult<Vec<GeneratedQuestion>>;
    async fn create(&self, question: GeneratedQuestion) -> AppResult<GeneratedQuestion>;
    /// Returns how many rows were deleted; zero is not an error.
    async fn delete_by_passage_and_type(
        &self,
        passage_id: &str,
        question_type_id: &str,
    ) -> AppResult<u64>;
    async fn delete_by_question_type(&self, question_type_id: &str) -> AppResult<u64>;
    async fn delete_by_ids(&self, ids: &[String]) -> AppResult<u64>;
}

pub struct SupabaseGeneratedQuestionRepository {
    db: Database,
}

impl SupabaseGeneratedQuestionRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl GeneratedQuestionRepository for SupabaseGeneratedQuestionRepository {
    async fn find_all(&self) -> AppResult<Vec<GeneratedQuestion>> {
        self.db
            .table(TABLE)
            .order("created_at", false)
            .select()
            .await
    }

    async fn find_by_passage(
        &self,
        passage_id: &str,
        question_type_id: Option<&str>,
    ) -> AppResult<Vec<GeneratedQuestion>> {
        let mut query = self.db.table(TABLE).eq("passage_id", passage_id);
        if let Some(question_type_id) = question_type_id {
            query = query.eq("question_type_id", question_type_id);
        }
        query.order("created_at", false).select().await
    }

    async fn create(&self, question: GeneratedQuestion) -> AppResult<GeneratedQuestion> {
        self.db.table(TABLE).insert(&question).await
    }

    async fn delete_by_passage_and_type(
        &self,
        passage_id: &str,
        question_type_id: &str,
    ) -> AppResult<u64> {
        self.db
            .table(TABLE)
            .eq("passage_id", passage_id)
            .eq("question_type_id", question_type_id)
            .delete()
            .await
    }

    async fn delete_by_question_type(&self, question_type_id: &str) -> AppResult<u64> {
        self.db
            .table(TABLE)
            .eq("question_type_id", question_type_id)
            .delete()
            .await
    }

    async fn delete_by_ids(&self, ids: &[String]) -> AppResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        self.db.table(TABLE).in_list("id", ids).delete().await
    }
}
