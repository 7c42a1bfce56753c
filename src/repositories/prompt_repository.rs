use async_trait::async_trait;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::PromptTemplate,
};

const TABLE: &str = "prompts";

#[async_trait]
pub trait PromptRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<PromptTemplate>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<PromptTemplate>>;
    async fn create(&self, prompt: PromptTemplate) -> AppResult<PromptTemplate>;
    async fn update(&self, prompt: PromptTemplate) -> AppResult<PromptTemplate>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct SupabasePromptRepository {
    db: Database,
}

impl SupabasePromptRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl PromptRepository for SupabasePromptRepository {
    async fn find_all(&self) -> AppResult<Vec<PromptTemplate>> {
        self.db.table(TABLE).order("label", true).select().await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<PromptTemplate>> {
        self.db.table(TABLE).eq("id", id).first().await
    }

    async fn create(&self, prompt: PromptTemplate) -> AppResult<PromptTemplate> {
        self.db.table(TABLE).insert(&prompt).await
    }

    async fn update(&self, prompt: PromptTemplate) -> AppResult<PromptTemplate> {
        let updated: Vec<PromptTemplate> = self
            .db
            .table(TABLE)
            .eq("id", &prompt.id)
            .update(&prompt)
            .await?;

        updated
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Prompt".to_string()))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let deleted = self.db.table(TABLE).eq("id", id).delete().await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Prompt".to_string()));
        }
        Ok(())
    }
}
