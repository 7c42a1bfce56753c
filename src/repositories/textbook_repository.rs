use async_trait::async_trait;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Textbook,
};

const TABLE: &str = "textbooks";

#[async_trait]
pub trait TextbookRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Textbook>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Textbook>>;
    async fn create(&self, textbook: Textbook) -> AppResult<Textbook>;
    async fn update(&self, textbook: Textbook) -> AppResult<Textbook>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct SupabaseTextbookRepository {
    db: Database,
}

impl SupabaseTextbookRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl TextbookRepository for SupabaseTextbookRepository {
    async fn find_all(&self) -> AppResult<Vec<Textbook>> {
        self.db.table(TABLE).order("title", true).select().await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Textbook>> {
        self.db.table(TABLE).eq("id", id).first().await
    }

    async fn create(&self, textbook: Textbook) -> AppResult<Textbook> {
        self.db.table(TABLE).insert(&textbook).await
    }

    async fn update(&self, textbook: Textbook) -> AppResult<Textbook> {
        let updated: Vec<Textbook> = self
            .db
            .table(TABLE)
            .eq("id", &textbook.id)
            .update(&textbook)
            .await?;

        updated
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Textbook".to_string()))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let deleted = self.db.table(TABLE).eq("id", id).delete().await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Textbook".to_string()));
        }
        Ok(())
    }
}
