use async_trait::async_trait;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Passage,
};

const TABLE: &str = "passages";

#[async_trait]
pub trait PassageRepository: Send + Sync {
    async fn find_all(&self, unit_id: Option<&str>) -> AppResult<Vec<Passage>>;
    async fn find_by_units(&self, unit_ids: &[String]) -> AppResult<Vec<Passage>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Passage>>;
    async fn create(&self, passage: Passage) -> AppResult<Passage>;
    async fn update(&self, passage: Passage) -> AppResult<Passage>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct SupabasePassageRepository {
    db: Database,
}

impl SupabasePassageRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl PassageRepository for SupabasePassageRepository {
    async fn find_all(&self, unit_id: Option<&str>) -> AppResult<Vec<Passage>> {
        let mut query = self.db.table(TABLE);
        if let Some(unit_id) = unit_id {
            query = query.eq("unit_id", unit_id);
        }
        query.order("created_at", true).select().await
    }

    async fn find_by_units(&self, unit_ids: &[String]) -> AppResult<Vec<Passage>> {
        if unit_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.db
            .table(TABLE)
            .in_list("unit_id", unit_ids)
            .order("created_at", true)
            .select()
            .await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Passage>> {
        self.db.table(TABLE).eq("id", id).first().await
    }

    async fn create(&self, passage: Passage) -> AppResult<Passage> {
        self.db.table(TABLE).insert(&passage).await
    }

    async fn update(&self, passage: Passage) -> AppResult<Passage> {
        let updated: Vec<Passage> = self
            .db
            .table(TABLE)
            .eq("id", &passage.id)
            .update(&passage)
            .await?;

        updated
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("Passage".to_string()))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let deleted = self.db.table(TABLE).eq("id", id).delete().await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Passage".to_string()));
        }
        Ok(())
    }
}
