use async_trait::async_trait;
use serde_json::json;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Unit,
};

const TABLE: &str = "units";

#[async_trait]
pub trait UnitRepository: Send + Sync {
    /// Units of one textbook, ordered by `order_index`.
    async fn find_by_textbook(&self, textbook_id: &str) -> AppResult<Vec<Unit>>;
    async fn find_all(&self) -> AppResult<Vec<Unit>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Unit>>;
    async fn create(&self, unit: Unit) -> AppResult<Unit>;
    async fn update_order_index(&self, id: &str, order_index: i32) -> AppResult<()>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct SupabaseUnitRepository {
    db: Database,
}

impl SupabaseUnitRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }
}

#[async_trait]
impl UnitRepository for SupabaseUnitRepository {
    async fn find_by_textbook(&self, textbook_id: &str) -> AppResult<Vec<Unit>> {
        self.db
            .table(TABLE)
            .eq("textbook_id", textbook_id)
            .order("order_index", true)
            .select()
            .await
    }

    async fn find_all(&self) -> AppResult<Vec<Unit>> {
        self.db
            .table(TABLE)
            .order("textbook_id", true)
            .order("order_index", true)
            .select()
            .await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Unit>> {
        self.db.table(TABLE).eq("id", id).first().await
    }

    async fn create(&self, unit: Unit) -> AppResult<Unit> {
        self.db.table(TABLE).insert(&unit).await
    }

    async fn update_order_index(&self, id: &str, order_index: i32) -> AppResult<()> {
        let updated: Vec<Unit> = self
            .db
            .table(TABLE)
            .eq("id", id)
            .update(&json!({ "order_index": order_index }))
            .await?;

        if updated.is_empty() {
            return Err(AppError::NotFound(format!("Unit '{}'", id)));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let deleted = self.db.table(TABLE).eq("id", id).delete().await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Unit".to_string()));
        }
        Ok(())
    }
}
