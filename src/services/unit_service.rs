use std::sync::Arc;

use futures::future::join_all;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Unit,
        dto::request::{CreateUnitRequest, UnitOrder},
    },
    repositories::UnitRepository,
    services::content_tree::normalized_order,
};

pub struct UnitService {
    repository: Arc<dyn UnitRepository>,
}

impl UnitService {
    pub fn new(repository: Arc<dyn UnitRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_units(&self, textbook_id: Option<&str>) -> AppResult<Vec<Unit>> {
        match textbook_id {
            Some(textbook_id) => self.repository.find_by_textbook(textbook_id).await,
            None => self.repository.find_all().await,
        }
    }

    pub async fn create_unit(&self, request: CreateUnitRequest) -> AppResult<Unit> {
        request.validate()?;

        let order_index = match request.order_index {
            Some(order_index) => order_index,
            None => self.next_order_index(&request.textbook_id, request.parent_id.as_deref()).await?,
        };

        let unit = Unit::new(
            &request.textbook_id,
            request.parent_id.filter(|p| !p.trim().is_empty()),
            request.title.trim(),
            order_index,
        );
        self.repository.create(unit).await
    }

    async fn next_order_index(&self, textbook_id: &str, parent_id: Option<&str>) -> AppResult<i32> {
        let siblings = self.repository.find_by_textbook(textbook_id).await?;
        let max = siblings
            .iter()
            .filter(|u| u.parent_id.as_deref() == parent_id)
            .map(|u| u.order_index)
            .max()
            .unwrap_or(0);
        Ok(max + 1)
    }

    pub async fn delete_unit(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }

    /// Applies every `order_index` with one independent update per unit, all
    /// issued concurrently. Updates that succeed are kept even if others fail.
    pub async fn reorder(&self, units: &[UnitOrder]) -> AppResult<()> {
        let updates = units
            .iter()
            .map(|u| self.repository.update_order_index(&u.id, u.order_index));
        let results = join_all(updates).await;

        let failures: Vec<(&UnitOrder, AppError)> = units
            .iter()
            .zip(results)
            .filter_map(|(unit, result)| result.err().map(|e| (unit, e)))
            .collect();

        if let Some((unit, first)) = failures.first() {
            log::error!(
                "{} of {} unit order updates failed; first failure on unit {}: {}",
                failures.len(),
                units.len(),
                unit.id,
                first
            );
            return Err(AppError::DatabaseError(format!(
                "{} of {} updates failed",
                failures.len(),
                units.len()
            )));
        }

        log::info!("Reordered {} units", units.len());
        Ok(())
    }

    /// Renumbers each sibling group of a textbook to `1..=n`. Returns the
    /// number of units whose `order_index` changed.
    pub async fn normalize_order(&self, textbook_id: &str) -> AppResult<usize> {
        let units = self.repository.find_by_textbook(textbook_id).await?;
        let changes = normalized_order(units);
        if changes.is_empty() {
            return Ok(0);
        }

        self.reorder(&changes).await?;
        Ok(changes.len())
    }
}
