use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Textbook,
        dto::{
            request::{CreateTextbookRequest, UpdateTextbookRequest},
            response::TextbookTree,
        },
    },
    repositories::{PassageRepository, TextbookRepository, UnitRepository},
    services::content_tree::build_unit_tree,
};

pub struct TextbookService {
    repository: Arc<dyn TextbookRepository>,
    units: Arc<dyn UnitRepository>,
    passages: Arc<dyn PassageRepository>,
}

impl TextbookService {
    pub fn new(
        repository: Arc<dyn TextbookRepository>,
        units: Arc<dyn UnitRepository>,
        passages: Arc<dyn PassageRepository>,
    ) -> Self {
        Self {
            repository,
            units,
            passages,
        }
    }

    pub async fn list_textbooks(&self) -> AppResult<Vec<Textbook>> {
        self.repository.find_all().await
    }

    pub async fn get_textbook(&self, id: &str) -> AppResult<Textbook> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Textbook".to_string()))
    }

    pub async fn create_textbook(&self, request: CreateTextbookRequest) -> AppResult<Textbook> {
        request.validate()?;

        let textbook = Textbook::new(request.title.trim(), request.description);
        let created = self.repository.create(textbook).await?;
        log::info!("Created textbook {}", created.id);
        Ok(created)
    }

    pub async fn update_textbook(
        &self,
        id: &str,
        request: UpdateTextbookRequest,
    ) -> AppResult<Textbook> {
        request.validate()?;

        let mut textbook = self.get_textbook(id).await?;
        if let Some(title) = request.title {
            textbook.title = title.trim().to_string();
        }
        if request.description.is_some() {
            textbook.description = request.description;
        }

        self.repository.update(textbook).await
    }

    pub async fn delete_textbook(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Deleted textbook {}", id);
        Ok(())
    }

    /// The textbook with its units nested for display.
    pub async fn get_tree(&self, id: &str) -> AppResult<TextbookTree> {
        let textbook = self.get_textbook(id).await?;
        let units = self.units.find_by_textbook(id).await?;

        let unit_ids: Vec<String> = units.iter().map(|u| u.id.clone()).collect();
        let passages = self.passages.find_by_units(&unit_ids).await?;

        Ok(TextbookTree {
            textbook,
            units: build_unit_tree(units, passages),
        })
    }
}
