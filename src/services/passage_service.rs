use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Passage,
        dto::request::{CreatePassageRequest, UpdatePassageRequest},
    },
    repositories::PassageRepository,
};

pub struct PassageService {
    repository: Arc<dyn PassageRepository>,
}

impl PassageService {
    pub fn new(repository: Arc<dyn PassageRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_passages(&self, unit_id: Option<&str>) -> AppResult<Vec<Passage>> {
        self.repository.find_all(unit_id).await
    }

    pub async fn get_passage(&self, id: &str) -> AppResult<Passage> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Passage".to_string()))
    }

    pub async fn create_passage(&self, request: CreatePassageRequest) -> AppResult<Passage> {
        request.validate()?;
        if request.content.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Passage content cannot be empty".to_string(),
            ));
        }

        let passage = Passage::new(request.unit_id, request.title, &request.content);
        self.repository.create(passage).await
    }

    pub async fn update_passage(
        &self,
        id: &str,
        request: UpdatePassageRequest,
    ) -> AppResult<Passage> {
        request.validate()?;

        let mut passage = self.get_passage(id).await?;
        if request.unit_id.is_some() {
            passage.unit_id = request.unit_id;
        }
        if request.title.is_some() {
            passage.title = request.title;
        }
        if let Some(content) = request.content {
            if content.trim().is_empty() {
                return Err(AppError::ValidationError(
                    "Passage content cannot be empty".to_string(),
                ));
            }
            passage.content = content;
        }

        self.repository.update(passage).await
    }

    pub async fn delete_passage(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
