use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::QuestionType, dto::request::CreateQuestionTypeRequest},
    repositories::{GeneratedQuestionRepository, PromptRepository, QuestionTypeRepository},
};

pub struct QuestionTypeService {
    repository: Arc<dyn QuestionTypeRepository>,
    prompts: Arc<dyn PromptRepository>,
    generated_questions: Arc<dyn GeneratedQuestionRepository>,
}

impl QuestionTypeService {
    pub fn new(
        repository: Arc<dyn QuestionTypeRepository>,
        prompts: Arc<dyn PromptRepository>,
        generated_questions: Arc<dyn GeneratedQuestionRepository>,
    ) -> Self {
        Self {
            repository,
            prompts,
            generated_questions,
        }
    }

    pub async fn list_question_types(&self) -> AppResult<Vec<QuestionType>> {
        self.repository.find_all().await
    }

    pub async fn get_question_type(&self, id: &str) -> AppResult<QuestionType> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question type".to_string()))
    }

    /// The referenced prompt must exist.
    pub async fn create_question_type(
        &self,
        request: CreateQuestionTypeRequest,
    ) -> AppResult<QuestionType> {
        request.validate()?;

        let prompt_id = request.prompt_id.trim();
        if self.prompts.find_by_id(prompt_id).await?.is_none() {
            return Err(AppError::NotFound("Prompt".to_string()));
        }

        let question_type = QuestionType::new(request.name.trim(), prompt_id, request.description);
        let created = self.repository.create(question_type).await?;
        log::info!("Created question type {} ({})", created.name, created.id);
        Ok(created)
    }

    /// Deletes the type's generated questions first, then the type. A failure
    /// between the two leaves the questions deleted and the type in place.
    pub async fn delete_question_type(&self, id: &str) -> AppResult<u64> {
        self.get_question_type(id).await?;

        let removed = self.generated_questions.delete_by_question_type(id).await?;
        self.repository.delete(id).await?;

        log::info!(
            "Deleted question type {} and {} generated questions",
            id,
            removed
        );
        Ok(removed)
    }
}
