use std::{collections::HashMap, sync::Arc};

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Passage, PromptTemplate},
        dto::{
            request::{CreatePromptRequest, PreviewPromptRequest, UpdatePromptRequest},
            response::{PromptLintEntry, PromptPreviewResponse},
        },
    },
    prompting,
    repositories::{PassageRepository, PromptRepository},
};

/// Placeholder values for a template: caller-supplied `extra` values, then
/// the passage's content and title, which take precedence. Caller keys that
/// name a passage placeholder in any spelling are dropped when a passage is
/// bound.
pub fn template_values(
    passage_placeholder: &str,
    passage: Option<&Passage>,
    extra: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut values = extra.clone();

    if let Some(passage) = passage {
        let reserved = [passage_placeholder.trim().to_lowercase(), "passage_title".to_string()];
        values.retain(|key, _| !reserved.contains(&key.trim().to_lowercase()));

        values.insert(passage_placeholder.to_string(), passage.content.clone());
        values.insert(
            "passage_title".to_string(),
            passage.title.clone().unwrap_or_default(),
        );
    }

    values
}

pub struct PromptService {
    repository: Arc<dyn PromptRepository>,
    passages: Arc<dyn PassageRepository>,
    passage_placeholder: String,
}

impl PromptService {
    pub fn new(
        repository: Arc<dyn PromptRepository>,
        passages: Arc<dyn PassageRepository>,
        passage_placeholder: &str,
    ) -> Self {
        Self {
            repository,
            passages,
            passage_placeholder: passage_placeholder.to_string(),
        }
    }

    pub fn passage_placeholder(&self) -> &str {
        &self.passage_placeholder
    }

    pub async fn list_prompts(&self) -> AppResult<Vec<PromptTemplate>> {
        self.repository.find_all().await
    }

    pub async fn get_prompt(&self, id: &str) -> AppResult<PromptTemplate> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Prompt".to_string()))
    }

    pub async fn create_prompt(&self, request: CreatePromptRequest) -> AppResult<PromptTemplate> {
        request.validate()?;

        let prompt = PromptTemplate::new(request.label.trim(), &request.prompt);
        if !prompt.references(&self.passage_placeholder) {
            log::warn!(
                "Prompt '{}' does not reference [[{}]]",
                prompt.label,
                self.passage_placeholder
            );
        }

        self.repository.create(prompt).await
    }

    pub async fn update_prompt(
        &self,
        id: &str,
        request: UpdatePromptRequest,
    ) -> AppResult<PromptTemplate> {
        request.validate()?;

        let mut prompt = self.get_prompt(id).await?;
        if let Some(label) = request.label {
            prompt.label = label.trim().to_string();
        }
        if let Some(text) = request.prompt {
            prompt.prompt = text;
        }

        self.repository.update(prompt).await
    }

    pub async fn delete_prompt(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await
    }

    pub async fn get_variables(&self, id: &str) -> AppResult<Vec<String>> {
        Ok(self.get_prompt(id).await?.variables())
    }

    /// Renders the template without failing on missing values, so the admin
    /// UI can show which placeholders are still unbound.
    pub async fn preview(
        &self,
        id: &str,
        request: PreviewPromptRequest,
    ) -> AppResult<PromptPreviewResponse> {
        let prompt = self.get_prompt(id).await?;

        let passage = match request.passage_id.as_deref().map(str::trim) {
            Some(passage_id) if !passage_id.is_empty() => Some(
                self.passages
                    .find_by_id(passage_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Passage".to_string()))?,
            ),
            _ => None,
        };

        let values = template_values(&self.passage_placeholder, passage.as_ref(), &request.values);
        let rendered = prompting::render(&prompt.prompt, &values);

        Ok(PromptPreviewResponse {
            prompt: rendered.text,
            variables: prompt.variables(),
            missing: rendered.missing,
        })
    }

    /// Reports, for every stored template, whether it references the passage
    /// placeholder.
    pub async fn lint(&self) -> AppResult<Vec<PromptLintEntry>> {
        let prompts = self.repository.find_all().await?;

        Ok(prompts
            .into_iter()
            .map(|prompt| PromptLintEntry {
                has_passage_placeholder: prompt.references(&self.passage_placeholder),
                variables: prompt.variables(),
                id: prompt.id,
                label: prompt.label,
            })
            .collect())
    }
}
