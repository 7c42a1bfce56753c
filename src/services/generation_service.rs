use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::GeneratedQuestion, dto::request::GenerateQuestionRequest},
    prompting,
    repositories::{
        GeneratedQuestionRepository, PassageRepository, PromptRepository, QuestionTypeRepository,
    },
    services::{
        model_service::{parse_completion, QuestionGenerator},
        prompt_service::template_values,
    },
};

pub struct GenerationService {
    question_types: Arc<dyn QuestionTypeRepository>,
    prompts: Arc<dyn PromptRepository>,
    passages: Arc<dyn PassageRepository>,
    generated_questions: Arc<dyn GeneratedQuestionRepository>,
    generator: Arc<dyn QuestionGenerator>,
    passage_placeholder: String,
}

impl GenerationService {
    pub fn new(
        question_types: Arc<dyn QuestionTypeRepository>,
        prompts: Arc<dyn PromptRepository>,
        passages: Arc<dyn PassageRepository>,
        generated_questions: Arc<dyn GeneratedQuestionRepository>,
        generator: Arc<dyn QuestionGenerator>,
        passage_placeholder: &str,
    ) -> Self {
        Self {
            question_types,
            prompts,
            passages,
            generated_questions,
            generator,
            passage_placeholder: passage_placeholder.to_string(),
        }
    }

    /// Builds the prompt for one passage and question type, calls the AI
    /// provider once and stores the result.
    pub async fn generate(&self, request: GenerateQuestionRequest) -> AppResult<GeneratedQuestion> {
        let (passage_id, question_type_id) = request.ids()?;

        let question_type = self
            .question_types
            .find_by_id(question_type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question type".to_string()))?;
        let prompt = self
            .prompts
            .find_by_id(&question_type.prompt_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Prompt".to_string()))?;
        let passage = self
            .passages
            .find_by_id(passage_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Passage".to_string()))?;

        let mut values = template_values(&self.passage_placeholder, Some(&passage), &request.values);
        values
            .entry("question_type".to_string())
            .or_insert_with(|| question_type.name.clone());

        let rendered = prompting::render_strict(&prompt.prompt, &values)?;

        log::info!(
            "Generating '{}' question for passage {}",
            question_type.name,
            passage.id
        );
        let completion = self.generator.generate(&rendered).await?;

        let question = GeneratedQuestion::new(
            &passage.id,
            &question_type.id,
            parse_completion(&completion),
        );
        self.generated_questions.create(question).await
    }

    /// Bulk generation for passages with no questions yet is not available.
    pub async fn generate_missing(&self) -> AppResult<Vec<GeneratedQuestion>> {
        Err(AppError::NotImplemented("Not implemented yet".to_string()))
    }
}
