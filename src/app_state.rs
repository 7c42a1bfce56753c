use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        GeneratedQuestionRepository, PassageRepository, PromptRepository, QuestionTypeRepository,
        SupabaseGeneratedQuestionRepository, SupabasePassageRepository, SupabasePromptRepository,
        SupabaseQuestionTypeRepository, SupabaseTextbookRepository, SupabaseUnitRepository,
        TextbookRepository, UnitRepository,
    },
    services::{
        generated_question_service::GeneratedQuestionService,
        generation_service::GenerationService,
        model_service::{OpenAiQuestionGenerator, QuestionGenerator},
        passage_service::PassageService,
        prompt_service::PromptService,
        question_type_service::QuestionTypeService,
        textbook_service::TextbookService,
        unit_service::UnitService,
    },
};

/// Every repository the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub textbooks: Arc<dyn TextbookRepository>,
    pub units: Arc<dyn UnitRepository>,
    pub passages: Arc<dyn PassageRepository>,
    pub prompts: Arc<dyn PromptRepository>,
    pub question_types: Arc<dyn QuestionTypeRepository>,
    pub generated_questions: Arc<dyn GeneratedQuestionRepository>,
}

impl Repositories {
    pub fn supabase(db: &Database) -> Self {
        Self {
            textbooks: Arc::new(SupabaseTextbookRepository::new(db)),
            units: Arc::new(SupabaseUnitRepository::new(db)),
            passages: Arc::new(SupabasePassageRepository::new(db)),
            prompts: Arc::new(SupabasePromptRepository::new(db)),
            question_types: Arc::new(SupabaseQuestionTypeRepository::new(db)),
            generated_questions: Arc::new(SupabaseGeneratedQuestionRepository::new(db)),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub textbook_service: Arc<TextbookService>,
    pub unit_service: Arc<UnitService>,
    pub passage_service: Arc<PassageService>,
    pub prompt_service: Arc<PromptService>,
    pub question_type_service: Arc<QuestionTypeService>,
    pub generated_question_service: Arc<GeneratedQuestionService>,
    pub generation_service: Arc<GenerationService>,
    pub db: Option<Database>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        let repositories = Repositories::supabase(&db);
        let generator = Arc::new(OpenAiQuestionGenerator::new(&config)?);

        let mut state = Self::from_parts(repositories, generator, config);
        state.db = Some(db);
        Ok(state)
    }

    /// Wires services over the given repositories and generator without a
    /// database connection.
    pub fn from_parts(
        repositories: Repositories,
        generator: Arc<dyn QuestionGenerator>,
        config: Config,
    ) -> Self {
        let placeholder = config.passage_placeholder.clone();

        Self {
            textbook_service: Arc::new(TextbookService::new(
                repositories.textbooks.clone(),
                repositories.units.clone(),
                repositories.passages.clone(),
            )),
            unit_service: Arc::new(UnitService::new(repositories.units.clone())),
            passage_service: Arc::new(PassageService::new(repositories.passages.clone())),
            prompt_service: Arc::new(PromptService::new(
                repositories.prompts.clone(),
                repositories.passages.clone(),
                &placeholder,
            )),
            question_type_service: Arc::new(QuestionTypeService::new(
                repositories.question_types.clone(),
                repositories.prompts.clone(),
                repositories.generated_questions.clone(),
            )),
            generated_question_service: Arc::new(GeneratedQuestionService::new(
                repositories.generated_questions.clone(),
            )),
            generation_service: Arc::new(GenerationService::new(
                repositories.question_types,
                repositories.prompts,
                repositories.passages,
                repositories.generated_questions,
                generator,
                &placeholder,
            )),
            db: None,
            config: Arc::new(config),
        }
    }
}
