pub mod generated_question_repository;
pub mod passage_repository;
pub mod prompt_repository;
pub mod question_type_repository;
pub mod textbook_repository;
pub mod unit_repository;

pub use generated_question_repository::{
    GeneratedQuestionRepository, SupabaseGeneratedQuestionRepository,
};
pub use passage_repository::{PassageRepository, SupabasePassageRepository};
pub use prompt_repository::{PromptRepository, SupabasePromptRepository};
pub use question_type_repository::{QuestionTypeRepository, SupabaseQuestionTypeRepository};
pub use textbook_repository::{SupabaseTextbookRepository, TextbookRepository};
pub use unit_repository::{SupabaseUnitRepository, UnitRepository};
