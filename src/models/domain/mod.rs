pub mod generated_question;
pub mod passage;
pub mod prompt_template;
pub mod question_type;
pub mod textbook;
pub mod unit;
pub use generated_question::GeneratedQuestion;
pub use passage::Passage;
pub use prompt_template::PromptTemplate;
pub use question_type::QuestionType;
pub use textbook::Textbook;
pub use unit::Unit;
