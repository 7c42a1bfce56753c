pub mod content_tree;
pub mod generated_question_service;
pub mod generation_service;
pub mod http_helpers;
pub mod model_service;
pub mod passage_service;
pub mod prompt_service;
pub mod question_type_service;
pub mod textbook_service;
pub mod unit_service;
