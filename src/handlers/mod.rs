pub mod generated_question_handler;
pub mod generation_handler;
pub mod health_handler;
pub mod passage_handler;
pub mod prompt_handler;
pub mod question_type_handler;
pub mod textbook_handler;
pub mod unit_handler;

use actix_web::web;

use crate::errors::AppError;

/// JSON body errors become `400 { "error": ... }` instead of actix's plain text.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1024 * 1024)
        .error_handler(|err, _req| {
            AppError::ValidationError(format!("Invalid request body: {}", err)).into()
        })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid query string: {}", err)).into()
    })
}

/// Registers every route. Literal paths come before `{id}` paths they overlap.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        .service(textbook_handler::list_textbooks)
        .service(textbook_handler::create_textbook)
        .service(textbook_handler::get_textbook_tree)
        .service(textbook_handler::get_textbook)
        .service(textbook_handler::update_textbook)
        .service(textbook_handler::delete_textbook)
        .service(unit_handler::list_units)
        .service(unit_handler::create_unit)
        .service(unit_handler::reorder_units)
        .service(unit_handler::delete_unit)
        .service(passage_handler::list_passages)
        .service(passage_handler::create_passage)
        .service(passage_handler::get_passage)
        .service(passage_handler::update_passage)
        .service(passage_handler::delete_passage)
        .service(prompt_handler::list_prompts)
        .service(prompt_handler::create_prompt)
        .service(prompt_handler::lint_prompts)
        .service(prompt_handler::get_prompt_variables)
        .service(prompt_handler::preview_prompt)
        .service(prompt_handler::get_prompt)
        .service(prompt_handler::update_prompt)
        .service(prompt_handler::delete_prompt)
        .service(question_type_handler::list_question_types)
        .service(question_type_handler::create_question_type)
        .service(question_type_handler::delete_question_type)
        .service(generated_question_handler::get_all_generated_questions)
        .service(generated_question_handler::get_generated_questions)
        .service(generated_question_handler::delete_by_passage)
        .service(generation_handler::generate_question)
        .service(generation_handler::generate_missing);
}
