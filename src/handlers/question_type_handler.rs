use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::{AppError, ResultExt},
    models::dto::{request::CreateQuestionTypeRequest, response::SuccessResponse},
    services::http_helpers::{created_json, success_json},
};

#[get("/api/question-types")]
pub async fn list_question_types(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let question_types = state
        .question_type_service
        .list_question_types()
        .await
        .context("Failed to fetch question types")?;
    Ok(success_json(question_types))
}

#[post("/api/question-types")]
pub async fn create_question_type(
    state: web::Data<AppState>,
    request: web::Json<CreateQuestionTypeRequest>,
) -> Result<HttpResponse, AppError> {
    let question_type = state
        .question_type_service
        .create_question_type(request.into_inner())
        .await
        .context("Failed to create question type")?;
    Ok(created_json(question_type))
}

#[delete("/api/question-types/{id}")]
pub async fn delete_question_type(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let removed = state
        .question_type_service
        .delete_question_type(&id)
        .await
        .context("Failed to delete question type")?;
    Ok(success_json(SuccessResponse::with_message(format!(
        "Question type deleted along with {} generated questions",
        removed
    ))))
}
