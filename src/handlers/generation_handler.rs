use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::{AppError, ResultExt},
    models::dto::{request::GenerateQuestionRequest, response::GeneratedQuestionsResponse},
    services::http_helpers::created_json,
};

#[post("/api/generation/generate")]
pub async fn generate_question(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .generation_service
        .generate(request.into_inner())
        .await
        .context("Failed to generate question")?;
    Ok(created_json(question))
}

/// The request body is ignored.
#[post("/api/generation/generate-missing")]
pub async fn generate_missing(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let generated = state.generation_service.generate_missing().await?;
    Ok(created_json(GeneratedQuestionsResponse::from(generated)))
}
