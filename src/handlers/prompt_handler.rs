use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::{AppError, ResultExt},
    models::dto::{
        request::{CreatePromptRequest, PreviewPromptRequest, UpdatePromptRequest},
        response::{SuccessResponse, VariablesResponse},
    },
    services::http_helpers::{created_json, success_json},
};

#[get("/api/prompts")]
pub async fn list_prompts(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let prompts = state
        .prompt_service
        .list_prompts()
        .await
        .context("Failed to fetch prompts")?;
    Ok(success_json(prompts))
}

#[post("/api/prompts")]
pub async fn create_prompt(
    state: web::Data<AppState>,
    request: web::Json<CreatePromptRequest>,
) -> Result<HttpResponse, AppError> {
    let prompt = state
        .prompt_service
        .create_prompt(request.into_inner())
        .await
        .context("Failed to create prompt")?;
    Ok(created_json(prompt))
}

#[get("/api/prompts/lint")]
pub async fn lint_prompts(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let report = state
        .prompt_service
        .lint()
        .await
        .context("Failed to lint prompts")?;
    Ok(success_json(report))
}

#[get("/api/prompts/{id}")]
pub async fn get_prompt(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let prompt = state
        .prompt_service
        .get_prompt(&id)
        .await
        .context("Failed to fetch prompt")?;
    Ok(success_json(prompt))
}

#[get("/api/prompts/{id}/variables")]
pub async fn get_prompt_variables(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let variables = state
        .prompt_service
        .get_variables(&id)
        .await
        .context("Failed to fetch prompt")?;
    Ok(success_json(VariablesResponse { variables }))
}

#[post("/api/prompts/{id}/preview")]
pub async fn preview_prompt(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: Option<web::Json<PreviewPromptRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = request.map(web::Json::into_inner).unwrap_or_default();
    let preview = state
        .prompt_service
        .preview(&id, request)
        .await
        .context("Failed to render prompt")?;
    Ok(success_json(preview))
}

#[put("/api/prompts/{id}")]
pub async fn update_prompt(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdatePromptRequest>,
) -> Result<HttpResponse, AppError> {
    let prompt = state
        .prompt_service
        .update_prompt(&id, request.into_inner())
        .await
        .context("Failed to update prompt")?;
    Ok(success_json(prompt))
}

#[delete("/api/prompts/{id}")]
pub async fn delete_prompt(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state
        .prompt_service
        .delete_prompt(&id)
        .await
        .context("Failed to delete prompt")?;
    Ok(success_json(SuccessResponse::ok()))
}
