use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::{AppError, ResultExt},
    models::dto::{
        request::{CreatePassageRequest, PassageListQuery, UpdatePassageRequest},
        response::SuccessResponse,
    },
    services::http_helpers::{created_json, success_json},
};

#[get("/api/passages")]
pub async fn list_passages(
    state: web::Data<AppState>,
    query: web::Query<PassageListQuery>,
) -> Result<HttpResponse, AppError> {
    let passages = state
        .passage_service
        .list_passages(query.unit_id.as_deref())
        .await
        .context("Failed to fetch passages")?;
    Ok(success_json(passages))
}

#[post("/api/passages")]
pub async fn create_passage(
    state: web::Data<AppState>,
    request: web::Json<CreatePassageRequest>,
) -> Result<HttpResponse, AppError> {
    let passage = state
        .passage_service
        .create_passage(request.into_inner())
        .await
        .context("Failed to create passage")?;
    Ok(created_json(passage))
}

#[get("/api/passages/{id}")]
pub async fn get_passage(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let passage = state
        .passage_service
        .get_passage(&id)
        .await
        .context("Failed to fetch passage")?;
    Ok(success_json(passage))
}

#[put("/api/passages/{id}")]
pub async fn update_passage(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdatePassageRequest>,
) -> Result<HttpResponse, AppError> {
    let passage = state
        .passage_service
        .update_passage(&id, request.into_inner())
        .await
        .context("Failed to update passage")?;
    Ok(success_json(passage))
}

#[delete("/api/passages/{id}")]
pub async fn delete_passage(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state
        .passage_service
        .delete_passage(&id)
        .await
        .context("Failed to delete passage")?;
    Ok(success_json(SuccessResponse::ok()))
}
