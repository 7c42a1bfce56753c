use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::{AppError, ResultExt},
    models::dto::{
        request::{CreateTextbookRequest, UpdateTextbookRequest},
        response::SuccessResponse,
    },
    services::http_helpers::{created_json, success_json},
};

#[get("/api/textbooks")]
pub async fn list_textbooks(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let textbooks = state
        .textbook_service
        .list_textbooks()
        .await
        .context("Failed to fetch textbooks")?;
    Ok(success_json(textbooks))
}

#[post("/api/textbooks")]
pub async fn create_textbook(
    state: web::Data<AppState>,
    request: web::Json<CreateTextbookRequest>,
) -> Result<HttpResponse, AppError> {
    let textbook = state
        .textbook_service
        .create_textbook(request.into_inner())
        .await
        .context("Failed to create textbook")?;
    Ok(created_json(textbook))
}

#[get("/api/textbooks/{id}")]
pub async fn get_textbook(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let textbook = state
        .textbook_service
        .get_textbook(&id)
        .await
        .context("Failed to fetch textbook")?;
    Ok(success_json(textbook))
}

#[get("/api/textbooks/{id}/tree")]
pub async fn get_textbook_tree(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let tree = state
        .textbook_service
        .get_tree(&id)
        .await
        .context("Failed to build textbook tree")?;
    Ok(success_json(tree))
}

#[put("/api/textbooks/{id}")]
pub async fn update_textbook(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateTextbookRequest>,
) -> Result<HttpResponse, AppError> {
    let textbook = state
        .textbook_service
        .update_textbook(&id, request.into_inner())
        .await
        .context("Failed to update textbook")?;
    Ok(success_json(textbook))
}

#[delete("/api/textbooks/{id}")]
pub async fn delete_textbook(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state
        .textbook_service
        .delete_textbook(&id)
        .await
        .context("Failed to delete textbook")?;
    Ok(success_json(SuccessResponse::ok()))
}
