use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::{AppError, ResultExt},
    models::dto::{
        request::{CreateUnitRequest, ReorderUnitsRequest, UnitListQuery},
        response::SuccessResponse,
    },
    services::http_helpers::{created_json, success_json},
};

#[get("/api/units")]
pub async fn list_units(
    state: web::Data<AppState>,
    query: web::Query<UnitListQuery>,
) -> Result<HttpResponse, AppError> {
    let units = state
        .unit_service
        .list_units(query.textbook_id.as_deref())
        .await
        .context("Failed to fetch units")?;
    Ok(success_json(units))
}

#[post("/api/units")]
pub async fn create_unit(
    state: web::Data<AppState>,
    request: web::Json<CreateUnitRequest>,
) -> Result<HttpResponse, AppError> {
    let unit = state
        .unit_service
        .create_unit(request.into_inner())
        .await
        .context("Failed to create unit")?;
    Ok(created_json(unit))
}

#[put("/api/units/reorder")]
pub async fn reorder_units(
    state: web::Data<AppState>,
    request: web::Json<ReorderUnitsRequest>,
) -> Result<HttpResponse, AppError> {
    let units = request.into_inner().into_units()?;
    state
        .unit_service
        .reorder(&units)
        .await
        .context("Failed to reorder units")?;
    Ok(success_json(SuccessResponse::ok()))
}

#[delete("/api/units/{id}")]
pub async fn delete_unit(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state
        .unit_service
        .delete_unit(&id)
        .await
        .context("Failed to delete unit")?;
    Ok(success_json(SuccessResponse::ok()))
}
