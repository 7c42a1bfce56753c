use actix_web::{delete, get, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::{AppError, ResultExt},
    models::dto::{
        request::{DeleteByPassageRequest, GeneratedQuestionQuery},
        response::{GeneratedQuestionsResponse, SuccessResponse},
    },
    services::http_helpers::success_json,
};

#[get("/api/generated-questions/all")]
pub async fn get_all_generated_questions(
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .generated_question_service
        .list_all()
        .await
        .context("Failed to fetch generated questions")?;
    Ok(success_json(GeneratedQuestionsResponse::from(questions)))
}

#[get("/api/generated-questions")]
pub async fn get_generated_questions(
    state: web::Data<AppState>,
    query: web::Query<GeneratedQuestionQuery>,
) -> Result<HttpResponse, AppError> {
    let passage_id = query.passage_id()?;
    let questions = state
        .generated_question_service
        .list_for_passage(passage_id, query.question_type_id())
        .await
        .context("Failed to fetch generated questions")?;
    Ok(success_json(GeneratedQuestionsResponse::from(questions)))
}

#[delete("/api/generated-questions/delete-by-passage")]
pub async fn delete_by_passage(
    state: web::Data<AppState>,
    request: web::Json<DeleteByPassageRequest>,
) -> Result<HttpResponse, AppError> {
    let (passage_id, question_type_id) = request.ids()?;
    let deleted = state
        .generated_question_service
        .delete_by_passage(passage_id, question_type_id)
        .await
        .context("Failed to delete generated questions")?;
    Ok(success_json(SuccessResponse::with_message(format!(
        "Deleted {} generated questions",
        deleted
    ))))
}
