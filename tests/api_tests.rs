mod common;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use common::TestStore;
use content_admin_server::{app_state::AppState, handlers, repositories::UnitRepository};

async fn send(state: AppState, req: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(&app, req.to_request()).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("response body should be JSON")
    };
    (status, json)
}

#[actix_web::test]
async fn test_health_endpoints() {
    let store = TestStore::new();

    let (status, body) = send(store.state(), test::TestRequest::get().uri("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(store.state(), test::TestRequest::get().uri("/health/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[actix_web::test]
async fn test_get_all_generated_questions_returns_count() {
    let store = TestStore::new();
    store.seed_question("q-1", "p-1", "qt-1", json!({ "q": 1 })).await;
    store.seed_question("q-2", "p-2", "qt-1", json!({ "q": 2 })).await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::get().uri("/api/generated-questions/all"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_get_generated_questions_for_passage() {
    let store = TestStore::new();
    store.seed_question("q-1", "p-1", "qt-1", json!({ "q": 1 })).await;
    store.seed_question("q-2", "p-1", "qt-2", json!({ "q": 2 })).await;
    store.seed_question("q-3", "p-2", "qt-1", json!({ "q": 3 })).await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::get().uri("/api/generated-questions?passageId=p-1&questionTypeId=qt-2"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["questions"][0]["id"], "q-2");

    let (status, body) = send(
        store.state(),
        test::TestRequest::get().uri("/api/generated-questions"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "passageId is required");
}

#[actix_web::test]
async fn test_delete_by_passage_missing_question_type_is_rejected() {
    let store = TestStore::new();
    store.seed_question("q-1", "p-1", "qt-1", json!({ "q": 1 })).await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::delete()
            .uri("/api/generated-questions/delete-by-passage")
            .set_json(json!({ "passageId": "p-1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "passageId and questionTypeId are required");
    assert_eq!(store.generated_questions.delete_call_count(), 0);
    assert_eq!(store.generated_questions.rows.read().await.len(), 1);
}

#[actix_web::test]
async fn test_delete_by_passage_without_body_is_rejected() {
    let store = TestStore::new();

    let (status, body) = send(
        store.state(),
        test::TestRequest::delete().uri("/api/generated-questions/delete-by-passage"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(store.generated_questions.delete_call_count(), 0);
}

#[actix_web::test]
async fn test_delete_by_passage_removes_matching_rows_only() {
    let store = TestStore::new();
    store.seed_question("q-1", "p-1", "qt-1", json!({ "q": 1 })).await;
    store.seed_question("q-2", "p-1", "qt-1", json!({ "q": 2 })).await;
    store.seed_question("q-3", "p-1", "qt-2", json!({ "q": 3 })).await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::delete()
            .uri("/api/generated-questions/delete-by-passage")
            .set_json(json!({ "passageId": "p-1", "questionTypeId": "qt-1" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().unwrap().contains('2'));

    let remaining = store.generated_questions.rows.read().await;
    assert_eq!(remaining.len(), 1);
    assert!(remaining.contains_key("q-3"));
}

#[actix_web::test]
async fn test_reorder_units_updates_storage() {
    let store = TestStore::new();
    store.seed_unit("a", None, 5).await;
    store.seed_unit("b", None, 9).await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::put().uri("/api/units/reorder").set_json(json!({
            "units": [{ "id": "a", "order_index": 1 }, { "id": "b", "order_index": 2 }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let a = store.units.find_by_id("a").await.unwrap().unwrap();
    let b = store.units.find_by_id("b").await.unwrap().unwrap();
    assert_eq!(a.order_index, 1);
    assert_eq!(b.order_index, 2);
}

#[actix_web::test]
async fn test_reorder_units_requires_units_array() {
    let store = TestStore::new();

    let (status, body) = send(
        store.state(),
        test::TestRequest::put()
            .uri("/api/units/reorder")
            .set_json(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "units array is required");

    let (status, body) = send(
        store.state(),
        test::TestRequest::put()
            .uri("/api/units/reorder")
            .set_json(json!({ "units": "a,b" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[actix_web::test]
async fn test_reorder_partial_failure_is_not_rolled_back() {
    let store = TestStore::new();
    store.seed_unit("a", None, 5).await;
    store.seed_unit("b", None, 9).await;
    store.units.failing_ids.write().await.insert("b".to_string());

    let (status, body) = send(
        store.state(),
        test::TestRequest::put().uri("/api/units/reorder").set_json(json!({
            "units": [{ "id": "a", "order_index": 1 }, { "id": "b", "order_index": 2 }]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to reorder units" }));

    let a = store.units.find_by_id("a").await.unwrap().unwrap();
    let b = store.units.find_by_id("b").await.unwrap().unwrap();
    assert_eq!(a.order_index, 1);
    assert_eq!(b.order_index, 9);
}

#[actix_web::test]
async fn test_generate_missing_is_not_implemented() {
    let store = TestStore::new();

    let (status, body) = send(
        store.state(),
        test::TestRequest::post().uri("/api/generation/generate-missing"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body, json!({ "error": "Not implemented yet" }));

    let (status, body) = send(
        store.state(),
        test::TestRequest::post()
            .uri("/api/generation/generate-missing")
            .set_json(json!({ "passageIds": ["p-1"], "force": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["error"], "Not implemented yet");
}

#[actix_web::test]
async fn test_unknown_prompt_is_not_found() {
    let store = TestStore::new();

    let (status, body) = send(
        store.state(),
        test::TestRequest::get().uri("/api/prompts/missing"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Prompt not found" }));
}

#[actix_web::test]
async fn test_prompt_variables_endpoint() {
    let store = TestStore::new();
    store
        .seed_prompt("pr-1", "Hello [[name]], age [[age]], again [[name]]")
        .await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::get().uri("/api/prompts/pr-1/variables"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "variables": ["name", "age"] }));
}

#[actix_web::test]
async fn test_prompt_preview_binds_passage_and_reports_missing() {
    let store = TestStore::new();
    store
        .seed_prompt("pr-1", "Read [[ Passage ]] and write [[count]] questions for [[grade]].")
        .await;
    store.seed_passage("p-1", None, "Foxes are quick.").await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::post()
            .uri("/api/prompts/pr-1/preview")
            .set_json(json!({ "passageId": "p-1", "values": { "count": "3" } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["prompt"],
        "Read Foxes are quick. and write 3 questions for [[grade]]."
    );
    assert_eq!(body["missing"], json!(["grade"]));
    assert_eq!(body["variables"], json!([" Passage ", "count", "grade"]));
}

#[actix_web::test]
async fn test_prompt_preview_unknown_passage() {
    let store = TestStore::new();
    store.seed_prompt("pr-1", "[[passage]]").await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::post()
            .uri("/api/prompts/pr-1/preview")
            .set_json(json!({ "passageId": "nope" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Passage not found");
}

#[actix_web::test]
async fn test_prompt_lint_reports_passage_placeholder() {
    let store = TestStore::new();
    store.seed_prompt("a", "Summarize [[ PASSAGE ]]").await;
    store.seed_prompt("b", "Write about [[topic]]").await;

    let (status, body) = send(store.state(), test::TestRequest::get().uri("/api/prompts/lint")).await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "a");
    assert_eq!(entries[0]["has_passage_placeholder"], true);
    assert_eq!(entries[1]["has_passage_placeholder"], false);
}

#[actix_web::test]
async fn test_create_prompt_validation_error() {
    let store = TestStore::new();

    let (status, body) = send(
        store.state(),
        test::TestRequest::post()
            .uri("/api/prompts")
            .set_json(json!({ "label": "", "prompt": "[[passage]]" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(store.prompts.rows.read().await.is_empty());
}

#[actix_web::test]
async fn test_textbook_tree_orders_and_nests_units() {
    let store = TestStore::new();
    store.seed_textbook("tb-1").await;
    store.seed_unit("u-2", None, 2).await;
    store.seed_unit("u-1", None, 1).await;
    store.seed_unit("u-1b", Some("u-1"), 2).await;
    store.seed_unit("u-1a", Some("u-1"), 1).await;
    store.seed_passage("p-1", Some("u-1a"), "text").await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::get().uri("/api/textbooks/tb-1/tree"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["textbook"]["id"], "tb-1");
    assert_eq!(body["units"][0]["id"], "u-1");
    assert_eq!(body["units"][1]["id"], "u-2");
    assert_eq!(body["units"][0]["children"][0]["id"], "u-1a");
    assert_eq!(body["units"][0]["children"][1]["id"], "u-1b");
    assert_eq!(body["units"][0]["children"][0]["passages"][0]["id"], "p-1");
}

#[actix_web::test]
async fn test_create_and_fetch_passage() {
    let store = TestStore::new();

    let (status, created) = send(
        store.state(),
        test::TestRequest::post()
            .uri("/api/passages")
            .set_json(json!({ "unitId": "u-1", "title": "Foxes", "content": "Foxes are quick." })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = send(
        store.state(),
        test::TestRequest::get().uri(&format!("/api/passages/{}", id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["content"], "Foxes are quick.");
    assert_eq!(fetched["unit_id"], "u-1");
}

#[actix_web::test]
async fn test_delete_question_type_cascades() {
    let store = TestStore::new();
    store.seed_prompt("pr-1", "[[passage]]").await;
    store.seed_question_type("qt-1", "pr-1").await;
    store.seed_question("q-1", "p-1", "qt-1", json!({ "q": 1 })).await;
    store.seed_question("q-2", "p-1", "qt-2", json!({ "q": 2 })).await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::delete().uri("/api/question-types/qt-1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(store.question_types.rows.read().await.is_empty());
    let remaining = store.generated_questions.rows.read().await;
    assert_eq!(remaining.len(), 1);
    assert!(remaining.contains_key("q-2"));
}

#[actix_web::test]
async fn test_create_question_type_requires_existing_prompt() {
    let store = TestStore::new();

    let (status, body) = send(
        store.state(),
        test::TestRequest::post()
            .uri("/api/question-types")
            .set_json(json!({ "name": "Main idea", "promptId": "missing" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Prompt not found");
}

#[actix_web::test]
async fn test_generate_question_stores_result() {
    let store = TestStore::new();
    store
        .seed_prompt("pr-1", "Write a [[question_type]] question about [[passage]].")
        .await;
    store.seed_question_type("qt-1", "pr-1").await;
    store.seed_passage("p-1", None, "Foxes are quick.").await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::post()
            .uri("/api/generation/generate")
            .set_json(json!({ "passageId": "p-1", "questionTypeId": "qt-1" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["passage_id"], "p-1");
    assert_eq!(body["question_type_id"], "qt-1");
    assert_eq!(body["question_data"]["answer"], "Foxes are quick.");
    assert_eq!(store.generated_questions.rows.read().await.len(), 1);
}

#[actix_web::test]
async fn test_generate_question_with_unbound_placeholder() {
    let store = TestStore::new();
    store.seed_prompt("pr-1", "[[passage]] for grade [[grade]]").await;
    store.seed_question_type("qt-1", "pr-1").await;
    store.seed_passage("p-1", None, "Foxes are quick.").await;

    let (status, body) = send(
        store.state(),
        test::TestRequest::post()
            .uri("/api/generation/generate")
            .set_json(json!({ "passageId": "p-1", "questionTypeId": "qt-1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing values for placeholders: grade");
    assert!(store.generated_questions.rows.read().await.is_empty());
}
