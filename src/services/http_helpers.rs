use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// The error envelope returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Logs the failure with its context and returns only the context to the caller.
pub fn internal_error(
    status: StatusCode,
    context: impl std::fmt::Display,
    err: impl std::fmt::Display,
) -> HttpResponse {
    log::error!("{}: {}", context, err);
    error_json(status, context)
}

/// Creates a `{ "error": message }` response with the given status
pub fn error_json(status: StatusCode, message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: message.to_string(),
    })
}

/// Creates a `{ "error": "<resource> not found" }` response
pub fn not_found(resource: impl std::fmt::Display) -> HttpResponse {
    error_json(StatusCode::NOT_FOUND, format!("{} not found", resource))
}

/// Creates a bad request error response
pub fn bad_request(message: impl std::fmt::Display) -> HttpResponse {
    error_json(StatusCode::BAD_REQUEST, message)
}

pub fn not_implemented() -> HttpResponse {
    error_json(StatusCode::NOT_IMPLEMENTED, "Not implemented yet")
}

/// Creates a success JSON response
pub fn success_json<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}

pub fn created_json<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Created().json(data)
}
