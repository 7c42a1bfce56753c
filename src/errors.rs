use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::services::http_helpers::{error_json, internal_error};

#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Carries the resource name, e.g. `NotFound("Prompt")`.
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("AI provider error: {0}")]
    UpstreamError(String),

    #[error("{0}")]
    NotImplemented(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    /// A server-side failure annotated with the message shown to the caller.
    #[error("{context}: {source}")]
    Failed {
        context: String,
        source: Box<AppError>,
    },
}

impl AppError {
    /// Attaches a caller-facing message to server-side failures. Client errors
    /// (400, 404, 501) keep their own message.
    pub fn context(self, context: impl Into<String>) -> Self {
        match self {
            AppError::DatabaseError(_) | AppError::UpstreamError(_) | AppError::InternalError(_) => {
                AppError::Failed {
                    context: context.into(),
                    source: Box::new(self),
                }
            }
            other => other,
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> AppResult<T>;
}

impl<T> ResultExt<T> for AppResult<T> {
    fn context(self, context: impl Into<String>) -> AppResult<T> {
        self.map_err(|e| e.context(context))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamError(_) => StatusCode::BAD_GATEWAY,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Failed { source, .. } => source.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::Failed { context, source } => internal_error(status, context, source),
            AppError::DatabaseError(_) | AppError::InternalError(_) | AppError::UpstreamError(_) => {
                internal_error(status, "Internal server error", self)
            }
            _ => error_json(status, self.to_string()),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
