//! Error handling - maps handler outcomes to HTTP responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode, web};
use thiserror::Error;

use blog_core::{FieldErrors, RepoError};
use blog_shared::{ErrorResponse, FieldErrorResponse};

/// Application-level error type.
///
/// Validation failures carry a `fieldErrors` body, malformed input and
/// internal failures an RFC 7807 document; not-found and conflict answers
/// have no body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Not found")]
    NotFound,

    #[error("Identifier in path does not match identifier in body")]
    Conflict,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            AppError::Validation(errors) => {
                response.json(FieldErrorResponse::from(errors.clone()))
            }
            AppError::MalformedInput(detail) => response.json(ErrorResponse::bad_request(detail)),
            AppError::NotFound | AppError::Conflict => response.finish(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                response.json(ErrorResponse::internal_error())
            }
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound,
            RepoError::Constraint(msg) => {
                tracing::error!("Database constraint violation: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Coerce a path segment into a numeric identifier.
pub fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::MalformedInput(format!("'{raw}' is not a valid identifier")))
}

/// Unreadable JSON bodies are answered like any other malformed input.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::MalformedInput(err.to_string()).into()
    })
}

/// Missing or unreadable query strings are malformed input.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(
        |err: error::QueryPayloadError, _req: &HttpRequest| {
            AppError::MalformedInput(err.to_string()).into()
        },
    )
}
