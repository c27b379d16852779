mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::db::FormattedQuestion;

pub type ApiResponse<T> = Result<Json<T>, ApiError>;

/// Request-level failures, rendered as the standard error envelope
/// `{success: false, error: <status>, message: <text>}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest,
    Unprocessable,
    MethodNotAllowed,
    Database(sqlx::Error),
    Internal(anyhow::Error),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "resource not found"),
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, "bad request"),
            ApiError::Unprocessable => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "unprocessable, form data might be missing",
            ),
            ApiError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            ApiError::Database(_) | ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(error) => tracing::error!("Database error: {error}"),
            ApiError::Internal(error) => tracing::error!("Internal error: {error:#}"),
            _ => {}
        }
        let (status, message) = self.status_and_message();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }));
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        match error {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            other => ApiError::Database(other),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> ApiError {
        ApiError::Internal(error)
    }
}

// decode failures have to wear the envelope too: unparseable payloads are
// bad requests, well-formed JSON of the wrong shape is unprocessable
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> ApiError {
        match rejection {
            JsonRejection::JsonDataError(_) => ApiError::Unprocessable,
            _ => ApiError::BadRequest,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(_: QueryRejection) -> ApiError {
        ApiError::BadRequest
    }
}

fn default_page() -> usize {
    1
}

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: usize,
}

/// Shared success shape of the question listing endpoints.
#[derive(Serialize)]
pub struct QuestionList {
    pub success: bool,
    pub questions: Vec<FormattedQuestion>,
    pub total_questions: usize,
    pub categories: Vec<String>,
    pub current_category: Vec<String>,
}
