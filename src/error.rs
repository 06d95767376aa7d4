// src/error.rs

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::store::StoreError;

/// Global Application Error Enum.
/// Every failure surfaces as one of two kinds; there is no 5xx.
#[derive(Debug)]
pub enum AppError {
    // 404 Not Found
    NotFound(String),

    // 422 Unprocessable Entity (validation, store failures, bad bodies)
    Unprocessable(String),
}

impl AppError {
    pub fn not_found() -> Self {
        AppError::NotFound("Not found".to_string())
    }

    /// Collapses any error into `Unprocessable`, keeping the detail for logs.
    pub fn into_unprocessable(self) -> Self {
        match self {
            AppError::NotFound(msg) => AppError::Unprocessable(msg),
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(detail) => write!(f, "not found: {}", detail),
            AppError::Unprocessable(detail) => write!(f, "unprocessable: {}", detail),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts the error into the uniform `{success, error, message}` envelope.
/// The detail carried by the variant is logged, never sent to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(detail) => {
                tracing::debug!("Not found: {}", detail);
                "Not found"
            }
            AppError::Unprocessable(detail) => {
                tracing::warn!("Unprocessable: {}", detail);
                "Unprocessable"
            }
        };
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!("Store failure: {}", err);
        AppError::Unprocessable(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::from(StoreError::from(err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Unprocessable(err.to_string())
    }
}

/// Missing body, wrong content type and malformed JSON all land here.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Unprocessable(rejection.body_text())
    }
}

/// A path segment that is not an integer id names no resource.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::NotFound(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Unprocessable("bad body".to_string()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_into_unprocessable_downgrades_not_found() {
        let err = AppError::NotFound("question 9 not found".to_string()).into_unprocessable();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "unprocessable: question 9 not found");
    }

    #[test]
    fn test_display_names_kind_and_detail() {
        let err = AppError::NotFound("page 7 is empty (5 questions)".to_string());
        assert_eq!(err.to_string(), "not found: page 7 is empty (5 questions)");
    }

    #[test]
    fn test_store_error_is_unprocessable() {
        let err = AppError::from(StoreError::Rejected("constraint".to_string()));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
