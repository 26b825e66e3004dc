use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// Application error with automatic HTTP status mapping. Every variant
/// carries a short detail string for the log; the response body only ever
/// shows the canonical message for the status.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed input (400)
    Input(&'static str),

    /// No matching resource or empty page (404)
    NotFound(&'static str),

    /// Wrong HTTP verb for a known path (405)
    MethodNotAllowed,

    /// The store rejected the operation (422)
    Unprocessable(&'static str),

    /// Uncaught fault (500)
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Input(detail) => {
                tracing::debug!("bad request: {detail}");
                (StatusCode::BAD_REQUEST, "bad request")
            }
            AppError::NotFound(detail) => {
                tracing::debug!("not found: {detail}");
                (StatusCode::NOT_FOUND, "resource not found")
            }
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
            AppError::Unprocessable(detail) => {
                tracing::warn!("unprocessable: {detail}");
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable entity")
            }
            AppError::Internal(detail) => {
                tracing::error!("internal error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        let body = Json(json!({
            "success": false,
            "error": code.as_u16(),
            "message": message,
        }));

        (code, body).into_response()
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound => AppError::NotFound("no matching row"),
            DbError::Constraint(msg) => {
                tracing::warn!("store rejected operation: {msg}");
                AppError::Unprocessable("constraint violation")
            }
            DbError::Backend(e) => {
                tracing::error!("database error: {e}");
                AppError::Internal("database error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn input_error_is_400() {
        let response = AppError::Input("missing field").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = AppError::NotFound("empty page").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn constraint_violation_maps_to_422() {
        let err: AppError = DbError::Constraint("NOT NULL constraint failed".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn missing_row_maps_to_404() {
        let err: AppError = DbError::NotFound.into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
