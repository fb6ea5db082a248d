use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Every failure the service can report. Validation failures come straight
/// from the input schema layer (serde via the `Json` extractor); storage
/// failures come from sqlx. Nothing is retried.
#[derive(Debug)]
pub enum ApiError {
    Validation(JsonRejection),
    Storage(sqlx::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Storage(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(rejection) => {
                // 400 for malformed JSON, 422 for a missing field or wrong
                // primitive type, 415 for a bad content type.
                let status = rejection.status();
                let body = json!({
                    "error": "validation_error",
                    "message": rejection.body_text(),
                });
                (status, Json(body)).into_response()
            }
            ApiError::Storage(err) => {
                tracing::error!("database error: {:?}", err);
                let body = json!({
                    "error": "storage_unavailable",
                    "message": "database operation failed",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
