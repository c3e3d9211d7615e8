use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Request-level error taxonomy. Every handler resolves to one of these;
/// nothing crosses a request boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required field missing or empty on a write payload. Never retried.
    #[error("{0}")]
    Validation(String),

    /// No row for the given id.
    #[error("{0}")]
    NotFound(String),

    /// Anything the store reports: connectivity, pool acquire timeout,
    /// constraint violation, malformed query.
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
