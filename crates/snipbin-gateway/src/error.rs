use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use snipbin_core::PastebinError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors as rendered to HTTP clients.
///
/// A failed save must stay distinguishable from "no such snippet":
/// storage failures map to 500, a missing or no-longer-live snippet
/// to 404, and a rejected request to 400.
pub enum AppError {
    NotFound,
    Pastebin(PastebinError),
}

impl From<PastebinError> for AppError {
    fn from(value: PastebinError) -> Self {
        Self::Pastebin(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "snippet not found".to_string()),
            AppError::Pastebin(PastebinError::InvalidInput(message)) => {
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Pastebin(PastebinError::Storage(e)) => {
                tracing::error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage failure".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
