use ai_client::error::AiError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),
    #[error("AI service error: {0}")]
    Ai(#[from] AiError),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Store(store::StoreError::NotFound) => (
                StatusCode::NOT_FOUND,
                "Property not found".to_string(),
            ),
            AppError::Store(store_err) => {
                tracing::error!(error = ?store_err, "Store error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal storage error occurred".to_string(),
                )
            }
            AppError::Ai(ai_err) => {
                tracing::error!(error = ?ai_err, "AI service error.");
                // The upstream model service failed, not this process.
                (
                    StatusCode::BAD_GATEWAY,
                    "The AI service request failed".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
