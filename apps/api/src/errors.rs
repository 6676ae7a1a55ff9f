use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::document::pdf::PdfError;
use crate::document::reconcile::ReconcileError;
use crate::document::ExtractError;
use crate::tailoring::TailorError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error(transparent)]
    Pdf(#[from] PdfError),

    #[error(transparent)]
    Tailor(#[from] TailorError),

    #[error(transparent)]
    Download(#[from] ReconcileError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Extraction(e) => {
                tracing::warn!("Extraction failed: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_ERROR",
                    e.to_string(),
                )
            }
            AppError::Pdf(e) => {
                tracing::error!("PDF processing error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PDF_ERROR",
                    format!("Failed to process PDF file: {e}"),
                )
            }
            AppError::Tailor(e) => {
                tracing::error!("Tailoring error: {e}");
                (StatusCode::BAD_GATEWAY, "TAILOR_ERROR", e.to_string())
            }
            AppError::Download(e) => (StatusCode::BAD_REQUEST, "DOWNLOAD_ERROR", e.to_string()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Tailor(TailorError("down".into())),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::Download(ReconcileError::NothingToDownload),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::Pdf(PdfError::MissingText), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_tailor_error_message_is_verbatim() {
        let err = AppError::from(TailorError("quota exceeded".into()));
        assert_eq!(err.to_string(), "Failed to tailor resume: quota exceeded");
    }
}
