use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fansite_core::error::CoreError;
use fansite_disney::DisneyApiError;
use serde_json::json;

/// Application-level error type for the JSON handlers.
///
/// Wraps [`CoreError`] for domain errors and [`DisneyApiError`] for upstream
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses. HTML pages do not use this type:
/// they render failures as text inside the page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fansite_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The Disney API call failed.
    #[error(transparent)]
    Upstream(#[from] DisneyApiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Upstream errors: only the operation's fixed message leaks ---
            AppError::Upstream(err) => {
                tracing::warn!(operation = %err.operation(), error = %err, "Upstream call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    err.failure_message().to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
