use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bdsql_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
/// validation failures become `{ "errors": [...] }`, everything else
/// becomes `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bdsql_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

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
        let (status, code, message) = match self {
            AppError::Core(CoreError::Validation(errors)) => {
                tracing::debug!(count = errors.len(), "Rejected invalid record");
                return (StatusCode::BAD_REQUEST, axum::Json(json!({ "errors": errors })))
                    .into_response();
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// The sanitized 500 triple; database and internal detail never leave the log.
fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bdsql_core::validation::FieldViolation;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = AppError::Core(CoreError::Validation(vec![FieldViolation::new(
            "type",
            "type is required",
        )]));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_map_to_internal_server_error() {
        let err = AppError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn bad_request_keeps_its_status() {
        let err = AppError::BadRequest("Expected JSON".into());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
