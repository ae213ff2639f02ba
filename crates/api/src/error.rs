use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use decor_storage::StorageError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error
/// responses: `{ "error": ..., "code": ... }` with an appropriate status,
/// except for credential mismatches, whose body shape is pinned by the
/// admin frontend contract.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A database error from sqlx, carrying the engine diagnostic.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An upload backend error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Login credential mismatch. Deliberately carries no detail: the
    /// response does not distinguish unknown user from wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Contract shape: the admin frontend checks `success` and
            // shows `message` verbatim.
            AppError::InvalidCredentials => {
                let body = json!({ "success": false, "message": "Invalid credentials" });
                return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
            }

            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Storage(err) => classify_storage_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Internal(msg) => {
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

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations map to 409 (Postgres reports code
///   `23505`; SQLite `2067` for unique and `1555` for primary key).
/// - Everything else maps to 500 with a sanitized message; the full
///   diagnostic goes to the log.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if matches!(
                db_err.code().as_deref(),
                Some("23505") | Some("2067") | Some("1555")
            ) {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    "Duplicate value violates a unique constraint".to_string(),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify an upload backend error.
///
/// Disallowed formats are the client's fault (400); everything else --
/// credentials, network, disk -- is a 500 with the diagnostic logged.
fn classify_storage_error(err: &StorageError) -> (StatusCode, &'static str, String) {
    match err {
        StorageError::UnsupportedFormat(ext) => (
            StatusCode::BAD_REQUEST,
            "UNSUPPORTED_FORMAT",
            format!("Unsupported image format: {ext:?}"),
        ),
        other => {
            tracing::error!(error = %other, "Upload storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
