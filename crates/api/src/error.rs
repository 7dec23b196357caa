use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gearshelf_core::error::CoreError;
use gearshelf_db::error::{constraint_name, StorageErrorKind};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for storage
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gearshelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx, kept intact so constraint details survive.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A request body or query string that could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string()),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::InvalidInput(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.to_string())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });

        if let AppError::Core(core) = &self {
            let fields = core.invalid_fields();
            if !fields.is_empty() {
                body["fields"] = json!(fields);
            }
        }

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - Unique violations map to 409 `UNIQUE_VIOLATION`.
/// - Foreign key violations map to 409 `FOREIGN_KEY_VIOLATION`.
/// - Check violations map to 400 `CHECK_VIOLATION`.
///
/// Constraint violations carry the database's own message. Everything else
/// maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    let (status, code) = match StorageErrorKind::of(err) {
        StorageErrorKind::UniqueViolation => (StatusCode::CONFLICT, "UNIQUE_VIOLATION"),
        StorageErrorKind::ForeignKeyViolation => (StatusCode::CONFLICT, "FOREIGN_KEY_VIOLATION"),
        StorageErrorKind::CheckViolation => (StatusCode::BAD_REQUEST, "CHECK_VIOLATION"),
        StorageErrorKind::Other => {
            tracing::error!(error = %err, "Database error");
            return internal();
        }
    };

    let message = match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    };
    tracing::warn!(
        code,
        constraint = constraint_name(err).unwrap_or("unknown"),
        error = %message,
        "Constraint violation"
    );
    (status, code, message)
}
