use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use marquee_core::validation::FieldViolation;
use serde::Serialize;

/// The entry operation a store call was made for.
///
/// Determines the failure message and whether a store failure is reported
/// as 400 (writes) or 500 (reads).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOp {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl EntryOp {
    pub fn failure_message(self) -> &'static str {
        match self {
            EntryOp::Create => "Failed to create entry",
            EntryOp::List => "Failed to fetch entries",
            EntryOp::Get => "Failed to fetch entry",
            EntryOp::Update => "Failed to update entry",
            EntryOp::Delete => "Failed to delete entry",
        }
    }

    fn store_failure_status(self) -> StatusCode {
        match self {
            EntryOp::List | EntryOp::Get => StatusCode::INTERNAL_SERVER_ERROR,
            EntryOp::Create | EntryOp::Update | EntryOp::Delete => StatusCode::BAD_REQUEST,
        }
    }
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The store failed while serving `op`.
    #[error("{}: {source}", .op.failure_message())]
    Store {
        op: EntryOp,
        #[source]
        source: sqlx::Error,
    },

    /// The request could not be decoded (bad JSON, bad path segment).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Attach the operation to a store result.
pub trait StoreResultExt<T> {
    fn during(self, op: EntryOp) -> AppResult<T>;
}

impl<T> StoreResultExt<T> for Result<T, sqlx::Error> {
    fn during(self, op: EntryOp) -> AppResult<T> {
        self.map_err(|source| AppError::Store { op, source })
    }
}

/// Body of the `error` field in a failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldViolation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    success: bool,
    message: String,
    error: ErrorBody,
}

impl ErrorBody {
    fn code(code: &'static str) -> Self {
        Self {
            code,
            fields: Vec::new(),
            detail: None,
        }
    }

    fn with_detail(code: &'static str, detail: String) -> Self {
        Self {
            detail: Some(detail),
            ..Self::code(code)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                format!("{entity} not found"),
                ErrorBody::with_detail("NOT_FOUND", format!("{entity} with id {id} not found")),
            ),
            AppError::Core(CoreError::Validation(failure)) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                ErrorBody {
                    fields: failure.violations,
                    ..ErrorBody::code("VALIDATION_ERROR")
                },
            ),
            AppError::Store { op, source } => {
                tracing::error!(error = %source, operation = ?op, "Store error");
                (
                    op.store_failure_status(),
                    op.failure_message().to_string(),
                    ErrorBody::code("STORE_ERROR"),
                )
            }
            AppError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                "Invalid request".to_string(),
                ErrorBody::with_detail("BAD_REQUEST", detail),
            ),
        };

        let body = ErrorEnvelope {
            success: false,
            message,
            error,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
