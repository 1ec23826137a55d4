use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tasktrack_core::error::CoreError;
use tasktrack_core::validation::FieldErrors;

use crate::response::ApiResponse;

/// Field name used for errors that are not tied to a specific field.
pub const DETAIL: &str = "detail";

/// Field name used for malformed request bodies.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tasktrack_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// A request body that could not be parsed at all.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A path segment that does not parse as an id. No row can match it.
    #[error("Unresolvable path: {0}")]
    InvalidPath(String),

    /// The path exists but not for this HTTP method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(Method),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Core(CoreError::Validation(errors))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPath(rejection.body_text())
    }
}

impl AppError {
    /// Shorthand for a missing row.
    pub fn not_found(entity: &'static str, id: tasktrack_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }

    /// Classify into an HTTP status and the `errors` list of the envelope.
    ///
    /// Server-side failures are logged here and reported with a sanitized
    /// message.
    pub fn classify(&self) -> (StatusCode, FieldErrors) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    not_found()
                }
                CoreError::InvalidPage => (
                    StatusCode::NOT_FOUND,
                    FieldErrors::single(DETAIL, "Invalid page."),
                ),
                CoreError::Validation(errors) => (StatusCode::BAD_REQUEST, errors.clone()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Rendering errors ---
            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                internal()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                FieldErrors::single(NON_FIELD_ERRORS, msg.clone()),
            ),
            AppError::InvalidPath(msg) => {
                tracing::debug!(reason = %msg, "Path did not resolve");
                not_found()
            }
            AppError::MethodNotAllowed(method) => (
                StatusCode::METHOD_NOT_ALLOWED,
                FieldErrors::single(DETAIL, format!("Method \"{method}\" not allowed.")),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, errors) = self.classify();
        ApiResponse::error(status, errors).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and error list.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, FieldErrors) {
    match err {
        sqlx::Error::RowNotFound => not_found(),
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

fn not_found() -> (StatusCode, FieldErrors) {
    (
        StatusCode::NOT_FOUND,
        FieldErrors::single(DETAIL, "Not found."),
    )
}

fn internal() -> (StatusCode, FieldErrors) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        FieldErrors::single(DETAIL, "A server error occurred."),
    )
}

/// Error type for server-rendered page handlers.
///
/// Carries the same classification as [`AppError`] but renders a minimal HTML
/// page instead of the JSON envelope.
#[derive(Debug)]
pub struct PageError(pub AppError);

/// Convenience type alias for page handler return values.
pub type PageResult<T> = Result<T, PageError>;

impl<E> From<E> for PageError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        PageError(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _) = self.0.classify();
        let title = match status.canonical_reason() {
            Some(reason) => format!("{} {reason}", status.as_u16()),
            None => status.as_u16().to_string(),
        };
        let body = format!(
            "<!DOCTYPE html>\n<html><head><title>{title}</title></head>\
             <body><h1>{title}</h1><p><a href=\"/\">Back to projects</a></p></body></html>"
        );
        (status, Html(body)).into_response()
    }
}
