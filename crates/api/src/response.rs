//! Shared response envelope types for API handlers.
//!
//! Every JSON API response uses a `{ code, message, data, errors }` envelope.
//! Use [`ApiResponse`] instead of ad-hoc `serde_json::json!` bodies so the
//! shape stays identical across handlers and error paths.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tasktrack_core::pagination::PageRequest;
use tasktrack_core::validation::FieldErrors;

/// Generic message carried by every error envelope.
pub const ERROR_MESSAGE: &str = "An error occurred";

/// Standard `{ code, message, data, errors }` response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
    pub errors: Option<FieldErrors>,
    /// Status written on the wire. Equal to `code` except for deletes.
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success envelope with an explicit status.
    pub fn success(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data: Some(data),
            errors: None,
            status,
        }
    }

    /// `200 OK` success envelope.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::OK, message, data)
    }

    /// `201 Created` success envelope.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::CREATED, message, data)
    }

    /// HTTP status the response is sent with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl ApiResponse<()> {
    /// Delete acknowledgement: `code` 204 with `data: null`.
    ///
    /// Sent as HTTP 200 because a 204 response cannot carry a body.
    pub fn deleted(message: impl Into<String>) -> Self {
        Self {
            code: StatusCode::NO_CONTENT.as_u16(),
            message: message.into(),
            data: None,
            errors: None,
            status: StatusCode::OK,
        }
    }

    /// Error envelope: `data: null`, `errors` populated.
    pub fn error(status: StatusCode, errors: FieldErrors) -> Self {
        Self {
            code: status.as_u16(),
            message: ERROR_MESSAGE.to_string(),
            data: None,
            errors: Some(errors),
            status,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Page-number pagination payload carried in `data` by list endpoints.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T: Serialize> Paginated<T> {
    /// Wrap one page of `results` out of `count` rows.
    ///
    /// `next` / `previous` are relative links on `path`, carrying `filters`
    /// ahead of the pagination parameters.
    pub fn new(
        results: Vec<T>,
        count: i64,
        req: &PageRequest,
        path: &str,
        filters: &[(&str, &str)],
    ) -> Self {
        let link = |page: i64| {
            let mut query: Vec<String> = filters.iter().map(|(k, v)| format!("{k}={v}")).collect();
            query.push(format!("page={page}"));
            query.push(format!("page_size={}", req.page_size));
            format!("{path}?{}", query.join("&"))
        };

        Self {
            count,
            next: req.has_next(count).then(|| link(req.page + 1)),
            previous: req.has_previous().then(|| link(req.page - 1)),
            results,
        }
    }
}
