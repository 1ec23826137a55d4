//! Extractors whose rejections use the API error envelope.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;

/// `axum::Json` with rejections mapped to the error envelope.
///
/// A body that is not valid JSON, or does not match the payload's types,
/// becomes a 400 with a single `non_field_errors` entry.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with rejections mapped to the error envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// `axum::extract::Path` with rejections mapped to the error envelope.
///
/// An id segment that is not an integer, or overflows one, cannot name a row
/// and is reported as a 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
