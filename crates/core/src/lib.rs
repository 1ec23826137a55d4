//! Shared domain primitives for the task tracker.
//!
//! Holds the types every other crate agrees on: identifier and date
//! aliases, the domain error enum, field-level validation errors, and the
//! page-number pagination arithmetic used by the JSON API.

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;
