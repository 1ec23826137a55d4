//! JSON API handlers. Every response uses the `{code, message, data, errors}`
//! envelope from [`crate::response`].

pub mod project;
pub mod task;
