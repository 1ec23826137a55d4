//! Request handlers.
//!
//! `pages` serves the server-rendered flows (HTML, redirects and the small
//! JSON acknowledgements used by in-page buttons). `api` serves the enveloped
//! JSON API.

pub mod api;
pub mod pages;
