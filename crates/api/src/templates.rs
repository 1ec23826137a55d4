//! Page templates.
//!
//! Templates are embedded in the binary and compiled once at startup, so a
//! broken template fails the boot instead of the first request.

use axum::response::Html;
use tera::{Context, Tera};

use crate::error::AppResult;

pub const PROJECT_LIST: &str = "project_list.html";
pub const PROJECT_FORM: &str = "project_form.html";
pub const PROJECT_DETAIL: &str = "project_detail.html";
pub const PROJECT_TASKS: &str = "project_tasks.html";
pub const TASK_FORM: &str = "task_form.html";

const SOURCES: [(&str, &str); 6] = [
    ("base.html", include_str!("../templates/base.html")),
    (PROJECT_LIST, include_str!("../templates/project_list.html")),
    (PROJECT_FORM, include_str!("../templates/project_form.html")),
    (PROJECT_DETAIL, include_str!("../templates/project_detail.html")),
    (PROJECT_TASKS, include_str!("../templates/project_tasks.html")),
    (TASK_FORM, include_str!("../templates/task_form.html")),
];

/// Compiled page templates, shared through [`crate::state::AppState`].
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(SOURCES)?;
        Ok(Self { tera })
    }

    /// Render `name` with `context` into an HTML response body.
    pub fn render(&self, name: &str, context: &Context) -> AppResult<Html<String>> {
        Ok(Html(self.tera.render(name, context)?))
    }
}
