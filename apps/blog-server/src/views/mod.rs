//! HTML views - askama templates and the view models they render.

mod pagination;
mod posts;

use actix_web::{HttpResponse, http::StatusCode, http::header::ContentType};
use askama::Template;
use blog_shared::ErrorResponse;

pub use pagination::PaginationView;
pub use posts::{EditPostTemplate, IndexTemplate, NewPostTemplate, PostTemplate};

use crate::middleware::error::AppResult;

/// Render `template` as an HTML response with `status`.
pub fn render<T: Template>(status: StatusCode, template: &T) -> AppResult<HttpResponse> {
    let body = template.render()?;
    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}

/// Generic error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub title: String,
    pub detail: String,
}

impl From<&ErrorResponse> for ErrorTemplate {
    fn from(problem: &ErrorResponse) -> Self {
        Self {
            status: problem.status,
            title: problem.title.clone(),
            detail: problem.detail.clone().unwrap_or_default(),
        }
    }
}

/// A submit button whose label and enabled state follow its submission state.
#[derive(Clone)]
pub struct ControlView {
    pub label: &'static str,
    pub busy_label: &'static str,
    pub disabled: bool,
}

impl ControlView {
    pub fn new(
        state: blog_core::domain::SubmissionState,
        label: &'static str,
        busy_label: &'static str,
    ) -> Self {
        let busy = state.is_busy();
        Self {
            label: if busy { busy_label } else { label },
            busy_label,
            disabled: busy,
        }
    }
}
