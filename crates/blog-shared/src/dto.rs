//! Data Transfer Objects - form bodies and query strings accepted by the blog.
//!
//! Missing form fields decode as empty strings so that validation, not the
//! decoder, decides what to report.

use serde::{Deserialize, Serialize};

/// Query string of the post list. `page` stays raw so bad input never fails decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
}

/// Body of `POST /posts/new`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostForm {
    pub slug: String,
    pub title: String,
    pub content: String,
}

/// Which button submitted the edit page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditAction {
    #[default]
    Edit,
    Delete,
}

/// Body of `POST /posts/{id}/edit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditPostForm {
    pub title: String,
    pub content: String,
    pub action: EditAction,
}
