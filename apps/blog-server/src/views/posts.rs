use askama::Template;
use blog_core::domain::{EditorState, Field, FieldErrors, Pager, Post, SubmissionState};
use blog_shared::dto::{CreatePostForm, EditPostForm};

use super::{ControlView, PaginationView};
use crate::markdown::render_markdown;
use crate::paths;

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Clone)]
pub struct PostSummaryView {
    pub href: String,
    pub title: String,
    pub created_at: String,
}

impl From<&Post> for PostSummaryView {
    fn from(post: &Post) -> Self {
        Self {
            href: paths::post(&post.id),
            title: post.title.clone(),
            created_at: post.created_at.format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

/// `GET /` - one page of posts plus the page selector.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<PostSummaryView>,
    pub pagination: PaginationView,
}

impl IndexTemplate {
    pub fn new(posts: &[Post], pager: &Pager) -> Self {
        Self {
            posts: posts.iter().map(PostSummaryView::from).collect(),
            pagination: PaginationView::from(pager),
        }
    }
}

/// `GET /posts/{id}` - a single rendered post.
#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub title: String,
    pub content_html: String,
    pub edit_href: String,
}

impl From<&Post> for PostTemplate {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content_html: render_markdown(&post.content),
            edit_href: paths::edit_post(&post.id),
        }
    }
}

/// `GET|POST /posts/new` - the create form.
#[derive(Template)]
#[template(path = "new.html")]
pub struct NewPostTemplate {
    pub slug: String,
    pub title: String,
    pub content: String,
    pub slug_error: String,
    pub title_error: String,
    pub content_error: String,
    pub submit: ControlView,
}

impl NewPostTemplate {
    pub fn blank() -> Self {
        Self::build(
            CreatePostForm::default(),
            &FieldErrors::default(),
            SubmissionState::Idle,
        )
    }

    /// Re-render a rejected submission, keeping what the user typed.
    pub fn rejected(form: CreatePostForm, errors: &FieldErrors, state: SubmissionState) -> Self {
        Self::build(form, errors, state)
    }

    fn build(form: CreatePostForm, errors: &FieldErrors, state: SubmissionState) -> Self {
        Self {
            slug: form.slug,
            title: form.title,
            content: form.content,
            slug_error: errors.message(Field::Slug).to_string(),
            title_error: errors.message(Field::Title).to_string(),
            content_error: errors.message(Field::Content).to_string(),
            submit: ControlView::new(state, "Publish", "Publishing..."),
        }
    }
}

/// `GET|POST /posts/{id}/edit` - the edit form and its separate delete control.
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditPostTemplate {
    pub edit_action: String,
    pub delete_action: String,
    pub title: String,
    pub content: String,
    pub title_error: String,
    pub content_error: String,
    pub save: ControlView,
    pub delete: ControlView,
}

impl EditPostTemplate {
    pub fn for_post(post: &Post) -> Self {
        Self::build(
            &post.id,
            post.title.clone(),
            post.content.clone(),
            &FieldErrors::default(),
            EditorState::default(),
        )
    }

    /// Re-render a rejected edit. The delete control keeps its own state.
    pub fn rejected(
        id: &str,
        form: EditPostForm,
        errors: &FieldErrors,
        editor: EditorState,
    ) -> Self {
        Self::build(id, form.title, form.content, errors, editor)
    }

    fn build(
        id: &str,
        title: String,
        content: String,
        errors: &FieldErrors,
        editor: EditorState,
    ) -> Self {
        Self {
            edit_action: paths::edit_post(id),
            delete_action: paths::delete_post(id),
            title,
            content,
            title_error: errors.message(Field::Title).to_string(),
            content_error: errors.message(Field::Content).to_string(),
            save: ControlView::new(editor.edit, "Save changes", "Saving..."),
            delete: ControlView::new(editor.delete, "Delete", "Deleting..."),
        }
    }

    /// Rejected edits show their messages above the form.
    pub fn has_errors(&self) -> bool {
        !self.title_error.is_empty() || !self.content_error.is_empty()
    }
}
