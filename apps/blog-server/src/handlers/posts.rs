//! Post handlers - list, detail, create, edit and delete.

use actix_web::{HttpResponse, http::StatusCode, http::header, web};

use blog_core::DomainError;
use blog_core::domain::{
    EditorState, PAGE_SIZE, Pager, Post, SubmissionState, ValidationResult, offset, page_count,
    parse_page, validate_new_post, validate_post_changes,
};
use blog_core::error::RepoError;
use blog_shared::dto::{CreatePostForm, EditAction, EditPostForm, ListQuery};

use crate::middleware::error::AppResult;
use crate::paths;
use crate::state::AppState;
use crate::views::{EditPostTemplate, IndexTemplate, NewPostTemplate, PostTemplate, render};

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Run one store write under `submission`, which must not already be in flight.
/// The write is not started when `begin` refuses.
async fn submit<T>(
    submission: &mut SubmissionState,
    action: &'static str,
    write: impl Future<Output = Result<T, RepoError>>,
) -> AppResult<T> {
    submission.begin(action)?;
    match write.await {
        Ok(value) => {
            submission.succeed();
            Ok(value)
        }
        Err(err) => {
            submission.fail();
            tracing::warn!(action, error = %err, "Submission failed");
            Err(err.into())
        }
    }
}

async fn find_post(state: &AppState, id: String) -> AppResult<Post> {
    match state.posts.find_by_id(id.clone()).await? {
        Some(post) => Ok(post),
        None => Err(DomainError::post_not_found(id).into()),
    }
}

/// GET /?page=<n>
pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let page = parse_page(query.page.as_deref());

    let (posts, total) = tokio::try_join!(
        state.posts.find_page(offset(page), PAGE_SIZE),
        state.posts.count(),
    )?;

    let pager = Pager::new(page, page_count(total));
    tracing::debug!(
        page,
        page_count = pager.page_count,
        shown = posts.len(),
        "Listing posts"
    );

    render(StatusCode::OK, &IndexTemplate::new(&posts, &pager))
}

/// GET /posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;
    render(StatusCode::OK, &PostTemplate::from(&post))
}

/// GET /posts/new
pub async fn new_form() -> AppResult<HttpResponse> {
    render(StatusCode::OK, &NewPostTemplate::blank())
}

/// POST /posts/new
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<CreatePostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let mut submission = SubmissionState::default();

    match validate_new_post(&form.slug, &form.title, &form.content) {
        ValidationResult::Invalid(errors) => {
            tracing::debug!("New post rejected: invalid fields");
            submission.fail();
            render(
                StatusCode::OK,
                &NewPostTemplate::rejected(form, &errors, submission),
            )
        }
        ValidationResult::Valid(post) => {
            let saved = submit(&mut submission, "create", async {
                state.simulate_latency().await;
                state.posts.insert(post).await
            })
            .await?;
            tracing::info!(post_id = %saved.id, "Post created");
            Ok(see_other(paths::HOME))
        }
    }
}

/// GET /posts/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;
    render(StatusCode::OK, &EditPostTemplate::for_post(&post))
}

/// POST /posts/{id}/edit
///
/// `action=delete` is handled exactly like `POST /posts/{id}/delete`.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<EditPostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = form.into_inner();
    let mut editor = EditorState::default();

    if form.action == EditAction::Delete {
        return delete_post(&state, id, &mut editor.delete).await;
    }

    match validate_post_changes(&form.title, &form.content) {
        ValidationResult::Invalid(errors) => {
            tracing::debug!(post_id = %id, "Post edit rejected: missing fields");
            editor.edit.fail();
            render(
                StatusCode::OK,
                &EditPostTemplate::rejected(&id, form, &errors, editor),
            )
        }
        ValidationResult::Valid(changes) => {
            submit(&mut editor.edit, "edit", async {
                state.simulate_latency().await;
                state.posts.update_content(id.clone(), changes).await
            })
            .await?;
            tracing::info!(post_id = %id, "Post updated");
            Ok(see_other(&paths::post(&id)))
        }
    }
}

/// POST /posts/{id}/delete
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let mut submission = SubmissionState::default();
    delete_post(&state, path.into_inner(), &mut submission).await
}

async fn delete_post(
    state: &AppState,
    id: String,
    submission: &mut SubmissionState,
) -> AppResult<HttpResponse> {
    submit(submission, "delete", state.posts.delete(id.clone())).await?;
    tracing::info!(post_id = %id, "Post deleted");
    Ok(see_other(paths::HOME))
}
