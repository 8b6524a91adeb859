//! Domain entities - the core business objects.

mod pagination;
mod post;
mod submission;
mod validation;

pub use pagination::{
    MAX_PAGE, PAGE_SIZE, PageEntry, Pager, offset, page_count, page_entries, parse_page,
};
pub use post::{Post, PostChanges};
pub use submission::{EditorState, SubmissionState};
pub use validation::{
    Field, FieldErrors, ValidationResult, validate_new_post, validate_post_changes,
};
