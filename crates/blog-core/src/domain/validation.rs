//! Required-field checks for the create and edit forms.
//!
//! A field is missing only when it is the empty string. Whitespace-only values pass.
//! Slugs that would be shadowed by a fixed route under `/posts/` are refused.

use super::post::{Post, PostChanges};

/// A user-supplied form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Slug,
    Title,
    Content,
}

/// `/posts/new` always serves the create form, so a post with this slug could never be viewed.
const RESERVED_SLUGS: &[&str] = &["new"];

impl Field {
    pub fn missing_message(self) -> &'static str {
        match self {
            Field::Slug => "must fill in slug",
            Field::Title => "must fill in title",
            Field::Content => "must fill in content",
        }
    }
}

/// One message per validated field, in form order. Valid fields carry an empty message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, String)>,
}

impl FieldErrors {
    fn check(fields: &[(Field, &str)]) -> Self {
        let entries = fields
            .iter()
            .map(|&(field, value)| {
                let message = if value.is_empty() {
                    field.missing_message().to_string()
                } else {
                    String::new()
                };
                (field, message)
            })
            .collect();
        Self { entries }
    }

    fn reject(&mut self, field: Field, message: &str) {
        if let Some((_, msg)) = self.entries.iter_mut().find(|(f, _)| *f == field) {
            *msg = message.to_string();
        }
    }

    /// Message for `field`, empty when the field is valid or was not validated.
    pub fn message(&self, field: Field) -> &str {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
            .unwrap_or("")
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|(_, msg)| !msg.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Outcome of validating a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult<T> {
    Valid(T),
    Invalid(FieldErrors),
}

impl<T> ValidationResult<T> {
    fn from_errors(errors: FieldErrors, build: impl FnOnce() -> T) -> Self {
        if errors.has_errors() {
            ValidationResult::Invalid(errors)
        } else {
            ValidationResult::Valid(build())
        }
    }
}

/// Validate the create form. The slug becomes the new post's id.
pub fn validate_new_post(slug: &str, title: &str, content: &str) -> ValidationResult<Post> {
    let mut errors = FieldErrors::check(&[
        (Field::Slug, slug),
        (Field::Title, title),
        (Field::Content, content),
    ]);
    if RESERVED_SLUGS.contains(&slug) {
        errors.reject(Field::Slug, "slug is reserved");
    }
    ValidationResult::from_errors(errors, || {
        Post::new(slug.to_string(), title.to_string(), content.to_string())
    })
}

/// Validate the edit form.
pub fn validate_post_changes(title: &str, content: &str) -> ValidationResult<PostChanges> {
    let errors = FieldErrors::check(&[(Field::Title, title), (Field::Content, content)]);
    ValidationResult::from_errors(errors, || PostChanges {
        title: title.to_string(),
        content: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_slug_reports_every_field() {
        let ValidationResult::Invalid(errors) = validate_new_post("", "t", "c") else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.message(Field::Slug), "must fill in slug");
        assert_eq!(errors.message(Field::Title), "");
        assert_eq!(errors.message(Field::Content), "");
        assert_eq!(errors.iter().count(), 3);
    }

    #[test]
    fn test_all_fields_missing() {
        let ValidationResult::Invalid(errors) = validate_new_post("", "", "") else {
            panic!("expected validation failure");
        };
        let fields: Vec<Field> = errors
            .iter()
            .filter(|(_, msg)| !msg.is_empty())
            .map(|(field, _)| field)
            .collect();
        assert_eq!(fields, [Field::Slug, Field::Title, Field::Content]);
    }

    #[test]
    fn test_valid_new_post_uses_slug_as_id() {
        let ValidationResult::Valid(post) = validate_new_post("hello-world", "Hello", "# Hi")
        else {
            panic!("expected valid post");
        };
        assert_eq!(post.id, "hello-world");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "# Hi");
    }

    #[test]
    fn test_route_slug_is_reserved() {
        let ValidationResult::Invalid(errors) = validate_new_post("new", "t", "c") else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.message(Field::Slug), "slug is reserved");
        assert_eq!(errors.message(Field::Title), "");
        assert!(matches!(
            validate_new_post("new-post", "t", "c"),
            ValidationResult::Valid(_)
        ));
    }

    #[test]
    fn test_whitespace_only_passes() {
        assert!(matches!(
            validate_new_post(" ", "\t", "\n"),
            ValidationResult::Valid(_)
        ));
    }

    #[test]
    fn test_edit_reports_title_only() {
        let ValidationResult::Invalid(errors) = validate_post_changes("", "body") else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.message(Field::Title), "must fill in title");
        assert_eq!(errors.message(Field::Content), "");
        assert_eq!(errors.message(Field::Slug), "");
    }
}
