//! URL paths for post pages. Slugs are percent-encoded as a single path segment.

use urlencoding::encode;

pub const HOME: &str = "/";

pub fn post(id: &str) -> String {
    format!("/posts/{}", encode(id))
}

pub fn edit_post(id: &str) -> String {
    format!("/posts/{}/edit", encode(id))
}

pub fn delete_post(id: &str) -> String {
    format!("/posts/{}/delete", encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_single_segments() {
        assert_eq!(post("hello-world"), "/posts/hello-world");
        assert_eq!(edit_post("a b/c"), "/posts/a%20b%2Fc/edit");
        assert_eq!(delete_post("ü"), "/posts/%C3%BC/delete");
    }
}
